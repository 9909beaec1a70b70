pub mod checkin;
pub mod checklist;
pub mod condominium;
pub mod maintenance;
pub mod reports;
