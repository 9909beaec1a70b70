pub mod store;
pub mod ui;
