use chrono::Utc;
use contracts::domain::maintenance::{
    advance_ticket, create_ticket, seed_tickets, MaintenanceTicket, TicketFields,
};
use leptos::prelude::*;

const TICKETS_KEY: &str = "ms_tickets";

/// Maintenance tickets backed by localStorage, seeded with the mock
/// records on first load (or whenever the stored value is corrupt).
#[derive(Clone, Copy)]
pub struct TicketStore {
    pub tickets: RwSignal<Vec<MaintenanceTicket>>,
}

impl TicketStore {
    pub fn new() -> Self {
        let tickets = crate::shared::storage::load_json_or(TICKETS_KEY, seed_tickets);
        Self { tickets: RwSignal::new(tickets) }
    }

    fn persist(&self) {
        self.tickets
            .with_untracked(|t| crate::shared::storage::save_json(TICKETS_KEY, t));
    }

    pub fn create(&self, fields: TicketFields) -> Result<MaintenanceTicket, String> {
        let created = self
            .tickets
            .try_update(|t| create_ticket(t, fields, Utc::now()))
            .unwrap_or_else(|| Err("lista de chamados indisponível".to_string()))?;
        self.persist();
        Ok(created)
    }

    pub fn advance(&self, id: &str) {
        self.tickets.update(|t| advance_ticket(t, id));
        self.persist();
    }
}

pub fn use_tickets() -> TicketStore {
    use_context::<TicketStore>().expect("TicketStore not provided")
}
