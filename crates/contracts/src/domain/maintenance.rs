use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "Baixa")]
    Baixa,
    #[serde(rename = "Média")]
    Media,
    #[serde(rename = "Alta")]
    Alta,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Baixa => "Baixa",
            Urgency::Media => "Média",
            Urgency::Alta => "Alta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(rename = "Aberto")]
    Aberto,
    #[serde(rename = "Em Andamento")]
    EmAndamento,
    #[serde(rename = "Concluído")]
    Concluido,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Aberto => "Aberto",
            TicketStatus::EmAndamento => "Em Andamento",
            TicketStatus::Concluido => "Concluído",
        }
    }

    /// Aberto -> Em Andamento -> Concluído; Concluído is terminal.
    pub fn advanced(&self) -> TicketStatus {
        match self {
            TicketStatus::Aberto => TicketStatus::EmAndamento,
            TicketStatus::EmAndamento | TicketStatus::Concluido => TicketStatus::Concluido,
        }
    }
}

/// Filter tabs of the maintenance screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketFilter {
    #[default]
    Todos,
    Abertos,
    Andamento,
    Concluidos,
}

impl TicketFilter {
    pub fn all() -> [TicketFilter; 4] {
        [
            TicketFilter::Todos,
            TicketFilter::Abertos,
            TicketFilter::Andamento,
            TicketFilter::Concluidos,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketFilter::Todos => "Todos",
            TicketFilter::Abertos => "Abertos",
            TicketFilter::Andamento => "Andamento",
            TicketFilter::Concluidos => "Concluídos",
        }
    }

    pub fn matches(&self, status: TicketStatus) -> bool {
        match self {
            TicketFilter::Todos => true,
            TicketFilter::Abertos => status == TicketStatus::Aberto,
            TicketFilter::Andamento => status == TicketStatus::EmAndamento,
            TicketFilter::Concluidos => status == TicketStatus::Concluido,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTicket {
    pub id: String,
    pub condo: String,
    pub area: String,
    pub problem: String,
    pub urgency: Urgency,
    pub status: TicketStatus,
    pub date: String,
}

/// Form payload for "Abrir Chamado".
#[derive(Debug, Clone, Default)]
pub struct TicketFields {
    pub condo: String,
    pub area: String,
    pub problem: String,
    pub urgency: Option<Urgency>,
}

pub fn seed_tickets() -> Vec<MaintenanceTicket> {
    vec![
        MaintenanceTicket {
            id: "M1".to_string(),
            condo: "Residencial Jardins".to_string(),
            area: "Hall de Entrada".to_string(),
            problem: "Lâmpada queimada e infiltração leve no teto.".to_string(),
            urgency: Urgency::Media,
            status: TicketStatus::Aberto,
            date: "12/10/2023".to_string(),
        },
        MaintenanceTicket {
            id: "M2".to_string(),
            condo: "Blue Sky Towers".to_string(),
            area: "Elevador 02".to_string(),
            problem: "Ruído excessivo durante subida.".to_string(),
            urgency: Urgency::Alta,
            status: TicketStatus::EmAndamento,
            date: "11/10/2023".to_string(),
        },
        MaintenanceTicket {
            id: "M3".to_string(),
            condo: "Condomínio Horizonte".to_string(),
            area: "Piscina".to_string(),
            problem: "Ajuste de pH e limpeza profunda necessária.".to_string(),
            urgency: Urgency::Baixa,
            status: TicketStatus::Concluido,
            date: "10/10/2023".to_string(),
        },
    ]
}

pub fn filter_tickets(tickets: &[MaintenanceTicket], filter: TicketFilter) -> Vec<&MaintenanceTicket> {
    tickets.iter().filter(|t| filter.matches(t.status)).collect()
}

/// Opens a new ticket and prepends it. The problem description is the one
/// mandatory field; condo and area default to placeholders when blank.
pub fn create_ticket(
    tickets: &mut Vec<MaintenanceTicket>,
    fields: TicketFields,
    now: DateTime<Utc>,
) -> Result<MaintenanceTicket, String> {
    if fields.problem.trim().is_empty() {
        return Err("Descreva o problema".to_string());
    }
    let short_id = Uuid::new_v4().simple().to_string()[..6].to_uppercase();
    let ticket = MaintenanceTicket {
        id: format!("M{}", short_id),
        condo: non_blank(&fields.condo, "Não informado"),
        area: non_blank(&fields.area, "Área comum"),
        problem: fields.problem.trim().to_string(),
        urgency: fields.urgency.unwrap_or(Urgency::Baixa),
        status: TicketStatus::Aberto,
        date: now.format("%d/%m/%Y").to_string(),
    };
    tickets.insert(0, ticket.clone());
    Ok(ticket)
}

pub fn advance_ticket(tickets: &mut [MaintenanceTicket], id: &str) {
    if let Some(ticket) = tickets.iter_mut().find(|t| t.id == id) {
        ticket.status = ticket.status.advanced();
    }
}

fn non_blank(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, 12, 12, 0, 0).unwrap()
    }

    #[test]
    fn tab_filters_partition_the_seed() {
        let tickets = seed_tickets();
        assert_eq!(filter_tickets(&tickets, TicketFilter::Todos).len(), 3);
        assert_eq!(filter_tickets(&tickets, TicketFilter::Abertos).len(), 1);
        assert_eq!(filter_tickets(&tickets, TicketFilter::Andamento).len(), 1);
        assert_eq!(filter_tickets(&tickets, TicketFilter::Concluidos).len(), 1);
        assert_eq!(filter_tickets(&tickets, TicketFilter::Abertos)[0].id, "M1");
    }

    #[test]
    fn create_requires_a_problem_description() {
        let mut tickets = seed_tickets();
        let err = create_ticket(&mut tickets, TicketFields::default(), noon());
        assert!(err.is_err());
        assert_eq!(tickets.len(), 3);
    }

    #[test]
    fn create_prepends_an_open_ticket() {
        let mut tickets = seed_tickets();
        let ticket = create_ticket(
            &mut tickets,
            TicketFields {
                condo: "Residencial Jardins".to_string(),
                area: "Playground".to_string(),
                problem: "Balanço com corrente solta.".to_string(),
                urgency: Some(Urgency::Alta),
            },
            noon(),
        )
        .unwrap();
        assert_eq!(tickets[0].id, ticket.id);
        assert_eq!(ticket.status, TicketStatus::Aberto);
        assert_eq!(ticket.date, "12/10/2023");
        assert!(ticket.id.starts_with('M'));
        assert_eq!(tickets.len(), 4);

        let json = serde_json::to_string(&tickets).unwrap();
        let back: Vec<MaintenanceTicket> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tickets);
    }

    #[test]
    fn blank_condo_and_area_get_placeholders() {
        let mut tickets = Vec::new();
        let ticket = create_ticket(
            &mut tickets,
            TicketFields {
                problem: "Vazamento".to_string(),
                ..Default::default()
            },
            noon(),
        )
        .unwrap();
        assert_eq!(ticket.condo, "Não informado");
        assert_eq!(ticket.area, "Área comum");
        assert_eq!(ticket.urgency, Urgency::Baixa);
    }

    #[test]
    fn advance_walks_the_status_ladder() {
        let mut tickets = seed_tickets();
        advance_ticket(&mut tickets, "M1");
        assert_eq!(tickets[0].status, TicketStatus::EmAndamento);
        advance_ticket(&mut tickets, "M1");
        assert_eq!(tickets[0].status, TicketStatus::Concluido);
        advance_ticket(&mut tickets, "M1"); // terminal
        assert_eq!(tickets[0].status, TicketStatus::Concluido);
        advance_ticket(&mut tickets, "missing"); // no-op
    }

    #[test]
    fn status_serde_uses_display_labels() {
        let json = serde_json::to_string(&TicketStatus::EmAndamento).unwrap();
        assert_eq!(json, "\"Em Andamento\"");
        let back: TicketStatus = serde_json::from_str("\"Concluído\"").unwrap();
        assert_eq!(back, TicketStatus::Concluido);
    }
}
