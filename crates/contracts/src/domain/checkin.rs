use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Steps of the field worker's QR check-in flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckinStep {
    #[default]
    Scan,
    Form,
    Success,
}

/// Scan -> Form -> Success -> Scan state machine.
///
/// Scanning is simulated by choosing an area from a fixed menu. Submitting
/// the form always succeeds (note and photos are optional); cancelling
/// from the form is free and discards the uncommitted state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckinFlow {
    pub step: CheckinStep,
    pub area: Option<String>,
    pub observation: String,
    pub photos: Vec<String>,
}

impl CheckinFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan -> Form. The area identifier is mandatory.
    pub fn scan(&mut self, area: &str) -> Result<(), String> {
        if self.step != CheckinStep::Scan {
            return Err("Leitura já realizada".to_string());
        }
        if area.trim().is_empty() {
            return Err("Selecione um ambiente".to_string());
        }
        self.area = Some(area.to_string());
        self.step = CheckinStep::Form;
        Ok(())
    }

    /// Form -> Success. Cannot fail; returns the confirmed log entry.
    pub fn submit(&mut self, user_name: &str, now: DateTime<Utc>) -> Result<CleaningLog, String> {
        if self.step != CheckinStep::Form {
            return Err("Nenhuma leitura em andamento".to_string());
        }
        let area = self.area.clone().unwrap_or_default();
        self.step = CheckinStep::Success;
        Ok(CleaningLog::confirmed(&area, user_name, &self.observation, now))
    }

    /// Form -> Scan back-transition, discarding note and photo state.
    pub fn cancel(&mut self) {
        if self.step == CheckinStep::Form {
            self.reset();
        }
    }

    /// Success -> Scan (fired by the auto-reset timer). Clears every
    /// transient field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Historical cleaning confirmation an Administrador/Síndico reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningLog {
    pub id: String,
    pub area: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub time: String,
    pub date: String,
    pub status: String,
}

impl CleaningLog {
    fn confirmed(area: &str, user_name: &str, observation: &str, now: DateTime<Utc>) -> Self {
        let status = if observation.trim().is_empty() {
            "Concluído".to_string()
        } else {
            format!("Concluído — {}", observation.trim())
        };
        Self {
            id: Uuid::new_v4().to_string(),
            area: area.to_string(),
            user_name: user_name.to_string(),
            time: now.format("%H:%M").to_string(),
            date: now.format("%d/%m/%Y").to_string(),
            status,
        }
    }
}

/// Mock history shown before any real check-in is registered.
pub fn seed_cleaning_logs() -> Vec<CleaningLog> {
    let entry = |id: &str, area: &str, user: &str, time: &str| CleaningLog {
        id: id.to_string(),
        area: area.to_string(),
        user_name: user.to_string(),
        time: time.to_string(),
        date: "Hoje".to_string(),
        status: "Concluído".to_string(),
    };
    vec![
        entry("1", "Garagem G1", "Ricardo Santos", "10:45"),
        entry("2", "Hall Social", "Ricardo Santos", "09:15"),
        entry("3", "Academia", "Maria Silva", "08:30"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, 12, 12, 30, 0).unwrap()
    }

    #[test]
    fn scan_requires_an_area() {
        let mut flow = CheckinFlow::new();
        assert!(flow.scan("  ").is_err());
        assert_eq!(flow.step, CheckinStep::Scan);

        flow.scan("Piscina").unwrap();
        assert_eq!(flow.step, CheckinStep::Form);
        assert_eq!(flow.area.as_deref(), Some("Piscina"));
    }

    #[test]
    fn submit_succeeds_without_note_or_photos() {
        let mut flow = CheckinFlow::new();
        flow.scan("Academia").unwrap();
        let log = flow.submit("Zelador Ricardo", noon()).unwrap();
        assert_eq!(flow.step, CheckinStep::Success);
        assert_eq!(log.area, "Academia");
        assert_eq!(log.user_name, "Zelador Ricardo");
        assert_eq!(log.time, "12:30");
        assert_eq!(log.date, "12/10/2023");
        assert_eq!(log.status, "Concluído");
    }

    #[test]
    fn submit_carries_the_observation() {
        let mut flow = CheckinFlow::new();
        flow.scan("Garagens").unwrap();
        flow.observation = "Reposição de insumos".to_string();
        let log = flow.submit("Zelador Ricardo", noon()).unwrap();
        assert_eq!(log.status, "Concluído — Reposição de insumos");
    }

    #[test]
    fn cancel_from_form_discards_transient_state() {
        let mut flow = CheckinFlow::new();
        flow.scan("Piscina").unwrap();
        flow.observation = "meia limpeza".to_string();
        flow.photos.push("foto.jpg".to_string());
        flow.cancel();
        assert_eq!(flow, CheckinFlow::default());
    }

    #[test]
    fn reset_after_success_clears_everything() {
        let mut flow = CheckinFlow::new();
        flow.scan("Piscina").unwrap();
        flow.observation = "ok".to_string();
        flow.submit("Maria Silva", noon()).unwrap();
        flow.reset();
        assert_eq!(flow.step, CheckinStep::Scan);
        assert!(flow.area.is_none());
        assert!(flow.observation.is_empty());
        assert!(flow.photos.is_empty());
    }

    #[test]
    fn out_of_order_transitions_are_rejected() {
        let mut flow = CheckinFlow::new();
        assert!(flow.submit("x", noon()).is_err());
        flow.scan("Piscina").unwrap();
        assert!(flow.scan("Academia").is_err());
    }

    #[test]
    fn seed_logs_match_the_mock_history() {
        let logs = seed_cleaning_logs();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].area, "Garagem G1");
        assert_eq!(logs[2].user_name, "Maria Silva");
    }
}
