use contracts::domain::checkin::{seed_cleaning_logs, CleaningLog};
use leptos::prelude::*;

const LOGS_KEY: &str = "ms_cleaning_logs";

/// Cleaning confirmations reviewed by Administrador/Síndico; appended by
/// each successful field check-in. Persisted whole, newest first.
#[derive(Clone, Copy)]
pub struct CleaningLogStore {
    pub logs: RwSignal<Vec<CleaningLog>>,
}

impl CleaningLogStore {
    pub fn new() -> Self {
        let logs = crate::shared::storage::load_json_or(LOGS_KEY, seed_cleaning_logs);
        Self { logs: RwSignal::new(logs) }
    }

    pub fn add(&self, log: CleaningLog) {
        self.logs.update(|l| l.insert(0, log));
        self.logs
            .with_untracked(|l| crate::shared::storage::save_json(LOGS_KEY, l));
    }
}

pub fn use_cleaning_logs() -> CleaningLogStore {
    use_context::<CleaningLogStore>().expect("CleaningLogStore not provided")
}
