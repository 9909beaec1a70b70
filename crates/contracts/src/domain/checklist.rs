use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::condominium::Condominium;

/// Compliance classification of one inspected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemStatus {
    #[default]
    #[serde(rename = "pendente")]
    Pendente,
    #[serde(rename = "conforme")]
    Conforme,
    #[serde(rename = "nao-conforme")]
    NaoConforme,
}

impl ItemStatus {
    pub fn is_resolved(&self) -> bool {
        *self != ItemStatus::Pendente
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub area: String,
    pub status: ItemStatus,
    pub observation: String,
    pub photos: Vec<String>,
}

impl ChecklistItem {
    fn new(area: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            area: area.to_string(),
            status: ItemStatus::Pendente,
            observation: String::new(),
            photos: Vec::new(),
        }
    }
}

/// One inspection pass over a condominium's common areas.
///
/// Lives only for the duration of the run; finishing discards it. Items
/// move `pendente -> conforme | nao-conforme`, and re-classifying between
/// the two resolved states is allowed. Observations and photo references
/// are only accepted once an item is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistRun {
    pub condo_id: String,
    pub condo_name: String,
    pub items: Vec<ChecklistItem>,
}

impl ChecklistRun {
    /// Starts a fresh run from the condominium's common-areas list.
    pub fn start(condo: &Condominium) -> Self {
        Self {
            condo_id: condo.id.clone(),
            condo_name: condo.name.clone(),
            items: condo.common_areas.iter().map(|a| ChecklistItem::new(a)).collect(),
        }
    }

    pub fn set_status(&mut self, item_id: &str, status: ItemStatus) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
            item.status = status;
        }
    }

    /// Rejected while the item is still pending; the note section only
    /// exists for resolved items.
    pub fn set_observation(&mut self, item_id: &str, text: &str) -> Result<(), String> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| "Item não encontrado".to_string())?;
        if !item.status.is_resolved() {
            return Err("Classifique o item antes de registrar observações".to_string());
        }
        item.observation = text.to_string();
        Ok(())
    }

    /// Same gating as [`Self::set_observation`].
    pub fn add_photo(&mut self, item_id: &str, photo_ref: &str) -> Result<(), String> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| "Item não encontrado".to_string())?;
        if !item.status.is_resolved() {
            return Err("Classifique o item antes de anexar evidências".to_string());
        }
        item.photos.push(photo_ref.to_string());
        Ok(())
    }

    pub fn resolved_count(&self) -> usize {
        self.items.iter().filter(|i| i.status.is_resolved()).count()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Progress as a percentage of resolved items.
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.resolved_count() as f64 / self.items.len() as f64 * 100.0
    }

    /// Finishing only needs one resolved item; partial completion is a
    /// supported field workflow.
    pub fn can_finish(&self) -> bool {
        self.resolved_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::condominium::seed_condos;

    fn run_for_blue_sky() -> ChecklistRun {
        let condos = seed_condos();
        ChecklistRun::start(&condos[1])
    }

    #[test]
    fn start_instantiates_all_areas_as_pending() {
        let run = run_for_blue_sky();
        assert_eq!(run.total_count(), 29);
        assert!(run.items.iter().all(|i| i.status == ItemStatus::Pendente));
        assert_eq!(run.resolved_count(), 0);
        assert!(!run.can_finish());
    }

    #[test]
    fn progress_with_one_of_29_resolved() {
        let mut run = run_for_blue_sky();
        let id = run.items[0].id.clone();
        run.set_status(&id, ItemStatus::Conforme);
        assert_eq!(run.resolved_count(), 1);
        assert!((run.progress() - 100.0 / 29.0).abs() < 1e-9);
        // 1/29 ≈ 3.45%
        assert!((run.progress() - 3.448).abs() < 0.01);
        assert!(run.can_finish());
    }

    #[test]
    fn resolved_statuses_can_be_switched() {
        let mut run = run_for_blue_sky();
        let id = run.items[3].id.clone();
        run.set_status(&id, ItemStatus::Conforme);
        run.set_status(&id, ItemStatus::NaoConforme);
        assert_eq!(run.items[3].status, ItemStatus::NaoConforme);
        run.set_status(&id, ItemStatus::Conforme);
        assert_eq!(run.items[3].status, ItemStatus::Conforme);
        assert_eq!(run.resolved_count(), 1);
    }

    #[test]
    fn observation_and_photo_require_resolved_status() {
        let mut run = run_for_blue_sky();
        let id = run.items[0].id.clone();

        assert!(run.set_observation(&id, "piso molhado").is_err());
        assert!(run.add_photo(&id, "foto-1.jpg").is_err());
        assert!(run.items[0].observation.is_empty());
        assert!(run.items[0].photos.is_empty());

        run.set_status(&id, ItemStatus::NaoConforme);
        run.set_observation(&id, "piso molhado").unwrap();
        run.add_photo(&id, "foto-1.jpg").unwrap();
        assert_eq!(run.items[0].observation, "piso molhado");
        assert_eq!(run.items[0].photos, vec!["foto-1.jpg".to_string()]);
    }

    // Item identity anchors the rendered list; mutations may only touch
    // status, observation and photos.
    #[test]
    fn item_ids_survive_every_mutation() {
        let mut run = run_for_blue_sky();
        let ids: Vec<String> = run.items.iter().map(|i| i.id.clone()).collect();
        let first = ids[0].clone();

        run.set_status(&first, ItemStatus::Conforme);
        run.set_observation(&first, "ok").unwrap();
        run.add_photo(&first, "foto-1.jpg").unwrap();
        run.set_status(&first, ItemStatus::NaoConforme);

        let after: Vec<String> = run.items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(after, ids);
    }

    #[test]
    fn unknown_item_id_is_reported() {
        let mut run = run_for_blue_sky();
        run.set_status("missing", ItemStatus::Conforme); // silent no-op
        assert_eq!(run.resolved_count(), 0);
        assert!(run.set_observation("missing", "x").is_err());
    }

    #[test]
    fn status_serde_uses_kebab_labels() {
        let json = serde_json::to_string(&ItemStatus::NaoConforme).unwrap();
        assert_eq!(json, "\"nao-conforme\"");
    }
}
