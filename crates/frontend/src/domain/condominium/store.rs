use contracts::domain::condominium::{
    create_condo, delete_condo, seed_condos, update_condo, CondoFields, Condominium,
};
use contracts::system::auth::Role;
use leptos::prelude::*;

const CONDOS_KEY: &str = "ms_condos";

/// Reactive condominium list backed by localStorage.
///
/// Every mutation re-serializes the full list (no incremental diff).
/// Rehydration is defensive: missing or corrupt data falls back to the
/// seed fixtures.
#[derive(Clone, Copy)]
pub struct CondoStore {
    pub condos: RwSignal<Vec<Condominium>>,
}

impl CondoStore {
    pub fn new() -> Self {
        let condos = crate::shared::storage::load_json_or(CONDOS_KEY, seed_condos);
        Self { condos: RwSignal::new(condos) }
    }

    fn persist(&self) {
        self.condos
            .with_untracked(|c| crate::shared::storage::save_json(CONDOS_KEY, c));
    }

    pub fn create(&self, role: Role, fields: CondoFields) -> Result<Condominium, String> {
        if !role.can_manage_condos() {
            return Err("Apenas administradores podem cadastrar condomínios".to_string());
        }
        let created = self.condos.try_update(|c| create_condo(c, fields)).unwrap_or_else(
            || Err("lista de condomínios indisponível".to_string()),
        )?;
        self.persist();
        Ok(created)
    }

    /// Silent no-op when the id does not exist.
    pub fn update(&self, role: Role, id: &str, fields: CondoFields) -> Result<(), String> {
        if !role.can_manage_condos() {
            return Err("Apenas administradores podem editar condomínios".to_string());
        }
        self.condos.update(|c| {
            update_condo(c, id, fields);
        });
        self.persist();
        Ok(())
    }

    pub fn delete(&self, role: Role, id: &str) -> Result<(), String> {
        if !role.can_manage_condos() {
            return Err("Apenas administradores podem remover condomínios".to_string());
        }
        self.condos.update(|c| delete_condo(c, id));
        self.persist();
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<Condominium> {
        self.condos
            .with(|c| contracts::domain::condominium::find_condo(c, id).cloned())
    }
}

pub fn use_condos() -> CondoStore {
    use_context::<CondoStore>().expect("CondoStore not provided")
}
