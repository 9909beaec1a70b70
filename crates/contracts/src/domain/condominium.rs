use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical list of common areas a condominium can be inspected on.
/// New condominiums start from a slice of this list; checklist runs and
/// QR codes are generated from the condominium's own selection.
pub const DEFAULT_AREAS: [&str; 29] = [
    "Portaria / Guarita",
    "Hall de entrada",
    "Recepção",
    "Elevadores",
    "Escadas",
    "Corrimãos",
    "Garagens",
    "Rampas de acesso",
    "Pátio / Área externa",
    "Jardim / Paisagismo",
    "Área de lazer",
    "Piscina",
    "Vestiários",
    "Banheiros comuns",
    "Salão de festas",
    "Churrasqueira",
    "Playground",
    "Academia",
    "Brinquedoteca",
    "Depósitos",
    "Casa de bombas",
    "Casa de máquinas",
    "Lixeira / Central de resíduos",
    "Abrigo de gás",
    "Quadra esportiva",
    "Telhado / Cobertura",
    "Iluminação das áreas comuns",
    "Portas corta-fogo",
    "Sinalização de segurança",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condominium {
    pub id: String,
    pub name: String,
    pub address: String,
    pub blocks: u32,
    pub floors: u32,
    #[serde(rename = "commonAreas")]
    pub common_areas: Vec<String>,
}

/// Editable subset of [`Condominium`] as submitted by the management form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CondoFields {
    pub name: String,
    pub address: String,
    pub blocks: u32,
    pub floors: u32,
    pub common_areas: Vec<String>,
}

/// Seed records shown before the administrator registers anything.
pub fn seed_condos() -> Vec<Condominium> {
    vec![
        Condominium {
            id: "1".to_string(),
            name: "Residencial Jardins".to_string(),
            address: "Av. das Palmeiras, 100".to_string(),
            blocks: 2,
            floors: 12,
            common_areas: DEFAULT_AREAS[..10].iter().map(|s| s.to_string()).collect(),
        },
        Condominium {
            id: "2".to_string(),
            name: "Condomínio Blue Sky".to_string(),
            address: "Rua do Horizonte, 500".to_string(),
            blocks: 4,
            floors: 15,
            common_areas: DEFAULT_AREAS.iter().map(|s| s.to_string()).collect(),
        },
    ]
}

/// Case-insensitive substring filter over name and address, preserving
/// list order.
pub fn filter_condos<'a>(condos: &'a [Condominium], term: &str) -> Vec<&'a Condominium> {
    let needle = term.to_lowercase();
    condos
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.address.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Creates a condominium and prepends it (most-recent-first ordering).
/// Name and address are required.
pub fn create_condo(condos: &mut Vec<Condominium>, fields: CondoFields) -> Result<Condominium, String> {
    if fields.name.trim().is_empty() || fields.address.trim().is_empty() {
        return Err("Nome e endereço são obrigatórios".to_string());
    }
    let condo = Condominium {
        id: Uuid::new_v4().to_string(),
        name: fields.name.trim().to_string(),
        address: fields.address.trim().to_string(),
        blocks: fields.blocks,
        floors: fields.floors,
        common_areas: if fields.common_areas.is_empty() {
            DEFAULT_AREAS[..10].iter().map(|s| s.to_string()).collect()
        } else {
            fields.common_areas
        },
    };
    condos.insert(0, condo.clone());
    Ok(condo)
}

/// Merges `fields` into the record with `id`. Unknown ids are a silent
/// no-op, mirroring the lookup behavior of the rest of the app.
pub fn update_condo(condos: &mut [Condominium], id: &str, fields: CondoFields) -> Option<Condominium> {
    let condo = condos.iter_mut().find(|c| c.id == id)?;
    if !fields.name.trim().is_empty() {
        condo.name = fields.name.trim().to_string();
    }
    if !fields.address.trim().is_empty() {
        condo.address = fields.address.trim().to_string();
    }
    condo.blocks = fields.blocks;
    condo.floors = fields.floors;
    if !fields.common_areas.is_empty() {
        condo.common_areas = fields.common_areas;
    }
    Some(condo.clone())
}

pub fn delete_condo(condos: &mut Vec<Condominium>, id: &str) {
    condos.retain(|c| c.id != id);
}

pub fn find_condo<'a>(condos: &'a [Condominium], id: &str) -> Option<&'a Condominium> {
    condos.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, address: &str) -> CondoFields {
        CondoFields {
            name: name.to_string(),
            address: address.to_string(),
            blocks: 1,
            floors: 5,
            common_areas: vec!["Piscina".to_string()],
        }
    }

    #[test]
    fn seed_has_29_default_areas() {
        assert_eq!(DEFAULT_AREAS.len(), 29);
        let condos = seed_condos();
        assert_eq!(condos[0].common_areas.len(), 10);
        assert_eq!(condos[1].common_areas.len(), 29);
    }

    #[test]
    fn seed_ids_are_unique() {
        let condos = seed_condos();
        let mut ids: Vec<_> = condos.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), condos.len());
    }

    #[test]
    fn filter_is_case_insensitive_over_name_and_address() {
        let condos = seed_condos();
        let hits = filter_condos(&condos, "jardins");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Residencial Jardins");

        let by_address = filter_condos(&condos, "HORIZONTE");
        assert_eq!(by_address.len(), 1);
        assert_eq!(by_address[0].name, "Condomínio Blue Sky");

        assert_eq!(filter_condos(&condos, "").len(), 2);
    }

    #[test]
    fn create_prepends_and_appears_exactly_once() {
        let mut condos = seed_condos();
        let created = create_condo(&mut condos, fields("Vila Nova", "Rua A, 1")).unwrap();
        assert_eq!(condos[0].id, created.id);
        assert_eq!(condos.len(), 3);
        assert_eq!(condos.iter().filter(|c| c.id == created.id).count(), 1);
    }

    #[test]
    fn create_requires_name_and_address() {
        let mut condos = Vec::new();
        assert!(create_condo(&mut condos, fields("", "Rua A, 1")).is_err());
        assert!(create_condo(&mut condos, fields("Vila", "   ")).is_err());
        assert!(condos.is_empty());
    }

    #[test]
    fn update_merges_fields_and_ignores_unknown_id() {
        let mut condos = seed_condos();
        let updated = update_condo(&mut condos, "1", fields("Jardins II", "Av. Nova, 200"));
        assert_eq!(updated.unwrap().name, "Jardins II");
        assert_eq!(condos[0].address, "Av. Nova, 200");

        let before = condos.clone();
        assert!(update_condo(&mut condos, "missing", fields("X", "Y")).is_none());
        assert_eq!(condos, before);
    }

    #[test]
    fn delete_removes_matching_record() {
        let mut condos = seed_condos();
        delete_condo(&mut condos, "1");
        assert_eq!(condos.len(), 1);
        assert!(find_condo(&condos, "1").is_none());
        assert!(find_condo(&condos, "2").is_some());

        // unknown id is a no-op
        delete_condo(&mut condos, "missing");
        assert_eq!(condos.len(), 1);
    }

    #[test]
    fn list_survives_reserialization() {
        let mut condos = seed_condos();
        create_condo(&mut condos, fields("Vila Nova", "Rua A, 1")).unwrap();
        let json = serde_json::to_string(&condos).unwrap();
        let back: Vec<Condominium> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, condos);
    }
}
