//! Typed localStorage access.
//!
//! Every read is defensive: a value that fails to parse is logged,
//! dropped from storage and replaced by the caller's default, so a stale
//! or corrupted record can never take the app down on reload.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_string(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Parse step of [`load_json`], separated from the browser access so the
/// warn-and-discard decision is host-testable. `None` means the caller
/// should drop the stored value and fall back to its seed.
fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("descartando valor inválido em '{}': {}", key, e);
            None
        }
    }
}

/// Reads and deserializes `key`. Corrupt JSON clears the key.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_string(key)?;
    let value = decode(key, &raw);
    if value.is_none() {
        remove(key);
    }
    value
}

/// [`load_json`] with a seed fallback for first load or corrupt data.
pub fn load_json_or<T, F>(key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    load_json(key).unwrap_or_else(default)
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => set_string(key, &json),
        Err(e) => log::warn!("falha ao serializar '{}': {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_decodes() {
        let v: Vec<String> = decode("ms_condos", r#"["a","b"]"#).unwrap();
        assert_eq!(v, vec!["a".to_string(), "b".to_string()]);
    }

    // A stale or hand-edited record must never take the app down on
    // reload; the decode step signals discard and the caller reseeds.
    #[test]
    fn corrupt_json_is_discarded_and_reseeded() {
        assert!(decode::<Vec<String>>("ms_condos", "{not json").is_none());
        assert!(decode::<Vec<String>>("ms_tickets", "42").is_none());

        let v = decode::<Vec<String>>("ms_cleaning_logs", "corrompido")
            .unwrap_or_else(|| vec!["seed".to_string()]);
        assert_eq!(v, vec!["seed".to_string()]);
    }
}
