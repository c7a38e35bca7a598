//! Persistence
//!
//! Key-value store abstraction and the JSON blob format of the list.

use crate::models::Item;

/// Textual key-value store the list is persisted to
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Parse a persisted blob. Corrupt data yields an empty list.
pub fn decode_items(raw: &str) -> Vec<Item> {
    match serde_json::from_str::<Vec<Item>>(raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("[STORAGE] Discarding unreadable list: {}", e);
            Vec::new()
        }
    }
}

pub fn encode_items(items: &[Item]) -> Result<String, String> {
    serde_json::to_string(items).map_err(|e| e.to_string())
}

/// Read the list stored under `key` (empty when absent or unreadable)
pub fn load_items<S: KeyValueStore>(storage: &S, key: &str) -> Vec<Item> {
    match storage.get(key) {
        Some(raw) => decode_items(&raw),
        None => Vec::new(),
    }
}

/// Overwrite `key` with the full list
pub fn save_items<S: KeyValueStore>(storage: &S, key: &str, items: &[Item]) -> Result<(), String> {
    let raw = encode_items(items)?;
    storage.set(key, &raw)
}
