//! Local Storage
//!
//! `KeyValueStore` backed by `window.localStorage`.

use crate::storage::KeyValueStore;

/// Handle to the page's localStorage. Looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .local_storage()
        .map_err(|e| format!("localStorage access denied: {:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match local_storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(e) => {
                log::warn!("[STORAGE] {}", e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| format!("Failed to write '{}': {:?}", key, e))
    }
}
