//! Grocery State Store
//!
//! Wraps the persisted `GroceryList` and the selected sort order in a
//! reactive store. Components read through it and mutate only via the
//! helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{self, BrowserStorage};
use crate::config::AppConfig;
use crate::draft::ItemDraft;
use crate::list::GroceryList;
use crate::sort::SortKey;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// The persisted list
    pub list: GroceryList<BrowserStorage>,
    /// Selected display order (not persisted)
    pub sort_key: SortKey,
}

impl AppState {
    pub fn load(config: &AppConfig) -> Self {
        Self {
            list: GroceryList::load(BrowserStorage, config.storage_key.clone()),
            sort_key: SortKey::default(),
        }
    }
}

pub type AppStore = Store<AppState>;

/// Grocery store provided by `App`
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// Mutations. Each one goes through `GroceryList`, which persists it.

/// Submit a draft. Returns true when an item was added.
pub fn store_submit_draft(store: &AppStore, draft: &ItemDraft) -> bool {
    if !draft.is_submittable() {
        return false;
    }
    let field = store.list();
    let mut list = field.write();
    draft.submit(&mut *list).is_some()
}

pub fn store_toggle_packed(store: &AppStore, id: u64) {
    store.list().write().toggle_packed(id);
}

pub fn store_delete_item(store: &AppStore, id: u64) {
    store.list().write().delete(id);
}

/// Clear everything after the user confirms
pub fn store_clear_confirmed(store: &AppStore, prompt: &str) {
    store.list().write().clear_with_confirm(|| commands::confirm(prompt));
}
