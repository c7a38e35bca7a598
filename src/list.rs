//! Grocery List State
//!
//! Owns the ordered item sequence and writes it back to storage after
//! every successful mutation.

use std::collections::HashSet;

use crate::models::Item;
use crate::storage::{self, KeyValueStore};

/// Authoritative item list, persisted through `S`
#[derive(Debug, Clone)]
pub struct GroceryList<S> {
    items: Vec<Item>,
    next_id: u64,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> GroceryList<S> {
    /// Load the list stored under `key`, falling back to an empty list
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut items = storage::load_items(&storage, &key);
        let next_id = assign_unique_ids(&mut items);
        log::info!("[LIST] Loaded {} items from '{}'", items.len(), key);
        Self { items, next_id, storage, key }
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Hand out a fresh id. Ids are never reused within a session.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Append an item. Callers validate the item beforehand.
    pub fn add(&mut self, item: Item) {
        log::debug!("[LIST] add #{} '{}'", item.id, item.description);
        self.next_id = self.next_id.max(item.id.saturating_add(1));
        self.items.push(item);
        self.commit();
    }

    /// Flip `packed` on the matching item. Returns false on a lookup miss.
    pub fn toggle_packed(&mut self, id: u64) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.packed = !item.packed;
        log::debug!("[LIST] toggle #{} packed={}", id, item.packed);
        self.commit();
        true
    }

    /// Remove the matching item. Returns false on a lookup miss.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return false;
        }
        log::debug!("[LIST] delete #{}", id);
        self.commit();
        true
    }

    /// Unconditionally empty the list
    pub fn clear(&mut self) {
        log::debug!("[LIST] clear {} items", self.items.len());
        self.items.clear();
        self.commit();
    }

    /// Empty the list only if `confirm` agrees. Returns whether it cleared.
    pub fn clear_with_confirm(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            return false;
        }
        self.clear();
        true
    }

    /// Write the whole list under the configured key. A failed write is
    /// logged and the in-memory change stands.
    fn commit(&self) {
        if let Err(e) = storage::save_items(&self.storage, &self.key, &self.items) {
            log::error!("[LIST] Failed to persist '{}': {}", self.key, e);
        }
    }
}

/// Make loaded ids unique and return the first free id.
///
/// Repeated ids get fresh ones above the current maximum. When the maximum
/// leaves no room above it, the whole list is renumbered from 1.
fn assign_unique_ids(items: &mut [Item]) -> u64 {
    let Some(max) = items.iter().map(|item| item.id).max() else {
        return 1;
    };
    // Room for one fresh id per item above the maximum
    let mut next_id = match max.checked_add(items.len() as u64) {
        Some(_) => max + 1,
        None => {
            log::warn!("[LIST] Stored ids exhausted, renumbering {} items", items.len());
            for (item, id) in items.iter_mut().zip(1..) {
                item.id = id;
            }
            return items.len() as u64 + 1;
        }
    };

    let mut seen = HashSet::with_capacity(items.len());
    for item in items.iter_mut() {
        if !seen.insert(item.id) {
            log::warn!("[LIST] Duplicate id #{} reassigned to #{}", item.id, next_id);
            item.id = next_id;
            seen.insert(next_id);
            next_id += 1;
        }
    }
    next_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;
    use crate::storage::testing::MemoryStorage;

    const KEY: &str = "groceryItems";

    fn make_item(id: u64, description: &str) -> Item {
        Item::new(id, description.to_string(), String::new(), Unit::None)
    }

    fn list_with(descriptions: &[&str]) -> GroceryList<MemoryStorage> {
        let mut list = GroceryList::load(MemoryStorage::default(), KEY);
        for d in descriptions {
            let id = list.next_id();
            list.add(make_item(id, d));
        }
        list
    }

    fn persisted(list: &GroceryList<MemoryStorage>) -> Vec<Item> {
        storage::load_items(list.storage(), KEY)
    }

    #[test]
    fn test_adds_keep_submission_order() {
        let list = list_with(&["Apples", "Bread", "Cheese"]);
        let names: Vec<_> = list.items().iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, ["Apples", "Bread", "Cheese"]);
        assert_eq!(list.storage().writes.get(), 3);
        assert_eq!(persisted(&list), list.items());
    }

    #[test]
    fn test_toggle_twice_restores_item() {
        let mut list = list_with(&["Apples", "Bread"]);
        let original = list.items().to_vec();
        let id = original[1].id;

        assert!(list.toggle_packed(id));
        assert!(list.items()[1].packed);
        assert_eq!(list.items()[0], original[0]);

        assert!(list.toggle_packed(id));
        assert_eq!(list.items(), original.as_slice());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut list = list_with(&["Apples", "Bread", "Cheese"]);
        let id = list.items()[1].id;
        assert!(list.delete(id));
        let names: Vec<_> = list.items().iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, ["Apples", "Cheese"]);
        assert_eq!(persisted(&list), list.items());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut list = list_with(&["Apples"]);
        let before = list.items().to_vec();
        let writes = list.storage().writes.get();

        assert!(!list.toggle_packed(999));
        assert!(!list.delete(999));
        assert_eq!(list.items(), before.as_slice());
        assert_eq!(list.storage().writes.get(), writes);
    }

    #[test]
    fn test_clear_declined_keeps_list() {
        let mut list = list_with(&["Apples", "Bread"]);
        assert!(!list.clear_with_confirm(|| false));
        assert_eq!(list.items().len(), 2);
        assert_eq!(persisted(&list).len(), 2);
    }

    #[test]
    fn test_clear_accepted_persists_empty() {
        let mut list = list_with(&["Apples", "Bread"]);
        assert!(list.clear_with_confirm(|| true));
        assert!(list.items().is_empty());
        assert_eq!(list.storage().get(KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_ids_continue_after_loaded_max() {
        let storage = MemoryStorage::with_value(
            KEY,
            r#"[{"id":7,"description":"Tea"},{"id":3,"description":"Jam"}]"#,
        );
        let mut list = GroceryList::load(storage, KEY);
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.next_id(), 8);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut list = list_with(&["Apples"]);
        let first = list.items()[0].id;
        list.delete(first);
        assert_ne!(list.next_id(), first);
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let mut list = GroceryList::load(MemoryStorage::with_value(KEY, "oops"), KEY);
        assert!(list.items().is_empty());
        assert_eq!(list.next_id(), 1);
    }

    #[test]
    fn test_duplicate_loaded_ids_are_reassigned() {
        let storage = MemoryStorage::with_value(
            KEY,
            r#"[{"id":5,"description":"A"},{"id":5,"description":"B"},{"id":6,"description":"C"}]"#,
        );
        let mut list = GroceryList::load(storage, KEY);
        let ids: Vec<_> = list.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, [5, 7, 6]);

        assert!(list.delete(5));
        let names: Vec<_> = list.items().iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, ["B", "C"]);
        assert_eq!(list.next_id(), 8);
    }

    #[test]
    fn test_max_id_loads_without_overflow() {
        let storage = MemoryStorage::with_value(
            KEY,
            r#"[{"id":18446744073709551615,"description":"A"},{"id":2,"description":"B"}]"#,
        );
        let mut list = GroceryList::load(storage, KEY);
        let ids: Vec<_> = list.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(list.next_id(), 3);

        list.add(make_item(u64::MAX, "C"));
        assert_eq!(list.items().len(), 3);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut list = list_with(&["Apples"]);
        list.storage().fail_writes.set(true);
        let id = list.items()[0].id;
        assert!(list.toggle_packed(id));
        assert!(list.items()[0].packed);
        assert!(!persisted(&list)[0].packed);
    }
}
