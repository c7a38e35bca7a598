//! New Item Draft
//!
//! Uncommitted form values and their submission into a list.

use crate::list::GroceryList;
use crate::models::{Item, Unit};
use crate::storage::KeyValueStore;

/// Field values typed into the form but not yet added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub description: String,
    pub quantity: String,
    pub unit: Unit,
}

impl ItemDraft {
    /// A draft needs a description with at least one visible character
    pub fn is_submittable(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Build the item. Quantity and unit pass through verbatim.
    pub fn to_item(&self, id: u64) -> Item {
        Item::new(id, self.description.clone(), self.quantity.clone(), self.unit)
    }

    /// Add this draft to `list`. Returns the new id, or None when rejected.
    pub fn submit<S: KeyValueStore>(&self, list: &mut GroceryList<S>) -> Option<u64> {
        if !self.is_submittable() {
            return None;
        }
        let id = list.next_id();
        list.add(self.to_item(id));
        Some(id)
    }
}
