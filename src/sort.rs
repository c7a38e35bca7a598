//! Sort Projection
//!
//! Display ordering of the list. Never touches the list itself.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use crate::models::Item;

/// Selectable display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Insertion order
    #[default]
    Input,
    /// Ascending by description
    Description,
    /// Descending by numeric quantity
    Quantity,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Input, SortKey::Description, SortKey::Quantity];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Input => "input",
            SortKey::Description => "description",
            SortKey::Quantity => "quantity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Input => "Sort by input order",
            SortKey::Description => "Sort by description",
            SortKey::Quantity => "Sort by quantity",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "description" => SortKey::Description,
            "quantity" => SortKey::Quantity,
            _ => SortKey::Input,
        }
    }
}

/// Return a reordered copy of `items` for display
pub fn sort_items(items: &[Item], key: SortKey) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match key {
        SortKey::Input => {}
        // sort_by is stable, so ties keep list order
        SortKey::Description => {
            let collator = root_collator();
            sorted.sort_by(|a, b| compare_text(collator.as_ref(), &a.description, &b.description));
        }
        SortKey::Quantity => sorted.sort_by(|a, b| {
            compare_quantity(numeric_quantity(&b.quantity), numeric_quantity(&a.quantity))
        }),
    }
    sorted
}

/// Collator for the root locale, or None if its data failed to load
fn root_collator() -> Option<Collator> {
    Collator::try_new(&Default::default(), CollatorOptions::new())
        .map_err(|e| log::warn!("[SORT] Collator unavailable: {:?}", e))
        .ok()
}

/// Locale-aware order. Without a collator, case-insensitive first, then
/// lowercase before uppercase.
fn compare_text(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| b.cmp(a)),
    }
}

/// Parse quantity text. Empty, non-numeric and infinite text has no value.
fn numeric_quantity(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Valueless quantities order below every number
fn compare_quantity(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
