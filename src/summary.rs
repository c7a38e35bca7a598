//! Packing Summary
//!
//! Aggregate counts shown in the footer. Order-independent.

use std::fmt;

use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Nothing on the list yet
    Empty,
    /// Rounded percentage reached 100
    Complete,
    Progress {
        total: usize,
        packed: usize,
        percentage: u32,
    },
}

pub fn summarize(items: &[Item]) -> Summary {
    let total = items.len();
    if total == 0 {
        return Summary::Empty;
    }
    let packed = items.iter().filter(|item| item.packed).count();
    let percentage = (packed as f64 / total as f64 * 100.0).round() as u32;
    if percentage == 100 {
        Summary::Complete
    } else {
        Summary::Progress { total, packed, percentage }
    }
}

fn item_word(count: usize) -> &'static str {
    if count > 1 { "items" } else { "item" }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Empty => write!(f, "Start making your grocery list 🍅🍆🫛🫑🥕"),
            Summary::Complete => write!(f, "Your basket is ready. 🧺"),
            Summary::Progress { total, packed, percentage } => write!(
                f,
                "You have {} {} in your grocery list. {} {} ({}%) packed.",
                total,
                item_word(*total),
                packed,
                item_word(*packed),
                percentage
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    fn make_item(id: u64, packed: bool) -> Item {
        let mut item = Item::new(id, format!("Item {}", id), String::new(), Unit::None);
        item.packed = packed;
        item
    }

    #[test]
    fn test_footer_walkthrough() {
        let mut items = Vec::new();
        assert_eq!(summarize(&items), Summary::Empty);
        assert!(summarize(&items).to_string().starts_with("Start making"));

        items.push(make_item(1, false));
        assert_eq!(
            summarize(&items).to_string(),
            "You have 1 item in your grocery list. 0 item (0%) packed."
        );

        items[0].packed = true;
        assert_eq!(summarize(&items), Summary::Complete);

        items.push(make_item(2, false));
        assert_eq!(
            summarize(&items).to_string(),
            "You have 2 items in your grocery list. 1 item (50%) packed."
        );
    }

    #[test]
    fn test_percentage_rounds() {
        let items = vec![make_item(1, true), make_item(2, false), make_item(3, false)];
        assert_eq!(summarize(&items), Summary::Progress { total: 3, packed: 1, percentage: 33 });

        let items = vec![make_item(1, true), make_item(2, true), make_item(3, false)];
        assert_eq!(summarize(&items), Summary::Progress { total: 3, packed: 2, percentage: 67 });
    }

    #[test]
    fn test_near_complete_rounds_to_complete() {
        let mut items: Vec<_> = (0..200).map(|id| make_item(id, true)).collect();
        items.push(make_item(200, false));
        assert_eq!(summarize(&items), Summary::Complete);
    }

    #[test]
    fn test_order_independent() {
        let a = vec![make_item(1, true), make_item(2, false), make_item(3, false)];
        let b = vec![make_item(3, false), make_item(1, true), make_item(2, false)];
        assert_eq!(summarize(&a), summarize(&b));
    }
}
