//! UI Components
//!
//! Leptos components making up the grocery list page.

mod header;
mod new_item_form;
mod unit_selector;
mod item_row;
mod grocery_list_view;
mod summary_footer;

pub use header::Header;
pub use new_item_form::NewItemForm;
pub use unit_selector::UnitSelector;
pub use item_row::ItemRow;
pub use grocery_list_view::GroceryListView;
pub use summary_footer::SummaryFooter;
