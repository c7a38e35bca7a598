//! Grocery List App
//!
//! Root component: loads the list once and provides it to the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{GroceryListView, Header, NewItemForm, SummaryFooter};
use crate::config::AppConfig;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    // State
    let store = Store::new(AppState::load(&config));

    // Provide context to all children
    provide_context(config);
    provide_context(store);

    view! {
        <div class="app">
            <Header />
            <NewItemForm />
            <GroceryListView />
            <SummaryFooter />
        </div>
    }
}
