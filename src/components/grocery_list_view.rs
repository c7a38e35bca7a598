//! Grocery List View Component
//!
//! Renders the sorted projection of the list with the sort selector and
//! the clear-all control.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::config::use_app_config;
use crate::sort::{sort_items, SortKey};
use crate::store::{
    store_clear_confirmed, store_delete_item, store_toggle_packed, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn GroceryListView() -> impl IntoView {
    let store = use_app_store();
    let config = use_app_config();

    let sorted = Memo::new(move |_| {
        let key = store.sort_key().get();
        sort_items(store.list().read().items(), key)
    });

    let on_toggle = Callback::new(move |id: u64| store_toggle_packed(&store, id));
    let on_delete = Callback::new(move |id: u64| store_delete_item(&store, id));

    let prompt = config.clear_prompt;
    let clear_all = move |_| store_clear_confirmed(&store, &prompt);

    view! {
        <div class="grocery-list">
            <ul class="items">
                <For
                    each=move || sorted.get()
                    // packed is the only field that changes after creation
                    key=|item| (item.id, item.packed)
                    children=move |item| view! {
                        <ItemRow item=item on_toggle=on_toggle on_delete=on_delete />
                    }
                />
            </ul>

            <div class="actions">
                <SortSelector />
                <button class="clear" on:click=clear_all>"Clear All"</button>
            </div>
        </div>
    }
}

/// Display order selector. Changing it never touches the list.
#[component]
pub fn SortSelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <select
            class="sort"
            prop:value=move || store.sort_key().get().as_str()
            on:change=move |ev| store.sort_key().set(SortKey::from_str(&event_target_value(&ev)))
        >
            {SortKey::ALL.iter().map(|key| view! {
                <option value=key.as_str()>{key.label()}</option>
            }).collect_view()}
        </select>
    }
}
