//! New Item Form Component
//!
//! Form for adding a grocery item with quantity and unit.

use leptos::prelude::*;

use crate::components::UnitSelector;
use crate::draft::ItemDraft;
use crate::models::Unit;
use crate::store::{store_submit_draft, use_app_store};

/// Form for adding items to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (unit, set_unit) = signal(Unit::None);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft {
            description: description.get(),
            quantity: quantity.get(),
            unit: unit.get(),
        };
        // Rejected drafts keep what the user typed
        if !store_submit_draft(&store, &draft) { return; }

        set_description.set(String::new());
        set_quantity.set(String::new());
        set_unit.set(Unit::None);
    };

    view! {
        <form class="form" on:submit=add_item>
            <input
                type="text"
                class="form-input quantity"
                placeholder="quantity..."
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <UnitSelector unit=unit set_unit=set_unit />
            <input
                type="text"
                class="form-input description"
                placeholder="item name..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit" class="form-input btn">"Add"</button>
        </form>
    }
}
