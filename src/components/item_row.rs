//! Item Row Component
//!
//! One grocery entry in the list.

use leptos::prelude::*;

use crate::models::Item;

/// A single item row with packed checkbox and delete control
#[component]
pub fn ItemRow(
    item: Item,
    on_toggle: Callback<u64>,
    on_delete: Callback<u64>,
) -> impl IntoView {
    let id = item.id;
    let packed = item.packed;
    let label = item.label();

    view! {
        <li class=if packed { "item packed" } else { "item" }>
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| on_toggle.run(id)
            />
            <p
                class="item-label"
                style=if packed { "text-decoration: line-through;" } else { "" }
            >
                {label}
            </p>
            <button class="delete-btn" title="Delete" on:click=move |_| on_delete.run(id)>"✖"</button>
        </li>
    }
}
