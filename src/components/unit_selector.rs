//! Unit Selector Component

use leptos::prelude::*;

use crate::models::Unit;

/// Drop-down over the fixed unit set
#[component]
pub fn UnitSelector(
    unit: ReadSignal<Unit>,
    set_unit: WriteSignal<Unit>,
) -> impl IntoView {
    view! {
        <select
            class="form-input unit"
            prop:value=move || unit.get().as_str()
            on:change=move |ev| set_unit.set(Unit::from_str(&event_target_value(&ev)))
        >
            {Unit::ALL.iter().map(|u| {
                let u = *u;
                view! {
                    <option value=u.as_str() selected=move || unit.get() == u>
                        {u.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
