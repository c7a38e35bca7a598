//! Header Component

use leptos::prelude::*;

use crate::config::use_app_config;

#[component]
pub fn Header() -> impl IntoView {
    let config = use_app_config();

    view! {
        <header class="logo">
            <p>"🍅"</p>
            <h1>{config.title}</h1>
            <p>"🫑"</p>
        </header>
    }
}
