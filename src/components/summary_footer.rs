//! Summary Footer Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::summary::summarize;

/// Packing progress for the whole list
#[component]
pub fn SummaryFooter() -> impl IntoView {
    let store = use_app_store();
    let summary = Memo::new(move |_| summarize(store.list().read().items()));

    view! {
        <footer class="footer">
            <p>{move || summary.get().to_string()}</p>
        </footer>
    }
}
