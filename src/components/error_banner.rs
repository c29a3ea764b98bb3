//! Error Banner Component
//!
//! Shows the store's most recent error and any configuration notice.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    let error = move || {
        store.list().read().last_error().map(|e| {
            let class = if e.is_validation() { "error validation" } else { "error transport" };
            (class, e.to_string())
        })
    };

    view! {
        {move || error().map(|(class, message)| view! { <p class=class>{message}</p> })}
        {move || store.notice().get().map(|notice| view! { <p class="notice">{notice}</p> })}
    }
}
