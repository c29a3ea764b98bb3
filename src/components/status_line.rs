//! Status Line Component
//!
//! "Remaining items: N" or "All items purchased!"; hidden for an empty list.

use leptos::prelude::*;

use crate::models::{status_class, status_text};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusLine() -> impl IntoView {
    let store = use_app_store();
    let status = Memo::new(move |_| store.list().read().status());

    move || {
        let status = status.get();
        status_text(status).map(|text| view! { <p class=status_class(status)>{text}</p> })
    }
}
