//! Item List Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// All items in insertion order
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="item-list">
            <For
                each=move || store.list().read().items().to_vec()
                // purchased is part of the key so toggled rows re-render
                key=|item| (item.id, item.purchased)
                children=move |item| view! { <ItemRow item=item /> }
            />
        </ul>
    }
}
