//! Item Row Component
//!
//! One list entry with toggle and delete buttons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{item_label, toggle_label, Item};

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let purchased = item.purchased;

    view! {
        <li class=if purchased { "purchased" } else { "" }>
            <span class="item-text">{item_label(&item)}</span>
            <div class="item-actions">
                <button class="toggle-btn" on:click=move |_| ctx.toggle(id)>
                    {toggle_label(purchased)}
                </button>
                <button class="delete-btn" on:click=move |_| ctx.delete(id)>"Delete"</button>
            </div>
        </li>
    }
}
