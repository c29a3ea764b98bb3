//! New Item Form Component
//!
//! Name, quantity and unit inputs with an add button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Form for adding an item; inputs clear only when the item is accepted
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let loading = move || ctx.store.list().read().is_loading();

    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (unit, set_unit) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(&name.get(), &quantity.get(), &unit.get()) {
            set_name.set(String::new());
            set_quantity.set(String::new());
            set_unit.set(String::new());
        }
    };

    view! {
        <form class="input-container" on:submit=add_item>
            <input
                type="text"
                placeholder="Item name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            // Plain text so invalid numbers reach validation instead of being blanked
            <input
                type="text"
                inputmode="decimal"
                placeholder="Quantity"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Unit"
                prop:value=move || unit.get()
                on:input=move |ev| set_unit.set(event_target_value(&ev))
            />
            <button type="submit" disabled=loading>"Add"</button>
        </form>
    }
}
