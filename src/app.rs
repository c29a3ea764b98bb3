//! Shopping List Frontend App
//!
//! Main application component: form, status line and item list.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_core::{InMemoryGateway, PersistenceGateway};

use crate::config;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};
use crate::components::{ErrorBanner, ItemList, LogPanel, NewItemForm, StatusLine};

#[component]
pub fn App() -> impl IntoView {
    let (config, issues) = config::load_config();

    // A broken endpoint setting falls back to a session-only list
    let (gateway, notice): (Rc<dyn PersistenceGateway>, Option<String>) = match config.build() {
        Ok(gateway) => {
            let notice = issues.first().map(|e| format!("Ignored setting: {}", e));
            (gateway, notice)
        }
        Err(e) => {
            log::error!("[APP] {}; falling back to in-memory list", e);
            (Rc::new(InMemoryGateway::new()), Some(format!("{}. Changes are kept for this session only.", e)))
        }
    };

    let store = Store::new(AppState::new(gateway.describe(), notice));
    provide_context(store);

    let ctx = AppContext::new(store, gateway);
    provide_context(ctx);

    // Load items on mount
    Effect::new(move |_| {
        ctx.load();
    });

    view! {
        <div class="app">
            <h1>"Shopping List"</h1>

            <ErrorBanner />

            <NewItemForm />

            <Show when=move || store.list().read().is_loading()>
                <p class="loading">"Loading…"</p>
            </Show>

            <StatusLine />

            <ItemList />

            <p class="backend">{move || format!("Storage: {}", store.backend().get())}</p>

            <LogPanel />
        </div>
    }
}
