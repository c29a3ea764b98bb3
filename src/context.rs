//! Application Context
//!
//! Shared handles provided via Leptos Context API, plus the three user
//! actions. Every action mutates the store first and persists afterwards.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use shopping_core::{fetch_items, persist_change, transport_error, Change, ItemId, PersistenceGateway};

use crate::store::{AppStore, AppStateStoreFields};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive app state
    pub store: AppStore,
    /// Active persistence backend
    gateway: StoredValue<Rc<dyn PersistenceGateway>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, gateway: Rc<dyn PersistenceGateway>) -> Self {
        Self {
            store,
            gateway: StoredValue::new_local(gateway),
        }
    }

    /// Load the list from the gateway, replacing local contents
    pub fn load(&self) {
        let store = self.store;
        let gateway = self.gateway.get_value();
        store.list().write().begin_load();

        spawn_local(async move {
            let result = fetch_items(gateway.as_ref()).await;
            store.list().write().finish_load(result);
        });
    }

    /// Validate and add an item; returns whether it was accepted
    pub fn add(&self, name: &str, quantity: &str, unit: &str) -> bool {
        let result = self.store.list().write().add(name, quantity, unit);
        match result {
            Ok(change) => {
                self.persist(change);
                true
            }
            Err(_) => false,
        }
    }

    pub fn toggle(&self, id: ItemId) {
        let change = self.store.list().write().toggle_purchased(id);
        if let Some(change) = change {
            self.persist(change);
        }
    }

    pub fn delete(&self, id: ItemId) {
        let change = self.store.list().write().delete(id);
        if let Some(change) = change {
            self.persist(change);
        }
    }

    /// Forward a change in the background; failures keep the local change
    fn persist(&self, change: Change) {
        let store = self.store;
        let gateway = self.gateway.get_value();

        spawn_local(async move {
            if let Err(e) = persist_change(gateway.as_ref(), &change).await {
                store
                    .list()
                    .write()
                    .report_transport_failure(transport_error(change.action(), &e));
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
