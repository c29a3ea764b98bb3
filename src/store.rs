//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_core::ItemListStore;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Shopping list, its load state and most recent error
    pub list: ItemListStore,
    /// Name of the active persistence backend
    pub backend: String,
    /// Configuration problem shown alongside list errors
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(backend: &str, notice: Option<String>) -> Self {
        Self {
            backend: backend.to_string(),
            notice,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
