//! Change Persistence
//!
//! Local mutations are applied first and forwarded afterwards. A failed
//! forward is reported on the store but never rolls the change back.

use crate::domain::{Item, StoreError};
use crate::gateway::{GatewayError, GatewayResult, PersistenceGateway};
use crate::store::Change;

/// Forward one store change to the gateway
///
/// Toggles stay local: the remote record shape has no purchased field.
pub async fn persist_change(gateway: &dyn PersistenceGateway, change: &Change) -> GatewayResult<()> {
    let result = match change {
        Change::Added(item) => gateway.create(item).await,
        Change::Removed(item) => gateway.remove(item.id).await,
        Change::Toggled { .. } => return Ok(()),
    };

    match &result {
        Ok(()) => log::debug!("[PERSIST] {} #{} via {}", change.action(), change.id(), gateway.describe()),
        Err(e) => log::error!("[PERSIST] Failed to {} #{} via {}: {}", change.action(), change.id(), gateway.describe(), e),
    }
    result
}

/// User-facing error for a failed gateway call
pub fn transport_error(action: &str, err: &GatewayError) -> StoreError {
    StoreError::transport(action, err.to_string())
}

/// Fetch everything the gateway holds, for [`ItemListStore::finish_load`]
///
/// [`ItemListStore::finish_load`]: crate::store::ItemListStore::finish_load
pub async fn fetch_items(gateway: &dyn PersistenceGateway) -> Result<Vec<Item>, StoreError> {
    gateway.list().await.map_err(|e| {
        log::error!("[PERSIST] Failed to load items via {}: {}", gateway.describe(), e);
        transport_error("load the list", &e)
    })
}
