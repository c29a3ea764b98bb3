//! Gateway Layer - Core Trait
//!
//! Implementations can talk to a REST endpoint, keep data in memory, etc.

use async_trait::async_trait;

use crate::domain::{Item, ItemId};
use super::error::GatewayResult;

/// Create/read/delete persistence for shopping items
///
/// Futures are not `Send`: the app runs on the browser's single event loop.
#[async_trait(?Send)]
pub trait PersistenceGateway {
    /// Short backend name for logs
    fn describe(&self) -> &'static str;

    /// Load every stored item
    async fn list(&self) -> GatewayResult<Vec<Item>>;

    /// Store a newly added item
    async fn create(&self, item: &Item) -> GatewayResult<()>;

    /// Delete an item by ID
    async fn remove(&self, id: ItemId) -> GatewayResult<()>;
}
