//! Shopping List Core
//!
//! Layered architecture:
//! - domain: Item entity, validation rules and errors
//! - store: ItemListStore, the ordered list and its mutations
//! - gateway: Persistence strategies (remote REST, in-memory)
//! - persist: Applies store changes to a gateway
//! - config: Gateway selection and endpoint settings

pub mod config;
pub mod domain;
pub mod gateway;
pub mod persist;
pub mod store;

pub use config::{Backend, ConfigError, GatewayConfig};
pub use domain::{Entity, Item, ItemId, StoreError, ValidationError};
pub use gateway::{GatewayError, GatewayResult, InMemoryGateway, PersistenceGateway, RecordSchema, RemoteGateway};
pub use persist::{fetch_items, persist_change, transport_error};
pub use store::{Change, DerivedCounts, HydrateReport, ItemListStore, ListStatus};
