//! Persistence Gateway Layer
//!
//! Abstract persistence interface plus the two strategies the app ships:
//! a remote REST endpoint and a session-only in-memory list.

mod error;
mod mapping;
mod memory;
mod remote;
mod traits;


pub use error::{GatewayError, GatewayResult};
pub use mapping::RecordSchema;
pub use memory::InMemoryGateway;
pub use remote::RemoteGateway;
pub use traits::PersistenceGateway;
