//! Domain Layer
//!
//! Contains the shopping item entity, its validation rules and errors.
//! This layer has NO I/O (only serde for serialization).

mod entity;
mod error;
mod item;
mod validation;

pub use entity::Entity;
pub(crate) use entity::next_id;
pub use error::{StoreError, ValidationError};
pub use item::{Item, ItemId};
pub use validation::{parse_quantity, validate_new_item, NewItem};
