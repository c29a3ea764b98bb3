//! Item Entity
//!
//! A single line on the shopping list.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Item identifier, unique within one list
pub type ItemId = u32;

/// A shopping list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Trimmed, non-empty, unique within the list
    pub name: String,
    /// Always positive and finite
    pub quantity: f64,
    /// Free-form unit ("kg", "L", "pcs")
    pub unit: String,
    /// Pending (false) or Purchased (true)
    pub purchased: bool,
}

impl Item {
    /// Create a new, not yet purchased item
    pub fn new(id: ItemId, name: String, quantity: f64, unit: String) -> Self {
        Self {
            id,
            name,
            quantity,
            unit,
            purchased: false,
        }
    }

    /// Flip between Pending and Purchased
    pub fn toggle(&mut self) -> bool {
        self.purchased = !self.purchased;
        self.purchased
    }

    /// Human-readable quantity, without a trailing ".0" for whole numbers
    pub fn quantity_label(&self) -> String {
        if self.quantity.fract() == 0.0 && self.quantity.abs() < 1e15 {
            format!("{}", self.quantity as i64)
        } else {
            format!("{}", self.quantity)
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
