//! Store change events

use crate::domain::{Item, ItemId};

/// What a successful store mutation did
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Added(Item),
    Toggled { id: ItemId, purchased: bool },
    Removed(Item),
}

impl Change {
    pub fn id(&self) -> ItemId {
        match self {
            Change::Added(item) | Change::Removed(item) => item.id,
            Change::Toggled { id, .. } => *id,
        }
    }

    /// Verb phrase used in user-facing failure messages
    pub fn action(&self) -> &'static str {
        match self {
            Change::Added(_) => "add the item",
            Change::Toggled { .. } => "update the item",
            Change::Removed(_) => "delete the item",
        }
    }
}
