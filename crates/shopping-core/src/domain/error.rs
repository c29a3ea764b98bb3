//! Domain-level errors

use thiserror::Error;

/// Rejected add request; the list is left unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingField,
    #[error("Quantity must be a number greater than 0")]
    InvalidQuantity,
    #[error("This item is already on the list")]
    DuplicateName,
    /// The list has not finished loading; an id picked now could collide
    #[error("The list is still loading")]
    StillLoading,
}

/// Most recent error the store keeps for display
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A gateway call failed after the local change was applied
    #[error("Could not reach the server while trying to {action}")]
    Transport { action: String, detail: String },
}

impl StoreError {
    pub fn transport(action: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Transport {
            action: action.into(),
            detail: detail.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}
