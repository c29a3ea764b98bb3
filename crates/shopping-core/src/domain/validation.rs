//! Add-item validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! missing field, then quantity, then duplicate name.

use super::error::ValidationError;
use super::item::Item;

/// A validated add request, not yet assigned an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl NewItem {
    pub fn into_item(self, id: u32) -> Item {
        Item::new(id, self.name, self.quantity, self.unit)
    }
}

/// Parse raw quantity input into a positive, finite number
pub fn parse_quantity(text: &str) -> Result<f64, ValidationError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidQuantity),
    }
}

/// Validate raw form input against the current list
pub fn validate_new_item(
    name: &str,
    quantity_text: &str,
    unit: &str,
    existing: &[Item],
) -> Result<NewItem, ValidationError> {
    let name = name.trim();
    let quantity_text = quantity_text.trim();
    let unit = unit.trim();

    if name.is_empty() || quantity_text.is_empty() || unit.is_empty() {
        return Err(ValidationError::MissingField);
    }

    let quantity = parse_quantity(quantity_text)?;

    // Stored names are trimmed, so compare the trimmed candidate
    if existing.iter().any(|item| item.name == name) {
        return Err(ValidationError::DuplicateName);
    }

    Ok(NewItem {
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
    })
}
