//! Frontend Models
//!
//! Domain types from shopping-core plus the text the views render for them.

pub use shopping_core::{Item, ItemId, ListStatus};

/// Status line under the form; `None` hides it
pub fn status_text(status: ListStatus) -> Option<String> {
    match status {
        ListStatus::Hidden => None,
        ListStatus::AllPurchased => Some("All items purchased!".to_string()),
        ListStatus::Remaining(n) => Some(format!("Remaining items: {}", n)),
    }
}

/// CSS class for the status line
pub fn status_class(status: ListStatus) -> &'static str {
    match status {
        ListStatus::AllPurchased => "success",
        _ => "remaining-items",
    }
}

/// Label of the toggle button, describing what clicking it does
pub fn toggle_label(purchased: bool) -> &'static str {
    if purchased { "Not purchased" } else { "Purchased" }
}

/// `Milk (2 L)`
pub fn item_label(item: &Item) -> String {
    format!("{} ({} {})", item.name, item.quantity_label(), item.unit)
}
