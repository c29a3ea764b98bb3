//! UI Components
//!
//! Leptos components for the shopping list view.

mod error_banner;
mod item_list;
mod item_row;
mod log_panel;
mod new_item_form;
mod status_line;

pub use error_banner::ErrorBanner;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use log_panel::LogPanel;
pub use new_item_form::NewItemForm;
pub use status_line::StatusLine;
