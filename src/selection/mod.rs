//! Selection state behind the showcase modal, and the seams it talks through.
//!
//! The coordinator only sees the [`ModalDialog`] and [`CartSink`] traits.
//! The components drive it through signals, tests drive it with plain structs.

use serde::Serialize;

mod coordinator;
mod quantity;
mod sink;

pub use coordinator::*;
pub use quantity::Quantity;
pub use sink::ConsoleCartSink;

pub const DEFAULT_VARIANT: &str = "Standard";

/// The item, variant and quantity currently chosen in the dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub title: String,
    pub variant: String,
    pub quantity: Quantity,
}

impl Selection {
    pub fn for_entry(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            title: String::new(),
            variant: DEFAULT_VARIANT.to_string(),
            quantity: Quantity::default(),
        }
    }
}

/// The dialog the coordinator drives. Visibility is owned by the implementor.
pub trait ModalDialog {
    fn set_title(&mut self, title: &str);
    fn show(&mut self);
    fn hide(&mut self);
}

/// Receives a finished selection when the user confirms.
pub trait CartSink {
    fn record(&mut self, selection: &Selection);
}

/// The four UI events the coordinator reacts to.
pub trait SelectionHandlers {
    fn on_activate(&mut self, label: &str);
    fn on_variant_change(&mut self, value: &str);
    fn on_quantity_change(&mut self, raw: &str);
    fn on_confirm(&mut self);
}
