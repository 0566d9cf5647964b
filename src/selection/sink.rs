use super::{CartSink, Selection};
use dioxus::logger::tracing::{info, warn};

/// Logs each confirmed selection. There is no cart behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConsoleCartSink;

impl CartSink for ConsoleCartSink {
    fn record(&mut self, selection: &Selection) {
        match serde_json::to_string(selection) {
            Ok(json) => info!("[cart] Item added to cart: {json}"),
            Err(err) => warn!("[cart] Item added to cart: {selection:?} (not serializable: {err})"),
        }
    }
}
