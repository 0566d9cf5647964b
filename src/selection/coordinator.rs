use super::{CartSink, ModalDialog, Quantity, Selection, SelectionHandlers};
use dioxus::logger::tracing::debug;

/// Owns the pending selection and forwards it to the sink on confirm.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionCoordinator<M, S> {
    modal: M,
    sink: S,
    selection: Selection,
}

impl<M: ModalDialog, S: CartSink> SelectionCoordinator<M, S> {
    pub fn new(modal: M, sink: S) -> Self {
        Self {
            modal,
            sink,
            selection: Selection::default(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[cfg(test)]
    pub fn modal(&self) -> &M {
        &self.modal
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<M: ModalDialog, S: CartSink> SelectionHandlers for SelectionCoordinator<M, S> {
    fn on_activate(&mut self, label: &str) {
        self.modal.set_title(label);
        self.selection = Selection::for_entry(label);
        self.modal.show();
    }

    fn on_variant_change(&mut self, value: &str) {
        self.selection.variant = value.to_string();
    }

    fn on_quantity_change(&mut self, raw: &str) {
        let quantity = Quantity::parse(raw);
        if quantity.is_nan() {
            debug!("[selection] quantity {raw:?} is not a number");
        }
        self.selection.quantity = quantity;
    }

    fn on_confirm(&mut self) {
        self.sink.record(&self.selection);
        self.modal.hide();
    }
}
