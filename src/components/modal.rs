use crate::selection::{ConsoleCartSink, ModalDialog, SelectionCoordinator};
use dioxus::prelude::*;

/// Coordinator shared through context by the shell.
pub type ShowcaseCoordinator = Signal<SelectionCoordinator<SignalModal, ConsoleCartSink>>;

/// [`ModalDialog`] backed by signals so `SelectionModal` re-renders on change.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalModal {
    title: Signal<String>,
    visible: Signal<bool>,
    // Bumped on every show so the form can reset its draft fields.
    session: Signal<u64>,
}

impl SignalModal {
    pub fn new(title: Signal<String>, visible: Signal<bool>, session: Signal<u64>) -> Self {
        Self {
            title,
            visible,
            session,
        }
    }

    pub fn title(&self) -> String {
        (self.title)()
    }

    pub fn is_visible(&self) -> bool {
        (self.visible)()
    }

    pub fn session(&self) -> u64 {
        (self.session)()
    }
}

impl ModalDialog for SignalModal {
    fn set_title(&mut self, title: &str) {
        self.title.set(title.to_string());
    }

    fn show(&mut self) {
        self.session
            .with_mut(|session| *session = session.saturating_add(1));
        self.visible.set(true);
        mark_document_modal_open(true);
    }

    fn hide(&mut self) {
        self.visible.set(false);
        mark_document_modal_open(false);
    }
}

// Lets the stylesheet lock page scrolling behind the dialog.
#[cfg(target_arch = "wasm32")]
fn mark_document_modal_open(open: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = if open {
        root.set_attribute("data-modal-open", "true")
    } else {
        root.remove_attribute("data-modal-open")
    };
}

#[cfg(not(target_arch = "wasm32"))]
fn mark_document_modal_open(_open: bool) {}
