use crate::catalog::CatalogConfig;
use crate::components::{Icon, ShowcaseCoordinator, SignalModal};
use crate::selection::{ModalDialog, Quantity, SelectionHandlers, DEFAULT_VARIANT};
use dioxus::prelude::*;

/// Shared item dialog. Visibility and title come from the [`SignalModal`],
/// field edits go straight to the coordinator.
#[component]
pub fn SelectionModal() -> Element {
    let mut coordinator = use_context::<ShowcaseCoordinator>();
    let modal = use_context::<SignalModal>();

    if !modal.is_visible() {
        return rsx! {};
    }

    let variants = CatalogConfig::bundled()
        .map(|catalog| catalog.variants.clone())
        .unwrap_or_else(|_| vec![DEFAULT_VARIANT.to_string()]);
    let title = modal.title();
    let session = modal.session();
    let (current_variant, current_quantity) = {
        let coordinator = coordinator.read();
        let selection = coordinator.selection();
        (selection.variant.clone(), selection.quantity)
    };

    let on_close = {
        let mut modal = modal;
        move |_: MouseEvent| modal.hide()
    };

    let on_backdrop_close = {
        let mut modal = modal;
        move |_: MouseEvent| modal.hide()
    };

    let on_variant_change =
        move |evt: FormEvent| coordinator.with_mut(|c| c.on_variant_change(&evt.value()));

    let on_confirm = move |_: MouseEvent| coordinator.with_mut(|c| c.on_confirm());

    rsx! {
        div {
            id: "portfolioModal",
            class: "fixed inset-0 z-[95] flex items-end md:items-center justify-center bg-black/60 backdrop-blur-sm px-3 pb-20 md:pb-0 pt-3 md:pt-0",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "portfolioModalLabel",
            onclick: on_backdrop_close,
            div {
                class: "w-full md:max-w-md bg-zinc-900/95 border border-zinc-800 rounded-2xl shadow-2xl p-5 space-y-5",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { class: "flex items-center justify-between gap-3",
                    div { class: "min-w-0",
                        p { class: "text-xs uppercase tracking-wide text-zinc-500",
                            "Item options"
                        }
                        h2 {
                            id: "portfolioModalLabel",
                            class: "text-lg font-semibold text-white truncate",
                            "{title}"
                        }
                    }
                    button {
                        class: "p-2 rounded-lg text-zinc-400 hover:text-white hover:bg-zinc-800 transition-colors",
                        onclick: on_close,
                        Icon {
                            name: "x".to_string(),
                            class: "w-5 h-5".to_string(),
                        }
                    }
                }

                div { class: "space-y-3",
                    label {
                        "for": "itemType",
                        class: "text-xs uppercase tracking-wide text-zinc-500",
                        "Type"
                    }
                    select {
                        id: "itemType",
                        class: "w-full px-3 py-2 rounded-lg bg-zinc-900/50 border border-zinc-800 text-white focus:outline-none focus:border-emerald-500/50",
                        onchange: on_variant_change,
                        for variant in variants {
                            option {
                                key: "{variant}",
                                value: "{variant}",
                                selected: variant == current_variant,
                                "{variant}"
                            }
                        }
                    }
                    label {
                        "for": "itemQuantity",
                        class: "text-xs uppercase tracking-wide text-zinc-500",
                        "Quantity"
                    }
                    // Keyed on the open count so each open starts from a fresh draft
                    QuantityField { key: "{session}" }
                    p { class: "text-xs text-zinc-500", "{current_quantity} × {current_variant}" }
                }

                button {
                    id: "addToCartButton",
                    class: "w-full flex items-center justify-between px-4 py-3 rounded-xl bg-emerald-500 hover:bg-emerald-400 text-white font-medium transition-colors",
                    onclick: on_confirm,
                    span { "Add to cart" }
                    Icon {
                        name: "cart".to_string(),
                        class: "w-5 h-5".to_string(),
                    }
                }
            }
        }
    }
}

#[component]
fn QuantityField() -> Element {
    let mut coordinator = use_context::<ShowcaseCoordinator>();
    let mut draft = use_signal(|| Quantity::default().to_string());

    rsx! {
        input {
            id: "itemQuantity",
            class: "w-full px-3 py-2 rounded-lg bg-zinc-900/50 border border-zinc-800 text-white placeholder:text-zinc-600 focus:outline-none focus:border-emerald-500/50",
            r#type: "text",
            "inputmode": "numeric",
            value: draft,
            oninput: move |evt: FormEvent| {
                let raw = evt.value();
                coordinator.with_mut(|c| c.on_quantity_change(&raw));
                draft.set(raw);
            },
        }
    }
}
