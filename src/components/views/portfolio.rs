use crate::catalog::{CatalogConfig, CatalogEntry};
use crate::components::{Icon, ShowcaseCoordinator};
use crate::selection::SelectionHandlers;
use dioxus::prelude::*;

#[component]
pub fn PortfolioView() -> Element {
    // The shell shows the load error, so an invalid catalog renders nothing here.
    let Ok(catalog) = CatalogConfig::bundled() else {
        return rsx! {};
    };

    rsx! {
        section { class: "space-y-6",
            div {
                p { class: "text-xs uppercase tracking-wide text-zinc-500", "Portfolio" }
                h1 { class: "text-2xl font-semibold text-white", "Pick something to order" }
            }
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                for entry in catalog.entries.iter() {
                    PortfolioCard { key: "{entry.label}", entry: entry.clone() }
                }
            }
        }
    }
}

#[component]
fn PortfolioCard(entry: CatalogEntry) -> Element {
    let mut coordinator = use_context::<ShowcaseCoordinator>();
    let accent = entry
        .accent
        .clone()
        .unwrap_or_else(|| "from-zinc-500/30".to_string());
    let element_id = entry.element_id();

    let on_open = {
        let label = entry.label.clone();
        move |_: MouseEvent| coordinator.with_mut(|c| c.on_activate(&label))
    };

    rsx! {
        article {
            id: "{element_id}",
            class: "rounded-2xl bg-zinc-900/60 border border-zinc-800 overflow-hidden flex flex-col",
            div { class: "h-32 bg-gradient-to-br {accent} to-zinc-900 flex items-center justify-center",
                Icon {
                    name: "image".to_string(),
                    class: "w-10 h-10 text-zinc-400".to_string(),
                }
            }
            div { class: "p-4 flex-1 flex flex-col gap-2",
                if let Some(category) = entry.category.clone() {
                    p { class: "text-xs uppercase tracking-wide text-zinc-500", "{category}" }
                }
                h2 { class: "text-lg font-semibold text-white", "{entry.label}" }
                if let Some(summary) = entry.summary.clone() {
                    p { class: "text-sm text-zinc-400 flex-1", "{summary}" }
                }
                button {
                    class: "portfolio-link mt-2 px-4 py-2 rounded-lg bg-emerald-500 text-white hover:bg-emerald-400 transition-colors flex items-center justify-center gap-2",
                    "data-item": "{entry.label}",
                    onclick: on_open,
                    Icon {
                        name: "cart".to_string(),
                        class: "w-4 h-4".to_string(),
                    }
                    "View options"
                }
            }
        }
    }
}
