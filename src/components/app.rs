use crate::catalog::CatalogConfig;
use crate::components::{view_label, AppView, Icon, SelectionModal, ShowcaseCoordinator, SignalModal};
use crate::selection::{ConsoleCartSink, SelectionCoordinator};
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let current_view = use_route::<AppView>();
    let modal = SignalModal::new(
        use_signal(String::new),
        use_signal(|| false),
        use_signal(|| 0u64),
    );
    let coordinator: ShowcaseCoordinator =
        use_signal(|| SelectionCoordinator::new(modal, ConsoleCartSink));

    // Provide state via context
    use_context_provider(|| modal);
    use_context_provider(|| coordinator);

    let catalog_error = use_hook(|| match CatalogConfig::bundled() {
        Ok(catalog) => {
            info!(
                "[catalog] loaded {} entries, {} variants",
                catalog.entries.len(),
                catalog.variants.len()
            );
            None
        }
        Err(err) => {
            error!("[catalog] failed to load bundled catalog: {err}");
            Some(err.to_string())
        }
    });

    let title = view_label(&current_view);

    rsx! {
        document::Title { "{title} · Showcase" }
        div { class: "min-h-screen bg-zinc-950 text-zinc-200",
            header { class: "border-b border-zinc-800 px-6 py-4 flex items-center gap-3",
                Icon {
                    name: "cart".to_string(),
                    class: "w-5 h-5 text-emerald-400".to_string(),
                }
                span { class: "font-semibold text-white", "Showcase" }
                span { class: "text-sm text-zinc-500", "{title}" }
            }
            main { class: "max-w-6xl mx-auto px-6 py-8",
                if let Some(message) = catalog_error {
                    div { class: "p-3 rounded-lg bg-red-500/10 border border-red-500/40 text-red-200 text-sm flex items-center gap-2",
                        Icon {
                            name: "alert".to_string(),
                            class: "w-4 h-4".to_string(),
                        }
                        "{message}"
                    }
                } else {
                    Outlet::<AppView> {}
                }
            }
            SelectionModal {}
        }
    }
}
