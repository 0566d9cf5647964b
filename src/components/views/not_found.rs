use crate::components::AppView;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "min-h-64 flex flex-col items-center justify-center gap-3 text-center",
            p { class: "text-sm text-zinc-400", "Nothing lives at /{path}." }
            Link {
                class: "px-4 py-2 rounded-lg bg-zinc-800 text-white hover:bg-zinc-700 transition-colors",
                to: AppView::PortfolioView {},
                "Back to portfolio"
            }
        }
    }
}
