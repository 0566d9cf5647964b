use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod catalog;
mod components;
mod error;
mod selection;
mod utils;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[log] failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#10b981" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
