//! Defines the routed views of the showcase.

use crate::components::views::{NotFound, PortfolioView};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        PortfolioView {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::PortfolioView {} => "Portfolio",
        AppView::NotFound { .. } => "Not found",
    }
}
