//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod icons;
mod modal;
mod selection_modal;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use modal::*;
pub use selection_modal::*;
// Views are accessed via views::ViewName
