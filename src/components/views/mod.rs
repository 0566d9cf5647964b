mod not_found;
mod portfolio;

pub use not_found::NotFound;
pub use portfolio::PortfolioView;
