//! Error types for catalog loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no entries")]
    EmptyCatalog,

    #[error("catalog entry #{index} has a blank label")]
    BlankLabel { index: usize },

    #[error("catalog label '{label}' appears more than once")]
    DuplicateLabel { label: String },

    #[error("variant options must include '{expected}'")]
    MissingDefaultVariant { expected: String },
}
