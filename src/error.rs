// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The `--search` payload is not valid criteria JSON. The message is the
    /// parser's own so callers see exactly what went wrong.
    #[error("{0}")]
    Criteria(serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to open workbook {path}: {message}")]
    WorkbookOpen { path: PathBuf, message: String },

    #[error("Failed to read sheet {sheet}: {message}")]
    SheetRead { sheet: String, message: String },

    #[error("sheet {0} does not exist")]
    SheetNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        SearchError::Config(err.to_string())
    }
}
