// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Error opening table: {0}")]
    NotFound(String),

    #[error("Search temporarily unavailable: {0}")]
    Query(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl SearchError {
    /// Message shown to the user in the page banner.
    pub fn banner(&self) -> String {
        self.to_string()
    }
}
