//! Error types for specmeta

use thiserror::Error;

/// Result type alias for specmeta operations
pub type Result<T> = std::result::Result<T, SpecmetaError>;

/// Main error type for specmeta
#[derive(Error, Debug)]
pub enum SpecmetaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown vocabulary term: {0}")]
    Vocab(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),
}
