//! Error types for the specmeta CLI
//!
//! All errors are user-facing, with messages that say what went wrong and
//! what to try next.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Knowledge Graph API communication failed
    #[error("Knowledge Graph error: {0}. Check the server URL and your network connection.")]
    Api(String),

    /// Required file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// Input table or argument doesn't match expectations
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No authorisation token available
    #[error("No token provided. Pass --token, set KG_TOKEN, or enter one at the prompt.")]
    NoToken,

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection and the KG URL.")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("Failed to parse JSON: {0}. Check the file syntax.")]
    JsonParse(#[from] serde_json::Error),

    /// Interactive prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    /// Error from the conversion libraries
    #[error(transparent)]
    Core(#[from] specmeta_common::SpecmetaError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables.")]
    Config(String),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create an API error
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
