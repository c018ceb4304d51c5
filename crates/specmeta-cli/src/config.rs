//! Configuration management for the specmeta CLI
//!
//! Settings come from the environment with sensible defaults; command-line
//! flags override them.

use crate::error::Result;
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default Knowledge Graph API base URL
pub const DEFAULT_KG_URL: &str = "https://core.kg.ebrains.eu/v3-beta";

/// Default space instances are created in
pub const DEFAULT_SPACE: &str = "dataset";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Knowledge Graph API base URL
    pub kg_url: String,

    /// Space instances are created in
    pub space: String,

    /// Authorisation token, when provided via the environment
    #[serde(skip_serializing)]
    pub token: Option<String>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self {
            kg_url: DEFAULT_KG_URL.to_string(),
            space: DEFAULT_SPACE.to_string(),
            token: None,
        }
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("SPECMETA_KG_URL") {
            config.kg_url = url;
        }
        if let Ok(space) = std::env::var("SPECMETA_SPACE") {
            config.space = space;
        }
        if let Ok(token) = std::env::var("KG_TOKEN") {
            if !token.is_empty() {
                config.token = Some(token);
            }
        }

        Ok(config)
    }

    /// Get the Knowledge Graph URL
    pub fn kg_url(&self) -> &str {
        &self.kg_url
    }

    /// Get the space name
    pub fn space(&self) -> &str {
        &self.space
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
