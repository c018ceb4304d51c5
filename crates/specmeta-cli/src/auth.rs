//! Token resolution
//!
//! The Knowledge Graph commands need a bearer token. Precedence: the
//! `--token` flag, then the `KG_TOKEN` environment variable (via
//! [`Config`]), then an interactive prompt.

use crate::config::Config;
use crate::error::{CliError, Result};

/// Resolve the authorisation token for a Knowledge Graph command
pub fn resolve_token(flag: Option<String>) -> Result<String> {
    if let Some(token) = non_empty(flag) {
        return Ok(token);
    }

    if let Some(token) = non_empty(Config::from_env()?.token) {
        return Ok(token);
    }

    let entered = inquire::Password::new("Please enter your KG token:")
        .without_confirmation()
        .prompt()?;

    non_empty(Some(entered)).ok_or(CliError::NoToken)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|token| {
        let token = token.trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    })
}
