//! Specmeta Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the specmeta workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all specmeta
//! workspace members:
//!
//! - **Error Handling**: the library error type and result alias
//! - **Logging**: tracing-based logging configuration and initialization
//! - **Types**: the specimen row model shared by the ingest and mapping crates

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SpecmetaError};
pub use types::{SpecimenKind, SpecimenRow};
