//! Specmeta openMINDS Library
//!
//! Maps tabular specimen metadata to openMINDS v3 instance documents.
//!
//! # Overview
//!
//! - **vocab**: controlled-vocabulary and type URL tables
//! - **instance**: the JSON-LD instance document model
//! - **subject**: subject / subject group builders
//! - **sample**: tissue sample / tissue sample collection builders
//! - **correction**: upload-time normalization of documents loaded from disk
//!
//! # Example
//!
//! ```no_run
//! use specmeta_common::{SpecimenKind, SpecimenRow};
//! use specmeta_openminds::subject;
//! use std::path::Path;
//!
//! fn main() -> specmeta_common::Result<()> {
//!     let mut row = SpecimenRow::new(SpecimenKind::Subject, "sub-01");
//!     row.age_category = Some("adult".to_string());
//!     let overview = subject::build_subjects(&[row], Path::new("./out"))?;
//!     println!("created subject {}", overview[0].specimen_uuid.as_deref().unwrap_or("?"));
//!     Ok(())
//! }
//! ```

pub mod correction;
pub mod instance;
pub mod sample;
pub mod subject;
pub mod vocab;

// Re-export commonly used types
pub use instance::{InstanceDocument, InstanceRef, QuantitativeValue};
