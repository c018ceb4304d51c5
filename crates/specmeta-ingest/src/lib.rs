//! Specmeta Ingest Library
//!
//! Tabular import for specimen metadata.
//!
//! # Overview
//!
//! - **reader**: CSV and JSON import of specimen rows
//! - **merge**: subject/sample metadata merging and name-based link
//!   resolution against a previous run's overview
//! - **overview**: the per-run `{specimenType}_created.csv` overview file
//!
//! # Example
//!
//! ```no_run
//! use specmeta_ingest::{reader, overview};
//!
//! fn main() -> specmeta_common::Result<()> {
//!     let rows = reader::read_csv("specimen.csv")?;
//!     overview::write_overview(&rows, std::path::Path::new("./out"))?;
//!     Ok(())
//! }
//! ```

pub mod merge;
pub mod overview;
pub mod reader;

// Re-export commonly used functions
pub use merge::{merge, resolve_links};
pub use overview::{read_overview, write_overview};
pub use reader::{read_csv, read_json};
