//! Knowledge Graph API client
//!
//! Thin wrapper over the KG core instance endpoints: create (POST), patch
//! (PATCH), and delete (DELETE), each authenticated with a bearer token and
//! reported per item.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::KgClient;
pub use types::{OutcomeReport, UploadOutcome};
