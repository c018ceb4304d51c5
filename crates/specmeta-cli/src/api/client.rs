//! HTTP client for the Knowledge Graph core API
//!
//! One method per instance operation. Transport failures surface as errors;
//! HTTP status codes become [`UploadOutcome`]s so a failed item never aborts
//! a batch.

use crate::api::endpoints;
use crate::api::types::UploadOutcome;
use crate::error::Result;
use reqwest::Client;
use serde_json::Value;
use specmeta_openminds::{vocab, InstanceRef};
use std::time::Duration;

// ============================================================================
// API Client Constants
// ============================================================================

/// Default timeout for API requests in seconds.
/// Can be overridden via the SPECMETA_API_TIMEOUT_SECS environment variable.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 120;

/// Client for the Knowledge Graph instance endpoints
pub struct KgClient {
    client: Client,
    base_url: String,
    token: String,
}

impl KgClient {
    /// Create a new client for a base URL with a bearer token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let timeout_secs = std::env::var("SPECMETA_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    /// Create an instance by UUID within a space
    pub async fn create_instance(
        &self,
        uuid: &str,
        document: &Value,
        space: &str,
    ) -> Result<UploadOutcome> {
        let url = endpoints::instance_url(&self.base_url, uuid, space);

        let response = self
            .client
            .post(&url)
            .header("accept", "*/*")
            .bearer_auth(&self.token)
            .json(document)
            .send()
            .await?;

        Ok(UploadOutcome::from_status(response.status().as_u16()))
    }

    /// Add specimens to a dataset version's studiedSpecimen list
    pub async fn attach_specimen(
        &self,
        dsv_uuid: &str,
        specimen_uuids: &[String],
        space: &str,
    ) -> Result<UploadOutcome> {
        let url = endpoints::instance_url(&self.base_url, dsv_uuid, space);

        let studied_specimen: Vec<InstanceRef> = specimen_uuids
            .iter()
            .map(|uuid| InstanceRef::kg(uuid))
            .collect();
        let patch = serde_json::json!({
            "@context": {"@vocab": vocab::VOCAB_CONTEXT},
            "studiedSpecimen": studied_specimen,
        });

        let response = self
            .client
            .patch(&url)
            .header("accept", "*/*")
            .bearer_auth(&self.token)
            .json(&patch)
            .send()
            .await?;

        Ok(UploadOutcome::from_status(response.status().as_u16()))
    }

    /// Delete an instance by UUID from a space
    pub async fn delete_instance(&self, uuid: &str, space: &str) -> Result<UploadOutcome> {
        let url = endpoints::instance_url(&self.base_url, uuid, space);

        let response = self
            .client
            .delete(&url)
            .header("accept", "*/*")
            .bearer_auth(&self.token)
            .send()
            .await?;

        Ok(UploadOutcome::from_status(response.status().as_u16()))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
