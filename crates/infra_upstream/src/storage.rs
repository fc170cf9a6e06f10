//! Attachment storage adapter
//!
//! Uploading one file is a two-step exchange with the storage API:
//!
//! 1. POST `{filename, contentType}` to the storage URL (authenticated with
//!    an `X-API-Key` header) to obtain an attachment id and a one-time
//!    upload URL.
//! 2. PUT the file bytes to that URL with the original content type.
//!
//! A non-success status on either step fails the file, carrying the upstream
//! status and body text for diagnostics. A slot response missing the id or
//! URL is an integration error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use domain_intake::{AttachmentStore, FileAttachment, UpstreamError};

/// Configuration for the storage adapter
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Full URL of the slot-init endpoint (e.g. "https://api.example.com/api/v1/storage")
    pub base_url: String,

    /// API key sent in the `X-API-Key` header
    pub api_key: String,
}

/// Storage API adapter implementing the `AttachmentStore` port
#[derive(Debug, Clone)]
pub struct StorageClient {
    client: reqwest::Client,
    config: StorageConfig,
}

/// Slot-init request body; wire names are fixed by the storage API
#[derive(Debug, Serialize)]
struct SlotRequest<'a> {
    filename: &'a str,
    #[serde(rename = "contentType")]
    content_type: &'a str,
}

/// Slot-init response envelope
#[derive(Debug, Default, Deserialize)]
struct SlotResponse {
    #[serde(default)]
    data: SlotData,
}

#[derive(Debug, Default, Deserialize)]
struct SlotData {
    id: Option<String>,
    url: Option<String>,
}

impl StorageClient {
    /// Creates a storage adapter sharing the given HTTP client
    pub fn new(client: reqwest::Client, config: StorageConfig) -> Self {
        Self { client, config }
    }

    /// Requests a write slot for the file
    async fn init_slot(&self, file: &FileAttachment) -> Result<(String, String), UpstreamError> {
        let response = self
            .client
            .post(&self.config.base_url)
            .header("X-API-Key", self.config.api_key.as_str())
            .json(&SlotRequest {
                filename: &file.filename,
                content_type: &file.content_type,
            })
            .send()
            .await
            .map_err(|e| UpstreamError::transport("storage init", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::StorageInit {
                status: status.as_u16(),
                body,
            });
        }

        let slot: SlotResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::invalid_body("storage init", e))?;

        match (slot.data.id, slot.data.url) {
            (Some(id), Some(url)) => Ok((id, url)),
            _ => Err(UpstreamError::IncompleteSlot),
        }
    }
}

#[async_trait]
impl AttachmentStore for StorageClient {
    async fn store(&self, file: &FileAttachment) -> Result<String, UpstreamError> {
        let (attachment_id, upload_url) = self.init_slot(file).await?;

        tracing::debug!(
            filename = %file.filename,
            attachment_id = %attachment_id,
            size = file.bytes.len(),
            "uploading attachment"
        );

        let response = self
            .client
            .put(&upload_url)
            .header(reqwest::header::CONTENT_TYPE, file.content_type.as_str())
            .body(file.bytes.clone())
            .send()
            .await
            .map_err(|e| UpstreamError::transport("upload", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Upload {
                status: status.as_u16(),
                body,
            });
        }

        Ok(attachment_id)
    }
}
