//! Upstream ports
//!
//! The intake pipeline talks to two external collaborators: an attachment
//! storage API and a task webhook. Both are reached through the traits here,
//! so the domain depends only on the contract: the reqwest adapters live in
//! `infra_upstream`, and tests substitute in-memory fakes.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::submission::FileAttachment;
use crate::webhook::WebhookPayload;

/// Error type for upstream port operations
///
/// Failure variants carry the upstream HTTP status and body text verbatim;
/// that text is surfaced to the caller for diagnostics.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The storage slot-init call returned a non-success status
    #[error("Storage init failed ({status}): {body}")]
    StorageInit { status: u16, body: String },

    /// The byte upload to the signed URL returned a non-success status
    #[error("Upload failed ({status}): {body}")]
    Upload { status: u16, body: String },

    /// The webhook dispatch returned a non-success status
    #[error("Webhook failed ({status}): {body}")]
    Webhook { status: u16, body: String },

    /// The storage response did not contain both an id and an upload URL
    #[error("Storage response missing attachment id or upload url")]
    IncompleteSlot,

    /// A response body could not be read or parsed
    #[error("{operation} returned an unreadable body: {message}")]
    InvalidBody {
        operation: &'static str,
        message: String,
    },

    /// The request itself failed (connect error, timeout)
    #[error("{operation} request failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },
}

impl UpstreamError {
    /// Creates a Transport error from any displayable cause
    pub fn transport(operation: &'static str, cause: impl std::fmt::Display) -> Self {
        UpstreamError::Transport {
            operation,
            message: cause.to_string(),
        }
    }

    /// Creates an InvalidBody error from any displayable cause
    pub fn invalid_body(operation: &'static str, cause: impl std::fmt::Display) -> Self {
        UpstreamError::InvalidBody {
            operation,
            message: cause.to_string(),
        }
    }
}

/// Port to the attachment storage service
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Uploads one file and returns the storage-assigned attachment id
    async fn store(&self, file: &FileAttachment) -> Result<String, UpstreamError>;
}

/// Port to the downstream task webhook
#[async_trait]
pub trait ClaimNotifier: Send + Sync {
    /// Posts the claim payload downstream and returns the response body as-is
    async fn notify(&self, payload: &WebhookPayload) -> Result<Value, UpstreamError>;
}
