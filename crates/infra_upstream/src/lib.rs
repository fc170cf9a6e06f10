//! Upstream Integration Adapters
//!
//! HTTP implementations of the `domain_intake` ports: [`StorageClient`] for
//! the attachment storage API and [`WebhookClient`] for the task webhook.
//! Both share one pooled reqwest client carrying the outbound timeout, so a
//! hung upstream fails the request instead of blocking it indefinitely.
//! Neither adapter retries; a failed call is terminal for its request.

pub mod storage;
pub mod webhook;

use std::time::Duration;

pub use storage::{StorageClient, StorageConfig};
pub use webhook::{WebhookClient, WebhookConfig};

/// Builds the shared HTTP client used by all upstream adapters
///
/// # Arguments
///
/// * `timeout_secs` - Per-request timeout applied to every outbound call
///
/// # Errors
///
/// Returns an error if the underlying TLS backend cannot be initialized
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}
