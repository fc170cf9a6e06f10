//! Task webhook adapter
//!
//! One POST per submission, authenticated with a shared secret carried in
//! the `x-webhook-secret` header. The upstream JSON response body is handed
//! back to the caller unmodified.

use async_trait::async_trait;
use serde_json::Value;

use domain_intake::{ClaimNotifier, UpstreamError, WebhookPayload};

/// Configuration for the webhook adapter
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Webhook endpoint URL
    pub url: String,

    /// Shared secret sent in the `x-webhook-secret` header
    pub secret: String,
}

/// Task webhook adapter implementing the `ClaimNotifier` port
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    config: WebhookConfig,
}

impl WebhookClient {
    /// Creates a webhook adapter sharing the given HTTP client
    pub fn new(client: reqwest::Client, config: WebhookConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ClaimNotifier for WebhookClient {
    async fn notify(&self, payload: &WebhookPayload) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .post(&self.config.url)
            .header("x-webhook-secret", self.config.secret.as_str())
            .json(payload)
            .send()
            .await
            .map_err(|e| UpstreamError::transport("webhook", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Webhook {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "webhook dispatched");

        response
            .json()
            .await
            .map_err(|e| UpstreamError::invalid_body("webhook", e))
    }
}
