//! API configuration

use serde::Deserialize;
use uuid::Uuid;

/// Which decoding profile `POST /api/submit` runs
///
/// The two profiles are alternate deployments of the same route, never both
/// at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitProfile {
    /// `application/json` body with `full_name` and `email`; webhook only
    Json,
    /// `multipart/form-data` with policy certificate and evidence files
    Multipart,
}

impl std::str::FromStr for SubmitProfile {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(SubmitProfile::Json),
            "multipart" => Ok(SubmitProfile::Multipart),
            other => Err(format!("unknown submit profile: {other}")),
        }
    }
}

/// Intake service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory the static intake page is served from
    pub public_dir: String,
    /// Submit decoding profile
    pub profile: SubmitProfile,
    /// Base URL the storage endpoint is derived from when not set explicitly
    pub base_url: String,
    /// Storage slot-init endpoint; derived from `base_url` when absent
    pub storage_url: Option<String>,
    /// Storage API key
    pub storage_api_key: String,
    /// Task webhook endpoint
    pub webhook_url: String,
    /// Webhook shared secret
    pub webhook_secret: String,
    /// Task type tag sent with every webhook dispatch
    pub task_type: String,
    /// Trigger identifier sent with every webhook dispatch
    pub trigger_id: Uuid,
    /// Timeout in seconds for outbound storage and webhook calls
    pub upstream_timeout_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5173,
            public_dir: "public".to_string(),
            profile: SubmitProfile::Multipart,
            base_url: "http://localhost:8080".to_string(),
            storage_url: None,
            storage_api_key: "dev-storage-key-change-in-production".to_string(),
            webhook_url: "http://localhost:8080/api/v1/tasks/webhook/dev".to_string(),
            webhook_secret: "dev-secret-change-in-production".to_string(),
            task_type: "process_claim".to_string(),
            trigger_id: Uuid::nil(),
            upstream_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl IntakeConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("INTAKE"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Storage slot-init endpoint, explicit or derived from the base URL
    pub fn storage_endpoint(&self) -> String {
        self.storage_url.clone().unwrap_or_else(|| {
            format!("{}/api/v1/storage", self.base_url.trim_end_matches('/'))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_endpoint_derives_from_base_url() {
        let config = IntakeConfig {
            base_url: "https://api.example.com/".to_string(),
            ..IntakeConfig::default()
        };
        assert_eq!(config.storage_endpoint(), "https://api.example.com/api/v1/storage");
    }

    #[test]
    fn explicit_storage_url_wins() {
        let config = IntakeConfig {
            storage_url: Some("https://storage.example.com/slots".to_string()),
            ..IntakeConfig::default()
        };
        assert_eq!(config.storage_endpoint(), "https://storage.example.com/slots");
    }

    #[test]
    fn profile_parses_case_insensitively() {
        assert_eq!("json".parse::<SubmitProfile>(), Ok(SubmitProfile::Json));
        assert_eq!("Multipart".parse::<SubmitProfile>(), Ok(SubmitProfile::Multipart));
        assert!("both".parse::<SubmitProfile>().is_err());
    }
}
