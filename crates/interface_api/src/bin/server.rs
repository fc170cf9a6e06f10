//! Claim Intake - Server Binary
//!
//! This binary serves the insurance-claim intake page and its submit API.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claim-intake
//!
//! # Run with environment variables
//! INTAKE_PORT=5173 INTAKE_WEBHOOK_URL=https://... cargo run --bin claim-intake
//! ```
//!
//! # Environment Variables
//!
//! * `INTAKE_HOST` - Server host (default: 0.0.0.0)
//! * `INTAKE_PORT` - Server port (default: 5173)
//! * `INTAKE_PUBLIC_DIR` - Static asset directory (default: public)
//! * `INTAKE_PROFILE` - Submit profile: multipart or json (default: multipart)
//! * `INTAKE_BASE_URL` - Base URL the storage endpoint is derived from
//! * `INTAKE_STORAGE_URL` - Storage slot-init endpoint (default: derived from base URL)
//! * `INTAKE_STORAGE_API_KEY` - Storage API key
//! * `INTAKE_WEBHOOK_URL` - Task webhook endpoint
//! * `INTAKE_WEBHOOK_SECRET` - Webhook shared secret
//! * `INTAKE_TASK_TYPE` - Task type tag (default: process_claim)
//! * `INTAKE_TRIGGER_ID` - Webhook trigger id, a UUID
//! * `INTAKE_UPSTREAM_TIMEOUT_SECS` - Outbound call timeout (default: 30)
//! * `INTAKE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use domain_intake::IntakeService;
use infra_upstream::{StorageClient, StorageConfig, WebhookClient, WebhookConfig};
use interface_api::config::IntakeConfig;
use interface_api::create_router;

/// Main entry point for the intake server.
///
/// Initializes logging, loads configuration, wires the upstream adapters,
/// and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be constructed
/// - The server address is invalid
/// - The server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        profile = ?config.profile,
        "Starting claim intake server"
    );

    // One pooled client for both upstream adapters; the timeout applies to
    // every outbound call.
    let http_client = infra_upstream::build_http_client(config.upstream_timeout_secs)?;

    let store = StorageClient::new(
        http_client.clone(),
        StorageConfig {
            base_url: config.storage_endpoint(),
            api_key: config.storage_api_key.clone(),
        },
    );
    let notifier = WebhookClient::new(
        http_client,
        WebhookConfig {
            url: config.webhook_url.clone(),
            secret: config.webhook_secret.clone(),
        },
    );
    let service = IntakeService::new(
        Arc::new(store),
        Arc::new(notifier),
        config.trigger_id,
        config.task_type.clone(),
    );

    let app = create_router(config.clone(), service);

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads intake configuration from environment variables.
///
/// Tries the `INTAKE_`-prefixed source first, then falls back to individual
/// variables with documented defaults, so a bare process always starts.
fn load_config() -> IntakeConfig {
    IntakeConfig::from_env().unwrap_or_else(|_| {
        let defaults = IntakeConfig::default();
        IntakeConfig {
            host: std::env::var("INTAKE_HOST").unwrap_or(defaults.host),
            port: std::env::var("INTAKE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            public_dir: std::env::var("INTAKE_PUBLIC_DIR").unwrap_or(defaults.public_dir),
            profile: std::env::var("INTAKE_PROFILE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.profile),
            base_url: std::env::var("INTAKE_BASE_URL").unwrap_or(defaults.base_url),
            storage_url: std::env::var("INTAKE_STORAGE_URL").ok(),
            storage_api_key: std::env::var("INTAKE_STORAGE_API_KEY")
                .unwrap_or(defaults.storage_api_key),
            webhook_url: std::env::var("INTAKE_WEBHOOK_URL").unwrap_or(defaults.webhook_url),
            webhook_secret: std::env::var("INTAKE_WEBHOOK_SECRET")
                .unwrap_or(defaults.webhook_secret),
            task_type: std::env::var("INTAKE_TASK_TYPE").unwrap_or(defaults.task_type),
            trigger_id: std::env::var("INTAKE_TRIGGER_ID")
                .ok()
                .and_then(|t| Uuid::parse_str(&t).ok())
                .unwrap_or(defaults.trigger_id),
            upstream_timeout_secs: std::env::var("INTAKE_UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.upstream_timeout_secs),
            log_level: std::env::var("INTAKE_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
