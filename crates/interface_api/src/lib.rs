//! HTTP API Layer
//!
//! This crate provides the HTTP front for the claim intake service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: health check, submit pipeline, static intake page
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent `{ ok, error, message }` envelopes
//! - **Config**: Environment-provided configuration, loaded once at startup
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config, service);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_intake::IntakeService;

use crate::config::IntakeConfig;
use crate::handlers::{health, static_files, submit};

/// Upper bound on buffered request bodies, multipart uploads included
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: IntakeConfig,
    pub service: IntakeService,
}

/// Creates the main router
///
/// # Arguments
///
/// * `config` - Intake configuration
/// * `service` - Intake pipeline wired to the upstream adapters
///
/// # Returns
///
/// Configured Axum router. `/api/health` and `/api/submit` are the only API
/// routes; any other verb on `/api/submit` is rejected with 405, and
/// everything unmatched falls through to the static responder.
pub fn create_router(config: IntakeConfig, service: IntakeService) -> Router {
    let state = AppState { config, service };

    Router::new()
        .route("/api/health", get(health::health_check))
        .route(
            "/api/submit",
            post(submit::submit_claim).fallback(submit::method_not_allowed),
        )
        .fallback(static_files::serve_asset)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
