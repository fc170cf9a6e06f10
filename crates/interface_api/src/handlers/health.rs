//! Health check handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Health check endpoint; static payload, independent of configuration state
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
