//! API error handling

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use domain_intake::IntakeError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Please attach your policy certificate.")]
    MissingPolicy,

    #[error("Please attach at least one evidence photo.")]
    MissingEvidence,

    #[error("Only POST is allowed.")]
    MethodNotAllowed,

    #[error("{0}")]
    Internal(String),
}

/// Error response envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            ApiError::MissingFields => (StatusCode::BAD_REQUEST, "missing_fields"),
            ApiError::MissingPolicy => (StatusCode::BAD_REQUEST, "missing_policy"),
            ApiError::MissingEvidence => (StatusCode::BAD_REQUEST, "missing_evidence"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server_error"),
        };

        let body = ErrorResponse {
            ok: false,
            error: error_code.to_string(),
            message: self.to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, ApiError::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::MissingFields => ApiError::MissingFields,
            IntakeError::MissingPolicy => ApiError::MissingPolicy,
            IntakeError::MissingEvidence => ApiError::MissingEvidence,
            IntakeError::Upstream(upstream) => ApiError::Internal(upstream.to_string()),
        }
    }
}
