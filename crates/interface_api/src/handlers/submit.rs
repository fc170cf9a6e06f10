//! Claim submission handlers
//!
//! `POST /api/submit` runs one of two decoding profiles selected at startup:
//! multipart (policy certificate + evidence files) or JSON (contact fields
//! only). Decoding failures are server errors; validation failures map to
//! the 400 envelope codes. Any other verb on the route is rejected with 405.

use axum::extract::multipart::Field;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::Json;

use domain_intake::{ClaimSubmission, FileAttachment, FormField};

use crate::config::SubmitProfile;
use crate::dto::submit::{ContactForm, SubmitResponse};
use crate::error::ApiError;
use crate::{AppState, MAX_UPLOAD_BYTES};

/// Dispatches to the configured submit profile
pub async fn submit_claim(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<SubmitResponse>, ApiError> {
    match state.config.profile {
        SubmitProfile::Multipart => submit_multipart(&state, request).await,
        SubmitProfile::Json => submit_json(&state, request).await,
    }
}

/// Rejects non-POST verbs on the submit route
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Multipart profile: decode form, upload files, dispatch webhook
async fn submit_multipart(
    state: &AppState,
    request: Request,
) -> Result<Json<SubmitResponse>, ApiError> {
    let multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let submission = decode_claim_form(multipart).await?;

    let outcome = state.service.submit_claim(&submission).await?;

    Ok(Json(SubmitResponse {
        ok: true,
        attachment_ids: Some(outcome.attachment_ids),
        webhook: outcome.webhook,
    }))
}

/// JSON profile: buffer and parse the body, dispatch webhook only
async fn submit_json(
    state: &AppState,
    request: Request,
) -> Result<Json<SubmitResponse>, ApiError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_UPLOAD_BYTES)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let form: ContactForm =
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Internal(e.to_string()))?;

    let submission = ClaimSubmission::new(
        form.full_name.as_deref().unwrap_or_default(),
        form.email.as_deref().unwrap_or_default(),
        None,
        Vec::new(),
    );
    let webhook = state.service.submit_contact(&submission).await?;

    Ok(Json(SubmitResponse {
        ok: true,
        attachment_ids: None,
        webhook,
    }))
}

/// Decodes the multipart claim form into a submission
///
/// Text-vs-file is decided per part as it is read: a part carrying a
/// filename is a file. A file in a text-only slot, or a bare string in the
/// evidence slot, is ignored; the `policy_certificate` slot accepts either.
async fn decode_claim_form(mut multipart: Multipart) -> Result<ClaimSubmission, ApiError> {
    let mut full_name = String::new();
    let mut email = String::new();
    let mut policy_certificate: Option<FormField> = None;
    let mut evidence: Vec<FileAttachment> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let part = read_part(field).await?;

        match (name.as_str(), part) {
            ("full_name", FormField::Text(value)) => full_name = value,
            ("email", FormField::Text(value)) => email = value,
            ("policy_certificate", part) => policy_certificate = Some(part),
            ("claim_file", FormField::File(file)) => evidence.push(file),
            _ => {}
        }
    }

    Ok(ClaimSubmission::new(
        &full_name,
        &email,
        policy_certificate,
        evidence,
    ))
}

/// Reads one part, tagging it as text or file
async fn read_part(field: Field<'_>) -> Result<FormField, ApiError> {
    if field.file_name().is_some() {
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(FormField::File(FileAttachment::new(
            filename,
            content_type,
            bytes.to_vec(),
        )))
    } else {
        let text = field
            .text()
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(FormField::Text(text))
    }
}
