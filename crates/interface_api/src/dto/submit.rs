//! Submit DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-profile request body
///
/// Absent or null fields decode as `None`; validation turns those into a
/// `missing_fields` rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Successful submit response
///
/// `attachment_ids` is present only in the multipart profile and preserves
/// submit order; `webhook` is the upstream response body passed through
/// unmodified.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_ids: Option<Vec<String>>,
    pub webhook: Value,
}
