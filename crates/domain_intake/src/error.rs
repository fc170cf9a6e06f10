//! Intake domain errors

use thiserror::Error;

use crate::ports::UpstreamError;

/// Errors that can occur while processing a claim submission
///
/// The validation variants carry the user-facing message; the short
/// machine-readable code is assigned at the API boundary.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Please attach your policy certificate.")]
    MissingPolicy,

    #[error("Please attach at least one evidence photo.")]
    MissingEvidence,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntakeError {
    /// Returns true if this is a validation failure (no upstream call was made)
    pub fn is_validation(&self) -> bool {
        !matches!(self, IntakeError::Upstream(_))
    }
}
