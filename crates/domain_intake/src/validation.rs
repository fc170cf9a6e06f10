//! Submission validation rules
//!
//! Checks run in a fixed order and the first failure wins: required text
//! fields, then the policy certificate, then evidence files. A field that is
//! empty after trimming counts as missing. Validation never touches the
//! upstream services.

use crate::error::IntakeError;
use crate::submission::ClaimSubmission;

/// Validates a file-attaching claim submission
///
/// Order is fixed: fields -> policy -> evidence.
pub fn validate_claim(submission: &ClaimSubmission) -> Result<(), IntakeError> {
    validate_contact(submission)?;

    if submission.policy_certificate.is_none() {
        return Err(IntakeError::MissingPolicy);
    }

    if submission.evidence.is_empty() {
        return Err(IntakeError::MissingEvidence);
    }

    Ok(())
}

/// Validates the required text fields only (contact/JSON profile)
pub fn validate_contact(submission: &ClaimSubmission) -> Result<(), IntakeError> {
    if submission.full_name.is_empty() || submission.email.is_empty() {
        return Err(IntakeError::MissingFields);
    }
    Ok(())
}
