//! Claim submissions and the intake pipeline
//!
//! A [`ClaimSubmission`] is built from one decoded request, validated, and
//! run through [`IntakeService`]. All uploads for a submission go out as a
//! single concurrent batch; the webhook fires only after every upload has
//! succeeded, and any failure aborts the whole submission.

use std::sync::Arc;

use futures::future;
use serde_json::Value;
use uuid::Uuid;

use crate::error::IntakeError;
use crate::ports::{AttachmentStore, ClaimNotifier};
use crate::validation;
use crate::webhook::WebhookPayload;

/// Fallback filename for parts that arrive without one
pub const DEFAULT_FILENAME: &str = "insurance-claim-photo";

/// Fallback content type for parts that arrive without one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A single uploaded file, owned by the request that carried it
#[derive(Debug, Clone)]
pub struct FileAttachment {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    /// Creates an attachment, applying fallbacks for a missing filename or
    /// content type
    pub fn new(
        filename: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            content_type: content_type
                .filter(|ct| !ct.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            bytes,
        }
    }
}

/// A decoded form part, tagged once at parse time
///
/// The decoder decides text-vs-file when it reads the part (a part with a
/// filename is a file); everything downstream matches on the variant instead
/// of re-inspecting the value.
#[derive(Debug, Clone)]
pub enum FormField {
    Text(String),
    File(FileAttachment),
}

/// The policy certificate slot accepts either a reference string or a file
#[derive(Debug, Clone)]
pub enum PolicyCertificate {
    Reference(String),
    File(FileAttachment),
}

/// One claim intake request's worth of customer data
///
/// Text fields are trimmed at construction; a field that is empty after
/// trimming is treated as absent by validation.
#[derive(Debug, Clone)]
pub struct ClaimSubmission {
    pub full_name: String,
    pub email: String,
    pub policy_certificate: Option<PolicyCertificate>,
    pub evidence: Vec<FileAttachment>,
}

impl ClaimSubmission {
    pub fn new(
        full_name: &str,
        email: &str,
        policy_certificate: Option<FormField>,
        evidence: Vec<FileAttachment>,
    ) -> Self {
        let policy_certificate = policy_certificate.and_then(|field| match field {
            FormField::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(PolicyCertificate::Reference(text.to_string()))
                }
            }
            FormField::File(file) => Some(PolicyCertificate::File(file)),
        });

        Self {
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            policy_certificate,
            evidence,
        }
    }

    /// Files to upload, policy certificate first, then evidence in submit order
    pub fn upload_batch(&self) -> Vec<&FileAttachment> {
        let mut batch = Vec::with_capacity(self.evidence.len() + 1);
        if let Some(PolicyCertificate::File(file)) = &self.policy_certificate {
            batch.push(file);
        }
        batch.extend(self.evidence.iter());
        batch
    }
}

/// Result of a successful submission
///
/// `attachment_ids` preserves submit order (policy certificate first when it
/// was a file); `webhook` is the downstream response body, unmodified.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub attachment_ids: Vec<String>,
    pub webhook: Value,
}

/// Runs submissions through validation, upload, and webhook dispatch
///
/// Holds the webhook identity (trigger id and task type) from configuration
/// plus the two upstream ports. Cheap to clone; shared across requests.
#[derive(Clone)]
pub struct IntakeService {
    store: Arc<dyn AttachmentStore>,
    notifier: Arc<dyn ClaimNotifier>,
    trigger_id: Uuid,
    task_type: String,
}

impl IntakeService {
    pub fn new(
        store: Arc<dyn AttachmentStore>,
        notifier: Arc<dyn ClaimNotifier>,
        trigger_id: Uuid,
        task_type: impl Into<String>,
    ) -> Self {
        Self {
            store,
            notifier,
            trigger_id,
            task_type: task_type.into(),
        }
    }

    /// Processes a file-attaching claim submission
    ///
    /// Validates (fields, then policy, then evidence; first failure wins),
    /// issues every upload in one concurrent batch, and dispatches the
    /// webhook once all of them succeed.
    pub async fn submit_claim(
        &self,
        submission: &ClaimSubmission,
    ) -> Result<SubmissionOutcome, IntakeError> {
        validation::validate_claim(submission)?;

        let batch = submission.upload_batch();
        tracing::debug!(files = batch.len(), "uploading attachment batch");

        let uploads = batch.into_iter().map(|file| self.store.store(file));
        let attachment_ids = future::try_join_all(uploads).await?;

        let payload =
            WebhookPayload::for_claim(self.trigger_id, &self.task_type, submission);
        let webhook = self.notifier.notify(&payload).await?;

        tracing::info!(
            attachments = attachment_ids.len(),
            "claim submission processed"
        );

        Ok(SubmissionOutcome {
            attachment_ids,
            webhook,
        })
    }

    /// Processes a contact-only submission (JSON profile, no files)
    ///
    /// Validates the text fields and dispatches the webhook; returns the
    /// downstream response body.
    pub async fn submit_contact(
        &self,
        submission: &ClaimSubmission,
    ) -> Result<Value, IntakeError> {
        validation::validate_contact(submission)?;

        let payload =
            WebhookPayload::for_contact(self.trigger_id, &self.task_type, submission);
        let webhook = self.notifier.notify(&payload).await?;

        tracing::info!("contact submission processed");
        Ok(webhook)
    }
}
