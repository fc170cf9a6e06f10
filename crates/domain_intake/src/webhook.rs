//! Webhook payload construction
//!
//! The downstream task system receives one fixed-shape payload per
//! submission: a trigger id, a task type tag, and the customer data. The
//! subject line only appears in the file-attaching flow.

use serde::Serialize;
use uuid::Uuid;

use crate::submission::ClaimSubmission;

/// Subject line prefix for file-attaching claim submissions
const CLAIM_SUBJECT_PREFIX: &str = "Car Insurance Claim";

/// The body POSTed to the task webhook
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub trigger_id: Uuid,
    pub task_type: String,
    pub payload: ClaimNotification,
}

/// Customer data carried inside the webhook payload
#[derive(Debug, Clone, Serialize)]
pub struct ClaimNotification {
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub customer_name: String,
}

impl WebhookPayload {
    /// Payload for the file-attaching claim flow, with a derived subject line
    pub fn for_claim(trigger_id: Uuid, task_type: &str, submission: &ClaimSubmission) -> Self {
        Self {
            trigger_id,
            task_type: task_type.to_string(),
            payload: ClaimNotification {
                customer_email: submission.email.clone(),
                subject: Some(claim_subject(&submission.full_name)),
                customer_name: submission.full_name.clone(),
            },
        }
    }

    /// Payload for the contact-only flow (no subject)
    pub fn for_contact(trigger_id: Uuid, task_type: &str, submission: &ClaimSubmission) -> Self {
        Self {
            trigger_id,
            task_type: task_type.to_string(),
            payload: ClaimNotification {
                customer_email: submission.email.clone(),
                subject: None,
                customer_name: submission.full_name.clone(),
            },
        }
    }
}

/// Derives the claim subject line from the customer name
fn claim_subject(full_name: &str) -> String {
    format!("{CLAIM_SUBJECT_PREFIX} - {full_name}")
        .trim()
        .to_string()
}
