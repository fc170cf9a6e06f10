//! Claim Intake Domain
//!
//! This crate implements the request-scoped claim intake pipeline: a decoded
//! submission is validated, its files are pushed to attachment storage, and a
//! webhook notifies the downstream task system.
//!
//! # Pipeline
//!
//! ```text
//! ClaimSubmission -> validate -> upload batch (concurrent) -> webhook -> SubmissionOutcome
//! ```
//!
//! Nothing here outlives a single request. The upstream integrations are
//! reached through the port traits in [`ports`], so the pipeline can be
//! exercised against in-memory fakes.

pub mod error;
pub mod ports;
pub mod submission;
pub mod validation;
pub mod webhook;

pub use error::IntakeError;
pub use ports::{AttachmentStore, ClaimNotifier, UpstreamError};
pub use submission::{
    ClaimSubmission, FileAttachment, FormField, IntakeService, PolicyCertificate,
    SubmissionOutcome,
};
pub use webhook::{ClaimNotification, WebhookPayload};
