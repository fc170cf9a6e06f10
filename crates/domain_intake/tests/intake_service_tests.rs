//! Intake pipeline tests
//!
//! Exercise the IntakeService orchestration against in-memory fakes: upload
//! ordering, abort-on-failure, and the no-upstream-call guarantee for
//! validation failures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use domain_intake::{
    AttachmentStore, ClaimNotifier, ClaimSubmission, FileAttachment, FormField, IntakeError,
    IntakeService, UpstreamError, WebhookPayload,
};

/// Records stored files and mints ids derived from the filename
#[derive(Default)]
struct RecordingStore {
    stored: Mutex<Vec<String>>,
    fail_on: Option<String>,
}

#[async_trait]
impl AttachmentStore for RecordingStore {
    async fn store(&self, file: &FileAttachment) -> Result<String, UpstreamError> {
        if self.fail_on.as_deref() == Some(file.filename.as_str()) {
            return Err(UpstreamError::StorageInit {
                status: 502,
                body: "storage down".to_string(),
            });
        }
        self.stored.lock().unwrap().push(file.filename.clone());
        Ok(format!("att-{}", file.filename))
    }
}

/// Counts dispatches and captures the last payload
#[derive(Default)]
struct RecordingNotifier {
    calls: AtomicUsize,
    last_payload: Mutex<Option<Value>>,
}

#[async_trait]
impl ClaimNotifier for RecordingNotifier {
    async fn notify(&self, payload: &WebhookPayload) -> Result<Value, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = Some(serde_json::to_value(payload).unwrap());
        Ok(json!({ "received": true, "task": "queued" }))
    }
}

fn service(
    store: Arc<RecordingStore>,
    notifier: Arc<RecordingNotifier>,
) -> IntakeService {
    IntakeService::new(store, notifier, Uuid::nil(), "process_claim")
}

fn photo(name: &str) -> FileAttachment {
    FileAttachment::new(Some(name.to_string()), Some("image/jpeg".to_string()), vec![0xFF])
}

fn claim_with_policy_file(evidence: Vec<FileAttachment>) -> ClaimSubmission {
    let policy = FileAttachment::new(
        Some("policy.pdf".to_string()),
        Some("application/pdf".to_string()),
        vec![0x25],
    );
    ClaimSubmission::new(
        "Jane Doe",
        "jane@example.com",
        Some(FormField::File(policy)),
        evidence,
    )
}

#[tokio::test]
async fn attachment_ids_preserve_submit_order() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let svc = service(store.clone(), notifier.clone());

    let submission = claim_with_policy_file(vec![photo("a.jpg"), photo("b.jpg")]);
    let outcome = svc.submit_claim(&submission).await.unwrap();

    assert_eq!(
        outcome.attachment_ids,
        vec!["att-policy.pdf", "att-a.jpg", "att-b.jpg"]
    );
    assert_eq!(outcome.webhook, json!({ "received": true, "task": "queued" }));
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn all_uploads_complete_before_webhook() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let svc = service(store.clone(), notifier.clone());

    let submission = claim_with_policy_file(vec![photo("a.jpg"), photo("b.jpg"), photo("c.jpg")]);
    svc.submit_claim(&submission).await.unwrap();

    assert_eq!(store.stored.lock().unwrap().len(), 4);
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn upload_failure_aborts_before_webhook() {
    let store = Arc::new(RecordingStore {
        fail_on: Some("b.jpg".to_string()),
        ..Default::default()
    });
    let notifier = Arc::new(RecordingNotifier::default());
    let svc = service(store, notifier.clone());

    let submission = claim_with_policy_file(vec![photo("a.jpg"), photo("b.jpg")]);
    let err = svc.submit_claim(&submission).await.unwrap_err();

    assert!(err.to_string().contains("502"));
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn validation_failure_makes_no_upstream_calls() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let svc = service(store.clone(), notifier.clone());

    let submission = ClaimSubmission::new("", "", None, vec![photo("a.jpg")]);
    let err = svc.submit_claim(&submission).await.unwrap_err();

    assert!(matches!(err, IntakeError::MissingFields));
    assert!(store.stored.lock().unwrap().is_empty());
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn contact_flow_uploads_nothing() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let svc = service(store.clone(), notifier.clone());

    let submission = ClaimSubmission::new("Jane Doe", "jane@example.com", None, vec![]);
    let webhook = svc.submit_contact(&submission).await.unwrap();

    assert_eq!(webhook["received"], true);
    assert!(store.stored.lock().unwrap().is_empty());

    let payload = notifier.last_payload.lock().unwrap().clone().unwrap();
    assert!(payload["payload"].get("subject").is_none());
    assert_eq!(payload["payload"]["customer_name"], "Jane Doe");
}
