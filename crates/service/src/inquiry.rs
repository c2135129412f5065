//! Contact-form intake, independent of the web framework.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use models::{ContactInquiry, IssueCode, NewContactInquiry, ValidationErrors, ValidationIssue};

use crate::errors::ServiceError;
use crate::storage::Storage;

/// Message returned when a creation request has no body.
pub const BODY_REQUIRED: &str = "Request body is required";

/// Decode a raw request body into JSON.
///
/// An empty or whitespace-only body and unparseable JSON are both reported
/// as a single body-level validation issue.
pub fn decode_body(raw: &[u8]) -> Result<Value, ValidationErrors> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationErrors::single(ValidationIssue::body(IssueCode::MissingBody, BODY_REQUIRED)));
    }
    serde_json::from_slice(raw)
        .map_err(|e| ValidationErrors::single(ValidationIssue::body(IssueCode::InvalidJson, format!("Malformed JSON: {e}"))))
}

pub struct InquiryService<S: Storage + ?Sized> {
    store: Arc<S>,
}

impl<S: Storage + ?Sized> Clone for InquiryService<S> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store) }
    }
}

impl<S: Storage + ?Sized> InquiryService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Validate a decoded submission and store it.
    ///
    /// Nothing is written when validation fails.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{inquiry::InquiryService, storage::MemStorage};
    /// let svc = InquiryService::new(Arc::new(MemStorage::new()));
    /// let body = serde_json::json!({
    ///     "name": "A", "phone": "1", "serviceType": "X",
    ///     "description": "a real issue description"
    /// });
    /// let created = tokio_test::block_on(svc.submit(&body)).unwrap();
    /// assert_eq!(created.status, "pending");
    /// assert_eq!(created.urgency, "Regular Service");
    /// ```
    #[instrument(skip(self, body))]
    pub async fn submit(&self, body: &Value) -> Result<ContactInquiry, ServiceError> {
        let input = NewContactInquiry::from_json(body).map_err(|errors| {
            warn!(issues = errors.len(), fields = ?errors.fields(), "inquiry_rejected");
            ServiceError::Validation(errors)
        })?;
        let inquiry = self.store.create_contact_inquiry(input).await?;
        info!(inquiry_id = inquiry.id, service_type = %inquiry.service_type, urgency = %inquiry.urgency, "inquiry_created");
        Ok(inquiry)
    }

    /// [`decode_body`] followed by [`submit`](Self::submit).
    pub async fn submit_raw(&self, raw: &[u8]) -> Result<ContactInquiry, ServiceError> {
        let body = decode_body(raw).map_err(|errors| {
            warn!(error = %errors, "inquiry_body_rejected");
            ServiceError::Validation(errors)
        })?;
        self.submit(&body).await
    }

    pub async fn list(&self) -> Result<Vec<ContactInquiry>, ServiceError> {
        self.store.get_contact_inquiries().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<ContactInquiry>, ServiceError> {
        self.store.get_contact_inquiry(id).await
    }

    /// Move an inquiry to `status`. Any non-blank status is accepted and
    /// stored as given.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: i32, status: &str) -> Result<ContactInquiry, ServiceError> {
        if status.trim().is_empty() {
            return Err(ServiceError::Validation(ValidationErrors::single(ValidationIssue::new(
                IssueCode::TooSmall,
                &["status"],
                "Status is required",
            ))));
        }
        let updated = self
            .store
            .update_contact_inquiry_status(id, status)
            .await?
            .ok_or_else(|| ServiceError::not_found("inquiry"))?;
        info!(inquiry_id = id, status = %updated.status, "inquiry_status_updated");
        Ok(updated)
    }
}
