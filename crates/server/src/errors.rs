use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use models::{IssueCode, ValidationErrors, ValidationIssue};
use service::errors::ServiceError;
use service::inquiry::BODY_REQUIRED;

pub const INVALID_INPUT: &str = "Invalid input data";
pub const INTERNAL: &str = "Internal server error";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// JSON error response: `{ "message": ..., "errors": [...] }`.
/// `errors` is only present for validation failures.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Option<ValidationErrors>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a ValidationErrors>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), errors: None }
    }

    pub fn validation(message: impl Into<String>, errors: ValidationErrors) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into(), errors: Some(errors) }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { message: &self.message, errors: self.errors.as_ref() };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        if let Some(errors) = e.validation_issues() {
            let missing_body = errors.issues().iter().any(|i| i.code == IssueCode::MissingBody);
            let message = if missing_body { BODY_REQUIRED } else { INVALID_INPUT };
            return Self::validation(message, errors.clone());
        }
        match e {
            ServiceError::NotFound(msg) => Self::not_found(msg),
            other => {
                // 仅记录日志，不向客户端泄露内部细节
                error!(error = %other, "request failed");
                Self::internal()
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(error = %rejection, "json body rejected");
        // 语法错误才算 invalid_json，结构不符按 invalid_type 处理
        let code = match &rejection {
            JsonRejection::JsonSyntaxError(_) => IssueCode::InvalidJson,
            _ => IssueCode::InvalidType,
        };
        Self::validation(INVALID_INPUT, ValidationErrors::single(ValidationIssue::body(code, rejection.body_text())))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        debug!(error = %rejection, "path parameter rejected");
        let issue = ValidationIssue::new(IssueCode::InvalidType, &["id"], rejection.body_text());
        Self::validation(INVALID_INPUT, ValidationErrors::single(issue))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("runtime check failed: {0}")]
    Runtime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_status() {
        let v = ValidationErrors::single(ValidationIssue::new(IssueCode::TooSmall, &["description"], "short"));
        let e = JsonApiError::from(ServiceError::Validation(v));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, INVALID_INPUT);
        assert!(e.errors.is_some());

        let e = JsonApiError::from(ServiceError::not_found("inquiry"));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.message, "inquiry not found");

        let e = JsonApiError::from(ServiceError::Storage("disk on fire".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, INTERNAL);
        assert!(e.errors.is_none());
    }

    #[test]
    fn missing_body_keeps_its_own_message() {
        let v = ValidationErrors::single(ValidationIssue::body(IssueCode::MissingBody, BODY_REQUIRED));
        let e = JsonApiError::from(ServiceError::Validation(v));
        assert_eq!(e.message, BODY_REQUIRED);
    }

    #[test]
    fn body_issue_with_same_text_is_still_invalid_input() {
        let v = ValidationErrors::single(ValidationIssue::body(IssueCode::InvalidType, BODY_REQUIRED));
        let e = JsonApiError::from(ServiceError::Validation(v));
        assert_eq!(e.message, INVALID_INPUT);
    }
}
