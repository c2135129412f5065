use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{
    json_kind, looks_like_email, min_chars, not_blank, optional_string, required_string, IssueCode, ValidationErrors,
    ValidationIssue,
};

/// Urgency recorded when the submission does not name one.
pub const DEFAULT_URGENCY: &str = "Regular Service";
/// Status every inquiry starts in.
pub const STATUS_PENDING: &str = "pending";

pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// A stored contact-form submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service_type: String,
    pub description: String,
    pub preferred_date: Option<String>,
    pub urgency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ContactInquiry {
    /// Copy of this record with only `status` replaced.
    pub fn with_status(&self, status: impl Into<String>) -> Self {
        Self { status: status.into(), ..self.clone() }
    }
}

/// What a caller may supply when creating an inquiry.
///
/// `urgency` stays `None` when not given; the store fills in [`DEFAULT_URGENCY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactInquiry {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub service_type: String,
    pub description: String,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
}

impl NewContactInquiry {
    /// Shape-check a decoded request body.
    ///
    /// All problems are reported together. Unknown keys are ignored, which
    /// also drops any caller-supplied `id`, `status` or `createdAt`.
    /// Accepted strings are kept as submitted; whitespace only matters for the
    /// blank checks.
    pub fn from_json(value: &Value) -> Result<Self, ValidationErrors> {
        let Some(obj) = value.as_object() else {
            return Err(ValidationErrors::single(ValidationIssue::body(
                IssueCode::InvalidType,
                format!("Expected object, received {}", json_kind(value)),
            )));
        };

        let mut errors = ValidationErrors::default();

        let name = required_string(obj, "name", &mut errors)
            .filter(|s| not_blank(s, "name", "Name is required", &mut errors));
        let phone = required_string(obj, "phone", &mut errors)
            .filter(|s| not_blank(s, "phone", "Phone number is required", &mut errors));
        let email = optional_string(obj, "email", &mut errors);
        if let Some(e) = &email {
            if !looks_like_email(e.trim()) {
                errors.push(ValidationIssue::new(IssueCode::InvalidString, &["email"], "Please enter a valid email"));
            }
        }
        let service_type = required_string(obj, "serviceType", &mut errors)
            .filter(|s| not_blank(s, "serviceType", "Please select a service type", &mut errors));
        let description = required_string(obj, "description", &mut errors).filter(|s| {
            let msg = "Please describe your issue in detail";
            not_blank(s, "description", msg, &mut errors)
                && min_chars(s, DESCRIPTION_MIN_CHARS, "description", msg, &mut errors)
        });
        let preferred_date = optional_string(obj, "preferredDate", &mut errors);
        let urgency = optional_string(obj, "urgency", &mut errors);

        match (name, phone, service_type, description) {
            (Some(name), Some(phone), Some(service_type), Some(description)) if errors.is_empty() => Ok(Self {
                name,
                phone,
                email,
                service_type,
                description,
                preferred_date,
                urgency,
            }),
            _ => Err(errors),
        }
    }
}
