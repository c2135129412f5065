//! Shape checks for inbound JSON.
//!
//! Issues are collected rather than short-circuited so a form can highlight
//! every bad field at once. The serialized form (`code`, `path`, `message`)
//! is what the intake endpoint returns under `errors`.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Field missing, `null` where a value is required, or wrong JSON type.
    InvalidType,
    /// String shorter than the field's minimum.
    TooSmall,
    /// String present but not in the expected format.
    InvalidString,
    /// Body could not be parsed as JSON at all.
    InvalidJson,
    /// No body, or only whitespace.
    MissingBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    /// Field path; empty for problems with the body as a whole.
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(code: IssueCode, path: &[&str], message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.iter().map(|p| p.to_string()).collect(),
            message: message.into(),
        }
    }

    /// Issue about the body as a whole.
    pub fn body(code: IssueCode, message: impl Into<String>) -> Self {
        Self::new(code, &[], message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    pub fn single(issue: ValidationIssue) -> Self {
        Self(vec![issue])
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.0.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    /// Top-level field names that have at least one issue, in report order.
    pub fn fields(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for issue in &self.0 {
            if let Some(f) = issue.path.first() {
                if !out.contains(&f.as_str()) {
                    out.push(f);
                }
            }
        }
        out
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            if issue.path.is_empty() {
                write!(f, "{}", issue.message)?;
            } else {
                write!(f, "{}: {}", issue.path.join("."), issue.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require `field` to be a JSON string. Missing and `null` both count as missing.
/// The string comes back exactly as submitted.
pub(crate) fn required_string(obj: &Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            errors.push(ValidationIssue::new(IssueCode::InvalidType, &[field], "Required"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(ValidationIssue::new(
                IssueCode::InvalidType,
                &[field],
                format!("Expected string, received {}", json_kind(other)),
            ));
            None
        }
    }
}

/// Optional string; missing, `null` and blank all collapse to `None`.
/// Anything else is returned untouched.
pub(crate) fn optional_string(obj: &Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(ValidationIssue::new(
                IssueCode::InvalidType,
                &[field],
                format!("Expected string, received {}", json_kind(other)),
            ));
            None
        }
    }
}

/// Record a `too_small` issue if `value` is empty or whitespace only.
pub(crate) fn not_blank(value: &str, field: &str, message: &str, errors: &mut ValidationErrors) -> bool {
    if !value.trim().is_empty() {
        return true;
    }
    errors.push(ValidationIssue::new(IssueCode::TooSmall, &[field], message));
    false
}

/// Record a `too_small` issue unless `value` has at least `min` characters.
pub(crate) fn min_chars(value: &str, min: usize, field: &str, message: &str, errors: &mut ValidationErrors) -> bool {
    if value.chars().count() >= min {
        return true;
    }
    errors.push(ValidationIssue::new(IssueCode::TooSmall, &[field], message));
    false
}

/// Loose address check: `local@domain.tld`, no whitespace.
pub fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("a b@c.co"));
        assert!(!looks_like_email("a@b..co"));
    }

    #[test]
    fn display_joins_issues_with_paths() {
        let mut errs = ValidationErrors::default();
        errs.push(ValidationIssue::new(IssueCode::InvalidType, &["name"], "Required"));
        errs.push(ValidationIssue::body(IssueCode::InvalidJson, "bad body"));
        assert_eq!(errs.to_string(), "name: Required; bad body");
    }

    #[test]
    fn serializes_as_plain_array() {
        let errs = ValidationErrors::single(ValidationIssue::new(IssueCode::TooSmall, &["description"], "short"));
        assert_eq!(
            serde_json::to_value(&errs).unwrap(),
            json!([{ "code": "too_small", "path": ["description"], "message": "short" }])
        );
    }

    #[test]
    fn strings_come_back_as_submitted() {
        let body = json!({ "name": "  Kabelo ", "email": " a@b.co", "blank": "   " });
        let obj = body.as_object().unwrap();
        let mut errs = ValidationErrors::default();
        assert_eq!(required_string(obj, "name", &mut errs).as_deref(), Some("  Kabelo "));
        assert_eq!(optional_string(obj, "email", &mut errs).as_deref(), Some(" a@b.co"));
        assert_eq!(optional_string(obj, "blank", &mut errs), None);
        assert!(errs.is_empty());
    }

    #[test]
    fn blank_check_ignores_surrounding_whitespace() {
        let mut errs = ValidationErrors::default();
        assert!(!not_blank(" \t\n", "name", "Name is required", &mut errs));
        assert!(not_blank(" x ", "name", "Name is required", &mut errs));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs.issues()[0].code, IssueCode::TooSmall);
    }

    #[test]
    fn missing_body_code_name() {
        assert_eq!(serde_json::to_value(IssueCode::MissingBody).unwrap(), json!("missing_body"));
    }

    #[test]
    fn fields_are_deduplicated() {
        let mut errs = ValidationErrors::default();
        errs.push(ValidationIssue::new(IssueCode::InvalidType, &["phone"], "Required"));
        errs.push(ValidationIssue::new(IssueCode::TooSmall, &["phone"], "short"));
        errs.push(ValidationIssue::new(IssueCode::TooSmall, &["name"], "short"));
        assert_eq!(errs.fields(), vec!["phone", "name"]);
    }
}
