//! Entity records and input shapes for the site backend.
//!
//! Records serialize with camelCase keys, which is what the frontend reads.
//! Input shapes (`New*`) never carry store-assigned fields.

pub mod contact_inquiry;
pub mod service;
pub mod user;
pub mod validation;

pub use contact_inquiry::{ContactInquiry, NewContactInquiry, DEFAULT_URGENCY, STATUS_PENDING};
pub use service::{NewService, Service};
pub use user::{NewUser, User};
pub use validation::{IssueCode, ValidationErrors, ValidationIssue};
