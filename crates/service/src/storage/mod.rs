//! Record store abstraction.
//!
//! `Storage` is the capability the rest of the backend talks to; `MemStorage`
//! is the process-local variant. A database-backed variant would implement
//! the same trait and surface its I/O failures as `ServiceError::Storage`.

pub mod memory;

use async_trait::async_trait;
use models::{ContactInquiry, NewContactInquiry, NewService, NewUser, Service, User};

use crate::errors::ServiceError;

pub use memory::MemStorage;

/// Lookups return `Ok(None)` for unknown ids; a miss is never an error.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: i32) -> Result<Option<User>, ServiceError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, ServiceError>;
    async fn create_user(&self, user: NewUser) -> Result<User, ServiceError>;

    async fn get_services(&self) -> Result<Vec<Service>, ServiceError>;
    async fn get_service(&self, id: i32) -> Result<Option<Service>, ServiceError>;
    async fn create_service(&self, service: NewService) -> Result<Service, ServiceError>;

    async fn get_contact_inquiries(&self) -> Result<Vec<ContactInquiry>, ServiceError>;
    async fn get_contact_inquiry(&self, id: i32) -> Result<Option<ContactInquiry>, ServiceError>;
    /// Assigns id, `status = "pending"`, `created_at = now` and the default urgency.
    async fn create_contact_inquiry(&self, inquiry: NewContactInquiry) -> Result<ContactInquiry, ServiceError>;
    /// Replace only `status`; `Ok(None)` and no change when `id` is unknown.
    async fn update_contact_inquiry_status(&self, id: i32, status: &str) -> Result<Option<ContactInquiry>, ServiceError>;
}
