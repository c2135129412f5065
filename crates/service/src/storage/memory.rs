use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, error};

use models::{ContactInquiry, NewContactInquiry, NewService, NewUser, Service, User, DEFAULT_URGENCY, STATUS_PENDING};

use super::Storage;
use crate::catalog;
use crate::errors::ServiceError;

/// Monotonic id source for one entity kind. Starts at 1, never reuses.
#[derive(Debug)]
struct IdCounter(i32);

impl IdCounter {
    fn new() -> Self {
        Self(1)
    }

    /// Errors once the id space runs out instead of wrapping around.
    fn next(&mut self) -> Result<i32, ServiceError> {
        let id = self.0;
        self.0 = id.checked_add(1).ok_or_else(|| ServiceError::Storage("id space exhausted".into()))?;
        Ok(id)
    }
}

#[derive(Debug)]
struct Collections {
    users: BTreeMap<i32, User>,
    services: BTreeMap<i32, Service>,
    inquiries: BTreeMap<i32, ContactInquiry>,
    next_user: IdCounter,
    next_service: IdCounter,
    next_inquiry: IdCounter,
}

impl Collections {
    fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            services: BTreeMap::new(),
            inquiries: BTreeMap::new(),
            next_user: IdCounter::new(),
            next_service: IdCounter::new(),
            next_inquiry: IdCounter::new(),
        }
    }

    fn insert_service(&mut self, input: NewService) -> Result<Service, ServiceError> {
        let service = input.with_id(self.next_service.next()?);
        self.services.insert(service.id, service.clone());
        Ok(service)
    }
}

/// In-memory record store. Nothing survives the process.
///
/// All three collections and their counters sit behind one lock, so an id is
/// assigned and its record inserted under the same write guard.
#[derive(Debug)]
pub struct MemStorage {
    inner: RwLock<Collections>,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// Store pre-populated with the fixed service catalog.
    ///
    /// Seeding happens before the value is returned, so no reader can ever
    /// observe an empty catalog.
    pub fn new() -> Self {
        let mut collections = Collections::new();
        for service in catalog::default_services() {
            if let Err(e) = collections.insert_service(service) {
                error!(error = %e, "service catalog seeding stopped");
                break;
            }
        }
        debug!(services = collections.services.len(), "service catalog seeded");
        Self { inner: RwLock::new(collections) }
    }

    /// Store with no services at all.
    pub fn empty() -> Self {
        Self { inner: RwLock::new(Collections::new()) }
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i32) -> Result<Option<User>, ServiceError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, ServiceError> {
        let mut inner = self.inner.write().await;
        // Usernames are supposed to be unique but duplicates are accepted here.
        // Whether a persistent store should reject them is still undecided.
        let user = user.with_id(inner.next_user.next()?);
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_services(&self) -> Result<Vec<Service>, ServiceError> {
        Ok(self.inner.read().await.services.values().cloned().collect())
    }

    async fn get_service(&self, id: i32) -> Result<Option<Service>, ServiceError> {
        Ok(self.inner.read().await.services.get(&id).cloned())
    }

    async fn create_service(&self, service: NewService) -> Result<Service, ServiceError> {
        self.inner.write().await.insert_service(service)
    }

    async fn get_contact_inquiries(&self) -> Result<Vec<ContactInquiry>, ServiceError> {
        Ok(self.inner.read().await.inquiries.values().cloned().collect())
    }

    async fn get_contact_inquiry(&self, id: i32) -> Result<Option<ContactInquiry>, ServiceError> {
        Ok(self.inner.read().await.inquiries.get(&id).cloned())
    }

    async fn create_contact_inquiry(&self, input: NewContactInquiry) -> Result<ContactInquiry, ServiceError> {
        let mut inner = self.inner.write().await;
        let inquiry = ContactInquiry {
            id: inner.next_inquiry.next()?,
            name: input.name,
            phone: input.phone,
            email: input.email,
            service_type: input.service_type,
            description: input.description,
            preferred_date: input.preferred_date,
            urgency: input.urgency.unwrap_or_else(|| DEFAULT_URGENCY.to_string()),
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        };
        inner.inquiries.insert(inquiry.id, inquiry.clone());
        Ok(inquiry)
    }

    async fn update_contact_inquiry_status(&self, id: i32, status: &str) -> Result<Option<ContactInquiry>, ServiceError> {
        let mut inner = self.inner.write().await;
        let Some(current) = inner.inquiries.get(&id) else {
            return Ok(None);
        };
        let updated = current.with_status(status);
        inner.inquiries.insert(id, updated.clone());
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn new_inquiry() -> NewContactInquiry {
        NewContactInquiry {
            name: "A".into(),
            phone: "1".into(),
            email: None,
            service_type: "X".into(),
            description: "a real issue description".into(),
            preferred_date: None,
            urgency: None,
        }
    }

    fn sample_service(n: i32) -> NewService {
        NewService {
            name: format!("Service {n}"),
            description: "desc".into(),
            icon: "fas fa-wrench".into(),
            price_from: n * 100,
            duration: "1 hour".into(),
            category: format!("cat-{n}"),
            whatsapp_message: "Hi".into(),
        }
    }

    #[tokio::test]
    async fn service_ids_are_one_to_n() -> Result<(), anyhow::Error> {
        let store = MemStorage::empty();
        for n in 1..=25 {
            let created = store.create_service(sample_service(n)).await?;
            assert_eq!(created.id, n);
        }
        let ids: Vec<i32> = store.get_services().await?.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn id_counter_stops_at_the_top_of_the_range() {
        let mut ids = IdCounter(i32::MAX - 1);
        assert_eq!(ids.next().unwrap(), i32::MAX - 1);
        assert!(matches!(ids.next(), Err(ServiceError::Storage(_))));
        assert!(matches!(ids.next(), Err(ServiceError::Storage(_))));
    }

    #[tokio::test]
    async fn exhausted_ids_reject_creates_without_writing() -> Result<(), anyhow::Error> {
        let store = MemStorage::new();
        store.inner.write().await.next_inquiry = IdCounter(i32::MAX);
        let err = store.create_contact_inquiry(new_inquiry()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
        assert!(store.get_contact_inquiries().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn new_store_is_seeded_with_six_distinct_categories() -> Result<(), anyhow::Error> {
        let store = MemStorage::new();
        let services = store.get_services().await?;
        assert_eq!(services.len(), 6);
        let categories: HashSet<&str> = services.iter().map(|s| s.category.as_str()).collect();
        let expected: HashSet<&str> =
            ["cooling", "refrigeration", "compressor", "gas", "government", "emergency"].into_iter().collect();
        assert_eq!(categories, expected);
        assert_eq!(store.get_service(1).await?.map(|s| s.category), Some("cooling".to_string()));
        assert!(store.get_service(7).await?.is_none());

        // seeding consumed ids 1..=6
        let next = store.create_service(sample_service(7)).await?;
        assert_eq!(next.id, 7);
        Ok(())
    }

    #[tokio::test]
    async fn create_inquiry_assigns_defaults() -> Result<(), anyhow::Error> {
        let store = MemStorage::new();
        let before = Utc::now();
        let first = store.create_contact_inquiry(new_inquiry()).await?;
        let after = Utc::now();

        assert_eq!(first.id, 1);
        assert_eq!(first.status, STATUS_PENDING);
        assert_eq!(first.urgency, DEFAULT_URGENCY);
        assert!(first.created_at >= before && first.created_at <= after);

        let second = store
            .create_contact_inquiry(NewContactInquiry { urgency: Some("Emergency".into()), ..new_inquiry() })
            .await?;
        assert_eq!(second.id, 2);
        assert_eq!(second.urgency, "Emergency");
        assert_eq!(store.get_contact_inquiries().await?.len(), 2);
        assert_eq!(store.get_contact_inquiry(1).await?, Some(first));
        Ok(())
    }

    #[tokio::test]
    async fn update_status_replaces_only_status() -> Result<(), anyhow::Error> {
        let store = MemStorage::new();
        let created = store.create_contact_inquiry(new_inquiry()).await?;

        let updated = store.update_contact_inquiry_status(created.id, "resolved").await?.unwrap();
        assert_eq!(updated, ContactInquiry { status: "resolved".into(), ..created.clone() });
        assert_eq!(store.get_contact_inquiry(created.id).await?, Some(updated));
        Ok(())
    }

    #[tokio::test]
    async fn update_status_unknown_id_is_absent_and_changes_nothing() -> Result<(), anyhow::Error> {
        let store = MemStorage::new();
        let created = store.create_contact_inquiry(new_inquiry()).await?;
        let snapshot = store.get_contact_inquiries().await?;

        assert!(store.update_contact_inquiry_status(999, "resolved").await?.is_none());
        assert_eq!(store.get_contact_inquiries().await?, snapshot);
        assert_eq!(store.get_contact_inquiry(created.id).await?.unwrap().status, STATUS_PENDING);
        Ok(())
    }

    #[tokio::test]
    async fn user_lookup_by_username() -> Result<(), anyhow::Error> {
        let store = MemStorage::new();
        assert!(store.get_user_by_username("admin").await?.is_none());

        let user = store.create_user(NewUser { username: "admin".into(), password: "pw".into() }).await?;
        assert_eq!(user.id, 1);
        assert_eq!(store.get_user_by_username("admin").await?, Some(user.clone()));
        assert_eq!(store.get_user(1).await?, Some(user));
        assert!(store.get_user(2).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_is_accepted_and_first_match_wins() -> Result<(), anyhow::Error> {
        let store = MemStorage::empty();
        let first = store.create_user(NewUser { username: "sam".into(), password: "a".into() }).await?;
        let second = store.create_user(NewUser { username: "sam".into(), password: "b".into() }).await?;
        assert_eq!(second.id, 2);
        assert_eq!(store.get_user_by_username("sam").await?, Some(first));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() -> Result<(), anyhow::Error> {
        let store = std::sync::Arc::new(MemStorage::new());
        let mut handles = Vec::new();
        for _ in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.create_contact_inquiry(new_inquiry()).await }));
        }
        let mut ids = HashSet::new();
        for h in handles {
            ids.insert(h.await??.id);
        }
        assert_eq!(ids, (1..=20).collect::<HashSet<_>>());
        Ok(())
    }
}
