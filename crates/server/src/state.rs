use std::sync::Arc;

use configs::BusinessConfig;
use service::inquiry::InquiryService;
use service::storage::{MemStorage, Storage};

/// Everything a handler needs, built once and shared through axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub inquiries: InquiryService<dyn Storage>,
    pub business: BusinessConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>, business: BusinessConfig) -> Self {
        let inquiries = InquiryService::new(Arc::clone(&store));
        Self { store, inquiries, business }
    }

    /// Fresh seeded in-memory store with the given business details.
    pub fn in_memory(business: BusinessConfig) -> Self {
        Self::new(Arc::new(MemStorage::new()), business)
    }
}
