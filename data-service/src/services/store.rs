use crate::models::Record;
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::Arc;

/// The two store operations the HTTP layer performs.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, record: &Record) -> Result<(), AppError>;
    /// Every record in the collection, without the store's identifier.
    async fn find_all(&self) -> Result<Vec<Record>, AppError>;
}

/// Result of the startup bootstrap, shared read-only by all handlers.
#[derive(Clone)]
pub enum StoreHandle {
    Connected(Arc<dyn RecordStore>),
    Unavailable,
}

impl StoreHandle {
    pub fn connected(store: impl RecordStore + 'static) -> Self {
        StoreHandle::Connected(Arc::new(store))
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, StoreHandle::Connected(_))
    }

    /// Returns the store, or the fixed "not connected" error.
    pub fn store(&self) -> Result<&dyn RecordStore, AppError> {
        match self {
            StoreHandle::Connected(store) => Ok(store.as_ref()),
            StoreHandle::Unavailable => Err(AppError::StoreUnavailable),
        }
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreHandle::Connected(_) => f.write_str("StoreHandle::Connected"),
            StoreHandle::Unavailable => f.write_str("StoreHandle::Unavailable"),
        }
    }
}
