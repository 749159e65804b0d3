use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::activity::ActivityRecord};

/// Store for per-account activity events
#[async_trait]
pub trait ActivityRepository {
    /// Insert a single record. The store owns it from here on; nothing reads it back.
    async fn insert(&self, record: &ActivityRecord) -> Result<(), RepositoryError>;
}
