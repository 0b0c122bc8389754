//! Repository port traits for database access.

use async_trait::async_trait;
use notepost_domain::{CreateRecord, Record};

use super::error::RepoError;

// =============================================================================
// Record Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepo: Send + Sync {
    /// Every stored record, ascending by id. Empty store yields an empty Vec.
    async fn get_all(&self) -> Result<Vec<Record>, RepoError>;

    /// Insert one record and return it with the id storage assigned.
    async fn create(&self, input: CreateRecord) -> Result<Record, RepoError>;
}
