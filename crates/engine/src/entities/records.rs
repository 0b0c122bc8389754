//! Record entity operations.
//!
//! Both operations delegate straight to storage. Message rules (length limits,
//! normalization, ...) would go here, never in transport or storage.

use std::sync::Arc;

use async_trait::async_trait;
use notepost_domain::{CreateRecord, Record};

use crate::infrastructure::ports::{RecordRepo, RepoError};

/// Domain-level record operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Record>, RepoError>;
    async fn create(&self, input: CreateRecord) -> Result<Record, RepoError>;
}

/// Record entity operations backed by a [`RecordRepo`].
pub struct Records {
    repo: Arc<dyn RecordRepo>,
}

impl Records {
    pub fn new(repo: Arc<dyn RecordRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RecordService for Records {
    async fn get_all(&self) -> Result<Vec<Record>, RepoError> {
        self.repo.get_all().await
    }

    async fn create(&self, input: CreateRecord) -> Result<Record, RepoError> {
        self.repo.create(input).await
    }
}
