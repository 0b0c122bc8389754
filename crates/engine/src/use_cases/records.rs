//! Record use cases exposed to transport.

use std::sync::Arc;

use async_trait::async_trait;
use notepost_domain::{CreateRecord, Record};

use crate::entities::RecordService;
use crate::infrastructure::ports::RepoError;

/// Operations available to the HTTP API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataService: Send + Sync {
    async fn create_data(&self, input: CreateRecord) -> Result<Record, DataError>;
    async fn get_all_data(&self) -> Result<Vec<Record>, DataError>;
}

/// Single implementation of [`DataService`], delegating to the record entity.
pub struct RecordUseCases {
    records: Arc<dyn RecordService>,
}

impl RecordUseCases {
    pub fn new(records: Arc<dyn RecordService>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl DataService for RecordUseCases {
    async fn create_data(&self, input: CreateRecord) -> Result<Record, DataError> {
        Ok(self.records.create(input).await?)
    }

    async fn get_all_data(&self) -> Result<Vec<Record>, DataError> {
        Ok(self.records.get_all().await?)
    }
}

/// Errors that can occur during record use cases.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error(transparent)]
    Repo(#[from] RepoError),
}
