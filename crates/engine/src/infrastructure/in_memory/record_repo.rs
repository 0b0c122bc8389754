use async_trait::async_trait;
use tokio::sync::RwLock;

use notepost_domain::{CreateRecord, Record, RecordId};

use crate::infrastructure::ports::{RecordRepo, RepoError};

/// Vec-backed [`RecordRepo`] that assigns ids the way AUTOINCREMENT does:
/// starting at 1, never reused.
pub struct InMemoryRecordRepo {
    records: RwLock<Vec<Record>>,
}

impl InMemoryRecordRepo {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryRecordRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepo for InMemoryRecordRepo {
    async fn get_all(&self) -> Result<Vec<Record>, RepoError> {
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, input: CreateRecord) -> Result<Record, RepoError> {
        let mut records = self.records.write().await;
        let next_id = records.last().map_or(1, |r| r.id.as_i64() + 1);
        let record = Record::new(RecordId::from_i64(next_id), input.into_message());
        records.push(record.clone());
        Ok(record)
    }
}
