//! SQLite-backed record storage.

use async_trait::async_trait;
use sqlx::SqlitePool;

use notepost_domain::{CreateRecord, Record, RecordId};

use crate::infrastructure::ports::{RecordRepo, RepoError};

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: i64,
    message: String,
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record::new(RecordId::from_i64(row.id), row.message)
    }
}

/// SQLite implementation of [`RecordRepo`].
///
/// Expects the `records` table to exist already; see `Database::migrate`.
pub struct SqliteRecordRepo {
    pool: SqlitePool,
}

impl SqliteRecordRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepo for SqliteRecordRepo {
    async fn get_all(&self) -> Result<Vec<Record>, RepoError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, message FROM records ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("list_records", e))?;

        Ok(rows.into_iter().map(Record::from).collect())
    }

    async fn create(&self, input: CreateRecord) -> Result<Record, RepoError> {
        // RETURNING hands back the AUTOINCREMENT id from the same statement.
        let row = sqlx::query_as::<_, RecordRow>(
            "INSERT INTO records (message) VALUES (?) RETURNING id, message",
        )
        .bind(input.into_message())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database("create_record", e))?;

        Ok(row.into())
    }
}
