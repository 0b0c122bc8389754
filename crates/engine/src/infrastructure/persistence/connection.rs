//! SQLite connection management

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;

use crate::infrastructure::config::DatabaseConfig;
use crate::infrastructure::ports::RepoError;

/// Schema migrations embedded from `crates/engine/migrations`.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Shared SQLite connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| RepoError::database("connect", e))?
            .create_if_missing(true);
        if !config.log_statements {
            options = options.disable_statement_logging();
        }

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
        // An in-memory database lives only as long as one of its connections.
        if config.is_in_memory() {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| RepoError::database("connect", e))?;
        tracing::info!(
            url = %config.url,
            max_connections = config.max_connections,
            "Connected to SQLite"
        );

        Ok(Self { pool })
    }

    /// Apply any pending schema migrations.
    pub async fn migrate(&self) -> Result<(), RepoError> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| RepoError::database("migrate", e))?;
        tracing::info!(
            migrations = MIGRATOR.iter().count(),
            "Database schema is up to date"
        );
        Ok(())
    }

    /// Get a handle to the pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
