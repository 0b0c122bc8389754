//! SQLite persistence: connection management and repository adapters.

mod connection;
mod record_repository;

pub use connection::Database;
pub use record_repository::SqliteRecordRepo;
