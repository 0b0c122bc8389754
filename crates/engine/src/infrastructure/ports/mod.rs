//! Port traits for infrastructure boundaries.
//!
//! Storage is reached only through these traits so the SQLite adapter can be
//! swapped for the in-memory one (or a mock) in tests.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::RecordRepo;

#[cfg(test)]
pub use repos::MockRecordRepo;
