//! In-memory adapters, used as fakes in tests and for local experiments.

mod record_repo;

pub use record_repo::InMemoryRecordRepo;
