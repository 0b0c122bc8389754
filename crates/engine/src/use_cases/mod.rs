//! Use cases - User story orchestration.
//!
//! The operations the HTTP layer is allowed to call. Cross-cutting concerns
//! such as authorization or rate limiting would wrap these.

pub mod records;

pub use records::{DataError, DataService, RecordUseCases};

#[cfg(test)]
pub use records::MockDataService;
