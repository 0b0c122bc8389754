//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type. They depend on
//! repository ports and are where business rules for the entity belong.

pub mod records;

pub use records::{RecordService, Records};

#[cfg(test)]
pub use records::MockRecordService;
