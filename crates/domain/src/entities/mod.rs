//! Domain entities - Core business objects with identity

mod record;

pub use record::{CreateRecord, Record};
