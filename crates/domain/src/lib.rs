//! Notepost domain types.
//!
//! The single persisted entity (`Record`), its identifier, and the input used
//! to create one. No storage or transport concerns live here.

pub mod entities;
pub mod ids;

pub use entities::{CreateRecord, Record};
pub use ids::RecordId;
