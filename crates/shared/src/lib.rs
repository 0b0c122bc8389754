//! Notepost wire contracts.
//!
//! JSON shapes exchanged over HTTP. Pure data types and serialization, no
//! business logic.

pub mod requests;
pub mod responses;

pub use requests::CreateRecordRequest;
pub use responses::DataResponse;
