//! Notepost Engine library.
//!
//! HTTP service that lists and creates records.
//!
//! ## Structure
//!
//! - `api/` - HTTP entry points (transport)
//! - `use_cases/` - Operations exposed to transport (application service)
//! - `entities/` - Record operations and future business rules (domain service)
//! - `infrastructure/` - Configuration, storage ports and adapters (repository)
//! - `app` - Application composition
//! - `server` - Process bootstrap

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod server;
pub mod use_cases;

pub use app::App;
