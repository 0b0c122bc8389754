//! Infrastructure implementations.
//!
//! Configuration plus port trait implementations for storage.

pub mod config;
pub mod in_memory;
pub mod persistence;
pub mod ports;
