//! Record entity - the one thing notepost stores
//!
//! A record is created once and never changed or removed. The storage engine
//! assigns `id`; `message` is kept exactly as submitted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// A persisted message with its storage-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub message: String,
}

impl Record {
    pub fn new(id: RecordId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record<{} {}>", self.id, self.message)
    }
}

/// Input for creating a record. Carries no id; storage assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecord {
    message: String,
}

impl CreateRecord {
    /// No message rules are enforced yet; empty and whitespace-only messages
    /// are accepted and stored untouched.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
