//! Request bodies accepted by the HTTP API.

use serde::{Deserialize, Serialize};

use notepost_domain::CreateRecord;

/// Body of `POST /data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub message: String,
}

impl From<CreateRecordRequest> for CreateRecord {
    fn from(request: CreateRecordRequest) -> Self {
        CreateRecord::new(request.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_required() {
        let result = serde_json::from_str::<CreateRecordRequest>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn message_must_be_a_string() {
        let result = serde_json::from_str::<CreateRecordRequest>(r#"{"message": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request: CreateRecordRequest =
            serde_json::from_str(r#"{"message": "hi", "id": 99}"#).unwrap();
        assert_eq!(CreateRecord::from(request).message(), "hi");
    }
}
