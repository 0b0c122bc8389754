//! Response envelopes returned by the HTTP API.

use serde::{Deserialize, Serialize};

/// Every successful response wraps its payload as `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notepost_domain::{Record, RecordId};

    #[test]
    fn wraps_single_record() {
        let body = DataResponse::new(Record::new(RecordId::from_i64(3), "c"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"data": {"id": 3, "message": "c"}}));
    }

    #[test]
    fn wraps_empty_list_as_array() {
        let body: DataResponse<Vec<Record>> = DataResponse::new(Vec::new());
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"data":[]}"#);
    }
}
