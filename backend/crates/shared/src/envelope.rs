//! JSON Response Envelope
//!
//! Every successful body is wrapped as `{"data": ...}` and every error as
//! `{"error": "..."}`.

use serde::Serialize;

/// Success envelope
#[derive(Debug, Clone, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error envelope
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_envelope_shape() {
        let json = serde_json::to_value(Data::new(serde_json::json!({ "id": 1 }))).unwrap();
        assert_eq!(json, serde_json::json!({ "data": { "id": 1 } }));
    }

    #[test]
    fn test_error_envelope_shape() {
        let json = serde_json::to_value(ErrorBody { error: "not found" }).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "not found" }));
    }
}
