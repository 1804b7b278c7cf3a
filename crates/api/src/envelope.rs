//! Success/error response envelopes.
//!
//! Validation failures are part of the API's normal vocabulary: success and
//! failure payloads both travel with HTTP 200, distinguished by the
//! `success` flag. Transport-level problems (unknown routes, malformed query
//! strings) keep axum's own status codes.

use axum::Json;
use serde::Serialize;
use serde_json::{Value, json};

/// Wraps a payload in the success envelope.
pub fn success(data: impl Serialize) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": data,
    }))
}

/// Wraps a machine-readable code, message, and details in the failure
/// envelope.
pub fn failure(code: &str, message: impl Into<String>, details: impl Into<String>) -> Json<Value> {
    Json(json!({
        "success": false,
        "error": {
            "code": code,
            "message": message.into(),
            "details": details.into(),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let Json(value) = success(json!({"answer": 42}));
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["answer"], 42);
    }

    #[test]
    fn test_failure_envelope_shape() {
        let Json(value) = failure("INVALID_AMOUNT", "Amount must be positive", "details here");
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "INVALID_AMOUNT");
        assert_eq!(value["error"]["message"], "Amount must be positive");
        assert_eq!(value["error"]["details"], "details here");
    }
}
