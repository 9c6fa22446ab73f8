//! Shared error response structures
//!
//! The core crate maps its domain errors into these structures; only the
//! error code and a human-readable summary ever cross the service boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code the routing layer should use
    pub status: u16,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status,
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn with_detail(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        details.insert(key.into(), value);
        self
    }
}

/// Stable error codes shared between the core and the routing layer
pub mod error_codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
    pub const OTP_EXPIRED: &str = "OTP_EXPIRED";
    pub const OTP_MISMATCH: &str = "OTP_MISMATCH";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const NOT_VERIFIED: &str = "NOT_VERIFIED";
    pub const PASSWORD_MISMATCH: &str = "PASSWORD_MISMATCH";
    pub const TOO_MANY_REQUESTS: &str = "TOO_MANY_REQUESTS";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_MALFORMED: &str = "TOKEN_MALFORMED";
    pub const INVALID_TOKEN_TYPE: &str = "INVALID_TOKEN_TYPE";
    pub const EMAIL_DELIVERY_FAILED: &str = "EMAIL_DELIVERY_FAILED";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_creation() {
        let response = ErrorResponse::new(error_codes::NOT_FOUND, "Account not found", 404);
        assert_eq!(response.error, "NOT_FOUND");
        assert_eq!(response.status, 404);
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_detail() {
        let response = ErrorResponse::new(error_codes::OTP_MISMATCH, "Incorrect otp", 400)
            .with_detail("email", serde_json::json!("a@x.com"));
        assert_eq!(response.details.unwrap()["email"], "a@x.com");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new(error_codes::TOO_MANY_REQUESTS, "Kindly retry later", 429);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("TOO_MANY_REQUESTS"));
        assert!(!json.contains("details"));
    }
}
