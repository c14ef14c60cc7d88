//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Standard error response structure handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message (localized)
    pub message: String,

    /// Additional error details (kind, field, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }

    /// Look up a detail by key
    pub fn detail(&self, key: &str) -> Option<&serde_json::Value> {
        self.details.as_ref().and_then(|details| details.get(key))
    }
}

/// Error codes used when a normalized error carries no provider code
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const AUTHENTICATION_ERROR: &str = "AUTHENTICATION_ERROR";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}

/// Configuration and startup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment: {value}")]
    InvalidEnvironment { value: String },

    #[error("Invalid boolean for {key}: {value}")]
    InvalidFlag { key: String, value: String },

    #[error("Invalid log format: {value}")]
    InvalidLogFormat { value: String },

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("Tracing subscriber already initialised: {reason}")]
    SubscriberInit { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_add_detail() {
        let response = ErrorResponse::new("form_code_incorrect", "El código es incorrecto.")
            .add_detail("kind", "unknown")
            .add_detail("field", "code");

        assert_eq!(response.error, "form_code_incorrect");
        assert_eq!(response.detail("kind"), Some(&serde_json::json!("unknown")));
        assert_eq!(response.detail("field"), Some(&serde_json::json!("code")));
        assert!(response.detail("missing").is_none());
    }

    #[test]
    fn test_error_response_serialization_skips_empty_details() {
        let response = ErrorResponse::new(error_codes::UNKNOWN_ERROR, "Error inesperado");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "UNKNOWN_ERROR");
        assert_eq!(json["message"], "Error inesperado");
        assert!(json.get("details").is_none());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_config_error_messages() {
        let error = ConfigError::InvalidFlag {
            key: "ERROR_DIAGNOSTICS".to_string(),
            value: "maybe".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid boolean for ERROR_DIAGNOSTICS: maybe");

        let error = ConfigError::InvalidEnvironment { value: "qa".to_string() };
        assert!(error.to_string().contains("qa"));
    }
}
