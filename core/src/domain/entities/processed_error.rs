//! The normalized error handed to calling code and the UI layer.

use an_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RawError;

/// User-facing classification of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Validation,
    Authentication,
    Network,
    Unknown,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 4] = [
        ErrorKind::Validation,
        ErrorKind::Authentication,
        ErrorKind::Network,
        ErrorKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Network => "network",
            ErrorKind::Unknown => "unknown",
        }
    }

    /// Response code used when the error carries no provider code
    pub fn fallback_code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => error_codes::VALIDATION_ERROR,
            ErrorKind::Authentication => error_codes::AUTHENTICATION_ERROR,
            ErrorKind::Network => error_codes::NETWORK_ERROR,
            ErrorKind::Unknown => error_codes::UNKNOWN_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform result of normalizing one raw error
///
/// Built fresh on every call and never modified afterwards, so the fields are
/// only reachable through accessors. `message` is always non-empty and
/// `original_error` is the input exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedError {
    kind: ErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "RawError::is_undefined")]
    original_error: RawError,
}

impl ProcessedError {
    pub(crate) fn new(
        kind: ErrorKind,
        message: String,
        code: Option<String>,
        field: Option<String>,
        original_error: RawError,
    ) -> Self {
        debug_assert!(!message.trim().is_empty(), "normalized message must not be empty");
        Self {
            kind,
            message,
            code,
            field,
            original_error,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Localized, human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Provider error code, when one was present
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Form field the error refers to, when known
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The untouched input, for debugging only
    pub fn original_error(&self) -> &RawError {
        &self.original_error
    }

    /// Hand back the original input, dropping the normalized view
    pub fn into_original_error(self) -> RawError {
        self.original_error
    }
}

impl IntoErrorResponse for ProcessedError {
    fn to_error_response(&self) -> ErrorResponse {
        let error = self
            .code()
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| self.kind.fallback_code());
        let response = ErrorResponse::new(error, self.message.clone()).add_detail("kind", self.kind);
        match self.field() {
            Some(field) => response.add_detail("field", field),
            None => response,
        }
    }
}
