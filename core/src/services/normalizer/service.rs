//! Normalization entry point and per-family handlers

use serde_json::Value;

use super::classifier::classify;
use super::diagnostics::Diagnostics;
use super::messages::{resolve_message, UNEXPECTED_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE};
use crate::domain::entities::{ErrorKind, ProcessedError};
use crate::domain::value_objects::{
    AuthShaped, ErrorFamily, ProviderBatch, RawError, ValidationShaped,
};

/// Owned outcome of a family handler, before the input is attached
struct Classification {
    kind: ErrorKind,
    message: String,
    code: Option<String>,
    field: Option<String>,
}

impl Classification {
    fn unknown(message: &str) -> Self {
        Self {
            kind: ErrorKind::Unknown,
            message: message.to_string(),
            code: None,
            field: None,
        }
    }

    fn into_processed(self, original_error: RawError) -> ProcessedError {
        ProcessedError::new(self.kind, self.message, self.code, self.field, original_error)
    }
}

/// Normalize any error value into a `ProcessedError`.
///
/// Total over its input: every value, including `null`, `Undefined`,
/// primitives and malformed provider batches, yields a well-formed result.
pub fn normalize(raw: impl Into<RawError>) -> ProcessedError {
    let raw = raw.into();

    let classification = {
        let family = ErrorFamily::detect(&raw);
        tracing::trace!(family = family.name(), "Normalizing error");

        match family {
            ErrorFamily::ProviderBatch(batch) => handle_provider_batch(batch),
            ErrorFamily::AuthShaped(auth) => handle_auth_shaped(auth),
            ErrorFamily::ValidationShaped(validation) => handle_validation_shaped(validation),
            ErrorFamily::Generic(raw) => handle_generic(raw),
        }
    };

    classification.into_processed(raw)
}

/// Normalize and hand the result to `diagnostics` before returning it
pub fn normalize_and_record(raw: impl Into<RawError>, diagnostics: &Diagnostics) -> ProcessedError {
    let processed = normalize(raw);
    diagnostics.record(&processed);
    processed
}

fn handle_provider_batch(batch: ProviderBatch<'_>) -> Classification {
    let Some(primary) = batch.primary() else {
        return Classification::unknown(UNKNOWN_ERROR_MESSAGE);
    };

    let Some(code) = primary.code() else {
        tracing::debug!("Provider sub-error has no string code");
        return Classification::unknown(UNKNOWN_ERROR_MESSAGE);
    };

    let fallback = [primary.message(), primary.long_message()]
        .into_iter()
        .flatten()
        .find(|message| !message.trim().is_empty())
        .unwrap_or(UNKNOWN_ERROR_MESSAGE);

    Classification {
        kind: classify(code),
        message: resolve_message(code, fallback),
        code: Some(code.to_string()),
        field: None,
    }
}

fn handle_auth_shaped(auth: AuthShaped<'_>) -> Classification {
    Classification {
        kind: ErrorKind::Authentication,
        message: non_blank(Some(auth.message.to_string())),
        code: auth.code.and_then(value_text),
        field: auth.field.and_then(value_text),
    }
}

fn handle_validation_shaped(validation: ValidationShaped<'_>) -> Classification {
    Classification {
        kind: ErrorKind::Validation,
        message: non_blank(value_text(validation.message)),
        code: value_text(validation.code),
        field: value_text(validation.field),
    }
}

fn handle_generic(raw: &RawError) -> Classification {
    // Objects with a string `message` are auth-shaped, so none reach here with one
    let message = match raw {
        RawError::Json(Value::String(message)) => Some(message.clone()),
        RawError::Native(error) => Some(error.to_string()),
        _ => None,
    };

    Classification {
        kind: ErrorKind::Unknown,
        message: non_blank(message),
        code: None,
        field: None,
    }
}

/// Scalar JSON values rendered as text; structured values and `null` have none
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn non_blank(message: Option<String>) -> String {
    message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_string())
}
