//! Error family detection.
//!
//! Input shapes overlap: an object with `message`, `field` and `code` is both
//! auth-shaped and validation-shaped, and a provider batch may also carry a
//! string `message`. Detection therefore runs the predicates in a fixed
//! priority order and the first match wins.

use serde_json::{Map, Value};

use super::raw_error::RawError;

/// Key holding the ordered sub-error list of a provider batch
pub const ERRORS_KEY: &str = "errors";

/// The shape an input was recognised as
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorFamily<'a> {
    ProviderBatch(ProviderBatch<'a>),
    AuthShaped(AuthShaped<'a>),
    ValidationShaped(ValidationShaped<'a>),
    Generic(&'a RawError),
}

type Detector = for<'a> fn(&'a RawError) -> Option<ErrorFamily<'a>>;

/// Structural tests in priority order; `Generic` is the implicit catch-all.
const DETECTORS: [Detector; 3] = [
    detect_provider_batch,
    detect_auth_shaped,
    detect_validation_shaped,
];

impl<'a> ErrorFamily<'a> {
    /// Classify `raw` into the first family whose structural test matches
    pub fn detect(raw: &'a RawError) -> Self {
        DETECTORS
            .iter()
            .find_map(|detector| detector(raw))
            .unwrap_or(ErrorFamily::Generic(raw))
    }

    /// Stable name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            ErrorFamily::ProviderBatch(_) => "provider_batch",
            ErrorFamily::AuthShaped(_) => "auth_shaped",
            ErrorFamily::ValidationShaped(_) => "validation_shaped",
            ErrorFamily::Generic(_) => "generic",
        }
    }
}

/// Object carrying an ordered list of provider-issued sub-errors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderBatch<'a> {
    pub errors: &'a [Value],
}

impl<'a> ProviderBatch<'a> {
    /// The first sub-error; the only one surfaced to the user
    pub fn primary(&self) -> Option<ProviderSubError<'a>> {
        self.errors.first().map(ProviderSubError::new)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Read-only view over one element of a provider batch.
///
/// Elements are not validated on detection, so every accessor is optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderSubError<'a> {
    raw: &'a Value,
}

impl<'a> ProviderSubError<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    pub fn code(&self) -> Option<&'a str> {
        self.raw.get("code").and_then(Value::as_str)
    }

    pub fn message(&self) -> Option<&'a str> {
        self.raw.get("message").and_then(Value::as_str)
    }

    pub fn long_message(&self) -> Option<&'a str> {
        self.raw.get("longMessage").and_then(Value::as_str)
    }

    pub fn meta(&self) -> Option<&'a Map<String, Value>> {
        self.raw.get("meta").and_then(Value::as_object)
    }

    pub fn raw(&self) -> &'a Value {
        self.raw
    }
}

/// Object with a string `message` and optional `code`/`field`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthShaped<'a> {
    pub message: &'a str,
    pub code: Option<&'a Value>,
    pub field: Option<&'a Value>,
}

/// Object with `field`, `message` and `code` all present, of any type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationShaped<'a> {
    pub field: &'a Value,
    pub message: &'a Value,
    pub code: &'a Value,
}

fn detect_provider_batch(raw: &RawError) -> Option<ErrorFamily<'_>> {
    let errors = raw.as_object()?.get(ERRORS_KEY)?.as_array()?;
    Some(ErrorFamily::ProviderBatch(ProviderBatch {
        errors: errors.as_slice(),
    }))
}

fn detect_auth_shaped(raw: &RawError) -> Option<ErrorFamily<'_>> {
    let object = raw.as_object()?;
    let message = object.get("message")?.as_str()?;
    Some(ErrorFamily::AuthShaped(AuthShaped {
        message,
        code: object.get("code"),
        field: object.get("field"),
    }))
}

fn detect_validation_shaped(raw: &RawError) -> Option<ErrorFamily<'_>> {
    let object = raw.as_object()?;
    Some(ErrorFamily::ValidationShaped(ValidationShaped {
        field: object.get("field")?,
        message: object.get("message")?,
        code: object.get("code")?,
    }))
}
