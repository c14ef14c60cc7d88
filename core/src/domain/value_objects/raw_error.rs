//! Raw error value object wrapping an input of unknown shape.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::sync::Arc;

/// Shared handle to a native Rust error
pub type NativeError = Arc<dyn StdError + Send + Sync + 'static>;

/// An error value as it arrives from an authentication flow
///
/// Nothing about the structure is guaranteed. Provider payloads and
/// application-built errors arrive as JSON, errors raised by Rust code as
/// `Native`, and the absence of any value as `Undefined`.
#[derive(Debug, Clone)]
pub enum RawError {
    /// Any JSON value: objects, arrays, strings, numbers, booleans or `null`
    Json(Value),
    /// A native error value
    Native(NativeError),
    /// No value at all
    Undefined,
}

impl RawError {
    /// Wrap a native error
    pub fn native<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        RawError::Native(Arc::new(error))
    }

    /// JSON payload, if this is a JSON value
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RawError::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Key/value view, if this is a JSON object
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.as_json().and_then(Value::as_object)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, RawError::Undefined)
    }

    /// JSON rendering used for logging and serialization
    ///
    /// Native errors render as their display text, `Undefined` as `null`.
    pub fn to_json(&self) -> Value {
        match self {
            RawError::Json(value) => value.clone(),
            RawError::Native(error) => Value::String(error.to_string()),
            RawError::Undefined => Value::Null,
        }
    }
}

impl PartialEq for RawError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RawError::Json(a), RawError::Json(b)) => a == b,
            (RawError::Native(a), RawError::Native(b)) => Arc::ptr_eq(a, b),
            (RawError::Undefined, RawError::Undefined) => true,
            _ => false,
        }
    }
}

impl Serialize for RawError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RawError::Json(value) => value.serialize(serializer),
            RawError::Native(error) => serializer.collect_str(error),
            RawError::Undefined => serializer.serialize_none(),
        }
    }
}

impl From<Value> for RawError {
    fn from(value: Value) -> Self {
        RawError::Json(value)
    }
}

impl From<&str> for RawError {
    fn from(message: &str) -> Self {
        RawError::Json(Value::String(message.to_string()))
    }
}

impl From<String> for RawError {
    fn from(message: String) -> Self {
        RawError::Json(Value::String(message))
    }
}

impl From<anyhow::Error> for RawError {
    fn from(error: anyhow::Error) -> Self {
        let boxed: Box<dyn StdError + Send + Sync + 'static> = error.into();
        RawError::Native(Arc::from(boxed))
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for RawError {
    fn from(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        RawError::Native(Arc::from(error))
    }
}

impl From<NativeError> for RawError {
    fn from(error: NativeError) -> Self {
        RawError::Native(error)
    }
}

impl<T> From<Option<T>> for RawError
where
    T: Into<RawError>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawError::Undefined)
    }
}
