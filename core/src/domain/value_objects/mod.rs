//! Value objects representing the raw input and its detected shape.

pub mod error_family;
pub mod raw_error;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use error_family::{
    AuthShaped, ErrorFamily, ProviderBatch, ProviderSubError, ValidationShaped,
};
pub use raw_error::RawError;
