//! # Authentication Error Normalizer Core
//!
//! Turns error values of unknown shape, raised anywhere in an authentication
//! flow (sign-in, sign-up, session refresh), into a single `ProcessedError`
//! carrying a kind, a localized message and the untouched input.

pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
