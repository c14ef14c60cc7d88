//! Error normalizer
//!
//! This module turns arbitrary error values into `ProcessedError`s:
//! - Family detection and per-family handling (`normalize`)
//! - Code to kind heuristic (`classify`)
//! - Code to Spanish message table (`resolve_message`)
//! - Development-only diagnostics (`Diagnostics`, `log_error`)
//!
//! Everything here is a pure function over immutable data apart from the
//! diagnostics event, so it can be called concurrently from any thread.

mod classifier;
mod diagnostics;
pub mod messages;
mod service;

#[cfg(test)]
mod tests;

pub use classifier::classify;
pub use diagnostics::{log_error, Diagnostics};
pub use messages::{
    known_codes, lookup_message, resolve_message, UNEXPECTED_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};
pub use service::{normalize, normalize_and_record};
