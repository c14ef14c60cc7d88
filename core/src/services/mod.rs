//! Services containing the normalization logic.

pub mod normalizer;

// Re-export commonly used items
pub use normalizer::{
    classify, log_error, lookup_message, normalize, normalize_and_record, resolve_message,
    Diagnostics,
};
