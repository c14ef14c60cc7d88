//! Shared configuration and common types for the authentication error normalizer
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types (environment, logging, diagnostics)
//! - Error response structures and the configuration error type
//! - Tracing subscriber initialisation

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DiagnosticsConfig, Environment, LogFormat, LoggingConfig};
pub use errors::{error_codes, ConfigError, ErrorResponse, IntoErrorResponse};
pub use logging::init_tracing;
