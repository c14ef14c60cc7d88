//! Development-only reporting of normalized errors

use an_shared::config::DiagnosticsConfig;
use once_cell::sync::Lazy;
use std::env;

use crate::domain::entities::ProcessedError;

/// Target used for diagnostic events, so they can be filtered separately
pub const DIAGNOSTICS_TARGET: &str = "an_core::diagnostics";

static PROCESS_DIAGNOSTICS: Lazy<Diagnostics> = Lazy::new(Diagnostics::from_env);

/// Emits normalized errors to the tracing stream when enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    config: DiagnosticsConfig,
}

impl Diagnostics {
    pub fn new(config: DiagnosticsConfig) -> Self {
        Self { config }
    }

    pub fn disabled() -> Self {
        Self::new(DiagnosticsConfig::disabled())
    }

    /// Read the process environment; see `from_lookup`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Enabled only when the environment is explicitly development, or
    /// wherever `ERROR_DIAGNOSTICS` switches it on.
    ///
    /// An unparseable override is reported and diagnostics stay off.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match DiagnosticsConfig::from_lookup(lookup) {
            Ok(config) => Self::new(config),
            Err(e) => {
                tracing::warn!("Ignoring diagnostics override: {}", e);
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Record `error`; a no-op when diagnostics are disabled
    pub fn record(&self, error: &ProcessedError) {
        if !self.config.enabled {
            return;
        }

        if self.config.include_original_error {
            tracing::error!(
                target: DIAGNOSTICS_TARGET,
                kind = %error.kind(),
                error_message = %error.message(),
                code = ?error.code(),
                field = ?error.field(),
                original_error = %error.original_error().to_json(),
                "Error processed"
            );
        } else {
            tracing::error!(
                target: DIAGNOSTICS_TARGET,
                kind = %error.kind(),
                error_message = %error.message(),
                code = ?error.code(),
                field = ?error.field(),
                "Error processed"
            );
        }
    }
}

/// Record `error` using the process-wide configuration, read once from the environment
pub fn log_error(error: &ProcessedError) {
    PROCESS_DIAGNOSTICS.record(error);
}
