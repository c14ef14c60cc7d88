//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `diagnostics` - Whether normalized errors are reported to the log stream

pub mod diagnostics;
pub mod environment;

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::ConfigError;

// Re-export commonly used types
pub use diagnostics::{parse_flag, DiagnosticsConfig, DIAGNOSTICS_VAR};
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Error diagnostics configuration
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            diagnostics: DiagnosticsConfig::default(),
            ..Self::for_environment(Environment::default())
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self::for_environment(Environment::Development)
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self::for_environment(Environment::Production)
    }

    fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            diagnostics: DiagnosticsConfig::for_environment(environment),
        }
    }

    /// Load `.env` (if present) and then read configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }
        Self::from_env()
    }

    /// Load configuration from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration through an arbitrary variable lookup
    ///
    /// Recognised variables: `ENVIRONMENT`/`ENV`/`RUST_ENV`, `LOG_LEVEL`,
    /// `LOG_FORMAT` and `ERROR_DIAGNOSTICS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);
        let mut config = Self::for_environment(environment);

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            config.logging.format = format.parse()?;
        }
        config.diagnostics = DiagnosticsConfig::from_lookup(&lookup)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.logging.level, "debug");
        assert!(config.diagnostics.enabled);
    }

    #[test]
    fn test_production_defaults() {
        let config = AppConfig::production();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.diagnostics.enabled);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = AppConfig::from_lookup(|key: &str| match key {
            "ENVIRONMENT" => Some("production".to_string()),
            "LOG_LEVEL" => Some("an_core=debug".to_string()),
            "LOG_FORMAT" => Some("compact".to_string()),
            "ERROR_DIAGNOSTICS" => Some("true".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.logging.level, "an_core=debug");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.diagnostics.enabled);
    }

    #[test]
    fn test_from_lookup_without_environment_keeps_diagnostics_off() {
        let config = AppConfig::from_lookup(|_: &str| None).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert!(!config.diagnostics.enabled);

        let config = AppConfig::from_lookup(|key: &str| {
            (key == "ENVIRONMENT").then(|| "prd".to_string())
        })
        .unwrap();
        assert!(!config.diagnostics.enabled);
        assert!(!AppConfig::default().diagnostics.enabled);
    }

    #[test]
    fn test_from_lookup_rejects_bad_format() {
        let result = AppConfig::from_lookup(|key: &str| {
            (key == "LOG_FORMAT").then(|| "yaml".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidLogFormat { .. })));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: AppConfig =
            serde_json::from_value(serde_json::json!({ "environment": "staging" })).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.logging.level, "info");
    }
}
