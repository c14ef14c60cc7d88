//! Diagnostics configuration for normalized error reporting

use serde::{Deserialize, Serialize};

use super::environment::Environment;
use crate::errors::ConfigError;

/// Variable that forces diagnostics on or off regardless of environment
pub const DIAGNOSTICS_VAR: &str = "ERROR_DIAGNOSTICS";

/// Controls whether normalized errors are emitted to the log stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiagnosticsConfig {
    /// Emit a diagnostic event for every recorded error
    pub enabled: bool,

    /// Include the untouched input in the diagnostic event
    #[serde(default = "default_include_original_error")]
    pub include_original_error: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

impl DiagnosticsConfig {
    /// Diagnostics are only emitted in development
    pub fn for_environment(env: Environment) -> Self {
        Self {
            enabled: env.is_development(),
            include_original_error: default_include_original_error(),
        }
    }

    /// Configuration with diagnostics switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            include_original_error: false,
        }
    }

    /// Build from the environment, honouring the `ERROR_DIAGNOSTICS` override.
    ///
    /// Opt-in: enabled only when an environment variable explicitly names
    /// development. Unset or unparseable environments leave it off.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match Environment::explicit_from_lookup(&lookup) {
            Some(env) => Self::for_environment(env),
            None => Self {
                enabled: false,
                include_original_error: default_include_original_error(),
            },
        };
        if let Some(value) = lookup(DIAGNOSTICS_VAR) {
            config.enabled = parse_flag(DIAGNOSTICS_VAR, &value)?;
        }
        Ok(config)
    }
}

/// Parse a boolean flag as it appears in environment variables
pub fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn default_include_original_error() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_only_in_development() {
        assert!(DiagnosticsConfig::for_environment(Environment::Development).enabled);
        assert!(!DiagnosticsConfig::for_environment(Environment::Staging).enabled);
        assert!(!DiagnosticsConfig::for_environment(Environment::Production).enabled);
    }

    #[test]
    fn test_unset_environment_is_disabled() {
        let config = DiagnosticsConfig::from_lookup(|_: &str| None).unwrap();
        assert!(!config.enabled);
        assert!(!DiagnosticsConfig::default().enabled);
    }

    #[test]
    fn test_unparseable_environment_is_disabled() {
        let config = DiagnosticsConfig::from_lookup(|key: &str| {
            (key == "ENVIRONMENT").then(|| "prd".to_string())
        })
        .unwrap();
        assert!(!config.enabled);
    }

    #[test]
    fn test_explicit_development_is_enabled() {
        let config = DiagnosticsConfig::from_lookup(|key: &str| {
            (key == "ENV").then(|| "development".to_string())
        })
        .unwrap();
        assert!(config.enabled);
    }

    #[test]
    fn test_override_from_lookup() {
        let config = DiagnosticsConfig::from_lookup(|key: &str| match key {
            "ENVIRONMENT" => Some("production".to_string()),
            DIAGNOSTICS_VAR => Some("on".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(config.enabled);

        let config = DiagnosticsConfig::from_lookup(|key: &str| {
            (key == DIAGNOSTICS_VAR).then(|| "on".to_string())
        })
        .unwrap();
        assert!(config.enabled);

        let config = DiagnosticsConfig::from_lookup(|key: &str| match key {
            "ENVIRONMENT" => Some("development".to_string()),
            DIAGNOSTICS_VAR => Some("0".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(!config.enabled);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let result = DiagnosticsConfig::from_lookup(|_: &str| Some("sometimes".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidFlag { .. })));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("X", "TRUE"), Ok(true));
        assert_eq!(parse_flag("X", " no "), Ok(false));
        assert!(parse_flag("X", "").is_err());
    }
}
