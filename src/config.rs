//! Environment-driven configuration.
//!
//! This is where external encodings of the PEP 517 flag are normalized into
//! [`IsolationRequest`]; the resolver only ever sees the three-valued enum.

use crate::pyproject::IsolationRequest;
use std::env;
use std::fmt;
use thiserror::Error;

pub const USE_PEP517_VAR: &str = "PYPROJECT_POLICY_USE_PEP517";
pub const LOG_LEVEL_VAR: &str = "PYPROJECT_POLICY_LOG_LEVEL";
pub const LOG_JSON_VAR: &str = "PYPROJECT_POLICY_LOG_JSON";

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value:?}. Expected one of: 1, true, yes, on, 0, false, no, off")]
    InvalidFlag { field: String, value: String },

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Parse a boolean-ish flag the way installer config files spell it.
///
/// Empty input means the flag was not given.
pub fn parse_isolation_flag(field: &str, value: &str) -> Result<IsolationRequest, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "" => Ok(IsolationRequest::Unspecified),
        "1" | "true" | "yes" | "on" | "y" | "t" => Ok(IsolationRequest::Enabled),
        "0" | "false" | "no" | "off" | "n" | "f" => Ok(IsolationRequest::Disabled),
        _ => Err(ConfigError::InvalidFlag {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    pub use_pep517: IsolationRequest,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            use_pep517: IsolationRequest::Unspecified,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: DEFAULT_LOG_JSON,
        }
    }
}

impl PolicyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let use_pep517 = match env::var(USE_PEP517_VAR) {
            Ok(value) => parse_isolation_flag(USE_PEP517_VAR, &value)?,
            Err(_) => IsolationRequest::Unspecified,
        };

        let log_level = env::var(LOG_LEVEL_VAR)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var(LOG_JSON_VAR)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_LOG_JSON);

        let config = Self {
            use_pep517,
            log_level,
            log_json,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                self.log_level
            ))),
        }
    }
}

impl fmt::Display for PolicyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Build Policy Configuration:")?;
        writeln!(f, "  Use PEP 517: {:?}", self.use_pep517)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    fn test_parse_isolation_flag() {
        for value in ["1", "true", "YES", "on", " True "] {
            assert_eq!(
                parse_isolation_flag("f", value).unwrap(),
                IsolationRequest::Enabled,
                "{value}"
            );
        }
        for value in ["0", "false", "No", "OFF", "f"] {
            assert_eq!(
                parse_isolation_flag("f", value).unwrap(),
                IsolationRequest::Disabled,
                "{value}"
            );
        }
        assert_eq!(
            parse_isolation_flag("f", "").unwrap(),
            IsolationRequest::Unspecified
        );
    }

    #[test]
    fn test_parse_isolation_flag_invalid() {
        let err = parse_isolation_flag("USE_PEP517", "maybe").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                field: "USE_PEP517".to_string(),
                value: "maybe".to_string(),
            }
        );
        assert!(err.to_string().contains("USE_PEP517"));
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = [
            EnvGuard::unset(USE_PEP517_VAR),
            EnvGuard::unset(LOG_LEVEL_VAR),
            EnvGuard::unset(LOG_JSON_VAR),
        ];

        let config = PolicyConfig::from_env().unwrap();
        assert_eq!(config, PolicyConfig::default());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = [
            EnvGuard::set(USE_PEP517_VAR, "0"),
            EnvGuard::set(LOG_LEVEL_VAR, "DEBUG"),
            EnvGuard::set(LOG_JSON_VAR, "true"),
        ];

        let config = PolicyConfig::from_env().unwrap();
        assert_eq!(config.use_pep517, IsolationRequest::Disabled);
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
    }

    #[test]
    #[serial]
    fn test_invalid_flag_from_env() {
        let _guards = [
            EnvGuard::set(USE_PEP517_VAR, "sometimes"),
            EnvGuard::unset(LOG_LEVEL_VAR),
        ];

        assert!(matches!(
            PolicyConfig::from_env(),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_invalid_log_level_from_env() {
        let _guards = [
            EnvGuard::unset(USE_PEP517_VAR),
            EnvGuard::set(LOG_LEVEL_VAR, "verbose"),
        ];

        assert!(matches!(
            PolicyConfig::from_env(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_display() {
        let display = PolicyConfig::default().to_string();
        assert!(display.contains("Use PEP 517: Unspecified"));
        assert!(display.contains("Log Level: info"));
    }
}
