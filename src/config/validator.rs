use thiserror::Error;

use crate::config::Settings;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_logging(&settings.logging) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &crate::config::ServerSettings) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ConfigValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ConfigValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_logging(logging: &crate::config::LoggingSettings) -> Result<(), Vec<ConfigValidationError>> {
        let level = logging.level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(vec![ConfigValidationError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("'{}' is not one of {}", logging.level, LOG_LEVELS.join(", ")),
            }])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingSettings, ServerSettings};

    fn settings(host: &str, port: u16, level: &str) -> Settings {
        Settings {
            server: ServerSettings {
                host: host.to_string(),
                port,
            },
            logging: LoggingSettings {
                level: level.to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(ConfigValidator::validate(&settings("127.0.0.1", 3000, "info")).is_ok());
        assert!(ConfigValidator::validate(&settings("127.0.0.1", 3000, "DEBUG")).is_ok());
    }

    #[test]
    fn test_invalid_port() {
        let errors = ConfigValidator::validate(&settings("127.0.0.1", 0, "info")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ConfigValidationError::InvalidValue { .. }));
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = ConfigValidator::validate(&settings("", 0, "verbose")).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| matches!(e, ConfigValidationError::MissingField(_))));
        assert!(errors.iter().any(|e| e.to_string().contains("logging.level")));
    }
}
