//! Configuration validator for memory-access
//!
//! Validates configuration values to ensure they are within acceptable ranges.

use super::loader::{AccessConfig, Config, ConfigError, LoggingConfig};

/// Log levels accepted in `[logging] level`
pub const VALID_LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_access(&config.access)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    /// Validates checked-accessor configuration
    fn validate_access(access: &AccessConfig) -> Result<(), ConfigError> {
        if access.max_transfer_bytes == 0 {
            return Err(ConfigError::Invalid(
                "Maximum transfer size must be greater than 0".to_string(),
            ));
        }

        if access.max_transfer_bytes > isize::MAX as usize {
            return Err(ConfigError::Invalid(format!(
                "Maximum transfer size cannot exceed {} bytes",
                isize::MAX
            )));
        }

        Ok(())
    }

    /// Validates logging configuration
    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                logging.level, VALID_LOG_LEVELS
            )));
        }

        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_transfer_limit() {
        let mut config = Config::default();
        config.access.max_transfer_bytes = 0;
        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("transfer size"));

        config.access.max_transfer_bytes = usize::MAX;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();
        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("log level"));
    }

    #[test]
    fn test_edge_cases() {
        let mut config = Config::default();

        config.access.max_transfer_bytes = 1;
        config.logging.level = "TRACE".to_string();
        assert!(validate_config(&config).is_ok());

        config.access.max_transfer_bytes = isize::MAX as usize;
        config.logging.level = "off".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
