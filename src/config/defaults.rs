//! Default configuration values for memory-access

use serde::{Deserialize, Serialize};

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub access: AccessDefaults,
    pub logging: LoggingDefaults,
}

/// Default checked-accessor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessDefaults {
    pub reject_null: bool,
    pub reject_wraparound: bool,
    pub max_transfer_bytes: usize,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
}

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        access: AccessDefaults {
            reject_null: true,
            reject_wraparound: true,
            max_transfer_bytes: 16 * 1024 * 1024, // 16MB
        },
        logging: LoggingDefaults {
            level: "info".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_defaults() {
        let config = default_config();
        assert!(config.access.reject_null);
        assert!(config.access.reject_wraparound);
        assert_eq!(config.access.max_transfer_bytes, 16777216);
    }

    #[test]
    fn test_logging_defaults() {
        let config = default_config();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_serialization() {
        let config = default_config();
        let serialized = toml::to_string(&config).unwrap();
        assert!(serialized.contains("reject_null"));
        assert!(serialized.contains("max_transfer_bytes"));

        let deserialized: ConfigDefaults = toml::from_str(&serialized).unwrap();
        assert_eq!(
            deserialized.access.max_transfer_bytes,
            config.access.max_transfer_bytes
        );
        assert_eq!(deserialized.logging.level, config.logging.level);
    }
}
