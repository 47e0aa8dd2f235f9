//! Display configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
}

/// How operands are rendered on the display.
///
/// Defaults match US English: `1,234.5`.
///
/// ```toml
/// group_separator = "."
/// decimal_separator = ","
/// group_size = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub group_separator: String,
    pub decimal_separator: String,
    pub group_size: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            group_size: 3,
        }
    }
}

impl FormatConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FormatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.group_size == 0 {
            return Err(ConfigError::InvalidValue(
                "group_size must be at least 1".to_string(),
            ));
        }
        if self.decimal_separator.is_empty() {
            return Err(ConfigError::InvalidValue(
                "decimal_separator must not be empty".to_string(),
            ));
        }
        if self.group_separator == self.decimal_separator {
            return Err(ConfigError::InvalidValue(format!(
                "group_separator and decimal_separator are both '{}'",
                self.decimal_separator
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_us_english() {
        let config = FormatConfig::default();
        assert_eq!(config.group_separator, ",");
        assert_eq!(config.decimal_separator, ".");
        assert_eq!(config.group_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = FormatConfig::from_toml("group_separator = \" \"").unwrap();
        assert_eq!(config.group_separator, " ");
        assert_eq!(config.decimal_separator, ".");
        assert_eq!(config.group_size, 3);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(FormatConfig::from_toml("").unwrap(), FormatConfig::default());
    }

    #[test]
    fn zero_group_size_is_rejected() {
        let result = FormatConfig::from_toml("group_size = 0");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn clashing_separators_are_rejected() {
        let result = FormatConfig::from_toml("group_separator = \".\"");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = FormatConfig::from_toml("group_size = \"three\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "group_separator = \".\"\ndecimal_separator = \",\"").unwrap();

        let config = FormatConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.group_separator, ".");
        assert_eq!(config.decimal_separator, ",");
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = FormatConfig::load_from_path(Path::new("/nonexistent/keypad-calc.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
