//! Configuration types for go-practices.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration, one section per rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Naming rule configuration.
    #[serde(default)]
    pub naming: NamingConfig,

    /// Error-handling rule configuration.
    #[serde(default)]
    pub error: ErrorConfig,

    /// Formatting rule configuration.
    #[serde(default)]
    pub formatting: FormattingConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Configuration for the naming rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Whether the rule is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Severity of problems this rule produces.
    #[serde(default = "default_warning")]
    pub severity: Severity,

    /// Custom package-name pattern; compiled at rule construction.
    #[serde(default)]
    pub package_name_regex: Option<String>,

    /// Custom function-name pattern; compiled at rule construction.
    #[serde(default)]
    pub function_name_regex: Option<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Warning,
            package_name_regex: None,
            function_name_regex: None,
        }
    }
}

/// Configuration for the error-handling rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorConfig {
    /// Whether the rule is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Severity of problems this rule produces.
    #[serde(default = "default_warning")]
    pub severity: Severity,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Warning,
        }
    }
}

/// Configuration for the formatting rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingConfig {
    /// Whether the rule is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Severity of problems this rule produces.
    #[serde(default = "default_info")]
    pub severity: Severity,

    /// Maximum allowed line length.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Expected indentation step between adjacent lines.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Info,
            max_line_length: default_max_line_length(),
            indent_width: default_indent_width(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_warning() -> Severity {
    Severity::Warning
}

fn default_info() -> Severity {
    Severity::Info
}

fn default_max_line_length() -> usize {
    100
}

fn default_indent_width() -> usize {
    4
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A custom naming pattern failed to compile.
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidRegex {
        /// The pattern that failed to compile.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.naming.enabled);
        assert_eq!(config.naming.severity, Severity::Warning);
        assert!(config.naming.package_name_regex.is_none());
        assert_eq!(config.error.severity, Severity::Warning);
        assert_eq!(config.formatting.severity, Severity::Info);
        assert_eq!(config.formatting.max_line_length, 100);
        assert_eq!(config.formatting.indent_width, 4);
    }

    #[test]
    fn parse_config() {
        let toml = r#"
[naming]
enabled = true
severity = "error"
package_name_regex = "^[a-z]+$"

[formatting]
max_line_length = 120
"#;

        let config = Config::parse(toml).expect("config should parse");
        assert_eq!(config.naming.severity, Severity::Error);
        assert_eq!(
            config.naming.package_name_regex.as_deref(),
            Some("^[a-z]+$")
        );
        // Unspecified fields keep their defaults.
        assert!(config.naming.function_name_regex.is_none());
        assert!(config.error.enabled);
        assert_eq!(config.formatting.max_line_length, 120);
        assert_eq!(config.formatting.indent_width, 4);
    }

    #[test]
    fn parse_rejects_unknown_severity() {
        let toml = r#"
[error]
severity = "fatal"
"#;
        let err = Config::parse(toml).expect_err("parse should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        let err = Config::parse("[naming\nenabled = yes").expect_err("parse should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
