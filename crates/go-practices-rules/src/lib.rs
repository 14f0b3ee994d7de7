//! # go-practices-rules
//!
//! Built-in lint rules for go-practices.
//!
//! ## Available Rules
//!
//! | Id | Description |
//! |----|-------------|
//! | `go-naming` | Package and function naming conventions |
//! | `go-error-handling` | Ignored errors and error variable naming |
//! | `go-formatting` | Line length and indentation consistency |
//!
//! ## Usage
//!
//! ```ignore
//! use go_practices_core::Config;
//! use go_practices_rules::engine_from_config;
//!
//! let engine = engine_from_config(&Config::default())?;
//! let problems = engine.analyze(document_text);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error_handling;
mod formatting;
mod naming;

pub use error_handling::ErrorRules;
pub use formatting::FormattingRules;
pub use naming::{NamingRules, DEFAULT_FUNCTION_NAME_PATTERN, DEFAULT_PACKAGE_NAME_PATTERN};

/// Re-export core types for convenience.
pub use go_practices_core::{Problem, Rule, RuleBox, Severity};

use go_practices_core::{Config, ConfigError, RuleEngine};

/// Returns the default rule set in its fixed order: naming, error handling,
/// formatting.
///
/// # Errors
///
/// Returns an error if a custom naming pattern in `config` does not compile;
/// callers should validate configuration before building an engine.
pub fn default_rules(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    Ok(vec![
        Box::new(NamingRules::from_config(&config.naming)?),
        Box::new(ErrorRules::from_config(&config.error)),
        Box::new(FormattingRules::from_config(&config.formatting)),
    ])
}

/// Builds a [`RuleEngine`] wired with the default rule set.
///
/// # Errors
///
/// Propagates rule-construction failures from [`default_rules`].
pub fn engine_from_config(config: &Config) -> Result<RuleEngine, ConfigError> {
    Ok(RuleEngine::with_rules(default_rules(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_wire_all_three_in_order() {
        let rules = default_rules(&Config::default()).expect("default config is valid");
        let ids: Vec<&str> = rules.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["go-naming", "go-error-handling", "go-formatting"]);
    }

    #[test]
    fn engine_construction_fails_on_bad_pattern() {
        let mut config = Config::default();
        config.naming.package_name_regex = Some("(".to_string());
        assert!(engine_from_config(&config).is_err());
    }
}
