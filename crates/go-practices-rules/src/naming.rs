//! Rule enforcing Go naming conventions.
//!
//! # Rationale
//!
//! Go package names are expected to be short, lowercase, single words;
//! function names are camelCase or PascalCase depending on visibility.
//! Nonconforming package names get a fix that lowercases the identifier.
//!
//! # Configuration
//!
//! - `package_name_regex`: custom package-name pattern
//!   (default: [`DEFAULT_PACKAGE_NAME_PATTERN`])
//! - `function_name_regex`: custom function-name pattern
//!   (default: [`DEFAULT_FUNCTION_NAME_PATTERN`])
//!
//! Custom patterns are compiled at construction; an invalid pattern fails
//! construction with [`ConfigError::InvalidRegex`].

use go_practices_core::scanner;
use go_practices_core::{
    ConfigError, FixInfo, NamingConfig, Problem, Replacement, Rule, Severity,
};
use regex::Regex;

/// Rule id for naming conventions.
pub const ID: &str = "go-naming";

/// Default package-name pattern: lowercase alphanumeric, starting with a letter.
pub const DEFAULT_PACKAGE_NAME_PATTERN: &str = "^[a-z][a-z0-9]*$";

/// Default function-name pattern: alphanumeric, starting with a letter.
pub const DEFAULT_FUNCTION_NAME_PATTERN: &str = "^[a-zA-Z][a-zA-Z0-9]*$";

/// Checks package and function names against naming conventions.
#[derive(Debug, Clone)]
pub struct NamingRules {
    enabled: bool,
    severity: Severity,
    package_name_regex: Regex,
    function_name_regex: Regex,
}

impl NamingRules {
    /// Creates the rule from its configuration section, merging the named
    /// defaults with any custom patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegex`] if a custom pattern does not
    /// compile.
    pub fn from_config(config: &NamingConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            enabled: config.enabled,
            severity: config.severity,
            package_name_regex: compile(
                config
                    .package_name_regex
                    .as_deref()
                    .unwrap_or(DEFAULT_PACKAGE_NAME_PATTERN),
            )?,
            function_name_regex: compile(
                config
                    .function_name_regex
                    .as_deref()
                    .unwrap_or(DEFAULT_FUNCTION_NAME_PATTERN),
            )?,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })
}

impl Rule for NamingRules {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Go Naming Conventions"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    fn check(&self, text: &str) -> Vec<Problem> {
        let doc = scanner::scan(text);
        let mut problems = Vec::new();

        for pkg in &doc.packages {
            if !self.package_name_regex.is_match(pkg.name) {
                problems.push(
                    Problem::new(
                        ID,
                        self.severity,
                        pkg.line,
                        pkg.column,
                        format!(
                            "Package name \"{}\" doesn't follow Go naming conventions. \
                             Should be lowercase, single word.",
                            pkg.name
                        ),
                    )
                    .with_fix(FixInfo::single(
                        "Rename package according to Go conventions",
                        Replacement::new(pkg.name_start, pkg.name_end, pkg.name.to_lowercase()),
                    )),
                );
            }
        }

        for func in &doc.functions {
            if !self.function_name_regex.is_match(func.name) {
                problems.push(Problem::new(
                    ID,
                    self.severity,
                    func.line,
                    func.column,
                    format!(
                        "Function name \"{}\" doesn't follow Go naming conventions. \
                         Should be camelCase or PascalCase.",
                        func.name
                    ),
                ));
            }
        }

        problems
    }
}
