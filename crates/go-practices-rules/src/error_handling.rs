//! Rule enforcing Go error-handling practices.
//!
//! # Rationale
//!
//! Errors in Go are values and must be handled where they are produced.
//! This rule flags short-variable error assignments that have no adjacent
//! nil check, offering a canned `if err != nil` fix, and checks that
//! declared error variables follow the `err` / `*Err` / `*Error` naming
//! convention.
//!
//! Detection is heuristic (see [`go_practices_core::scanner`]); sites with
//! a nil check further away than the matched text are still flagged.

use go_practices_core::scanner;
use go_practices_core::{ErrorConfig, FixInfo, Problem, Replacement, Rule, Severity};

/// Rule id for error-handling practices.
pub const ID: &str = "go-error-handling";

/// Checks error assignments and error variable names.
#[derive(Debug, Clone)]
pub struct ErrorRules {
    enabled: bool,
    severity: Severity,
}

impl ErrorRules {
    /// Creates the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: &ErrorConfig) -> Self {
        Self {
            enabled: config.enabled,
            severity: config.severity,
        }
    }
}

impl Rule for ErrorRules {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Go Error Handling Practices"
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

        for site in &doc.ignored_errors {
            problems.push(
                Problem::new(
                    ID,
                    self.severity,
                    site.line,
                    site.column,
                    "Error is being ignored. Always handle errors in Go.",
                )
                .with_fix(FixInfo::single(
                    "Add proper error handling",
                    Replacement::new(site.start, site.end, site.suggested_fix.clone()),
                )),
            );
        }

        for var in &doc.error_variables {
            if var.name != "err" && !var.name.ends_with("Err") && !var.name.ends_with("Error") {
                problems.push(Problem::new(
                    ID,
                    self.severity,
                    var.line,
                    var.column,
                    format!(
                        "Error variable \"{}\" doesn't follow standard naming conventions. \
                         Use \"err\" or end with \"Err\"/\"Error\".",
                        var.name
                    ),
                ));
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use go_practices_core::scanner::NIL_CHECK_FRAGMENT;

    fn check_code(code: &str) -> Vec<Problem> {
        ErrorRules::from_config(&ErrorConfig::default()).check(code)
    }

    #[test]
    fn flags_ignored_error_with_canned_fix() {
        let problems = check_code("x, err := foo()\nbar()\n");
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].rule, ID);

        let fix = problems[0].fix.as_ref().expect("ignored error has a fix");
        assert!(fix.replacements[0].text.ends_with(NIL_CHECK_FRAGMENT));
    }

    #[test]
    fn blank_identifier_assignment_is_not_flagged() {
        let problems = check_code("_, err := foo()\n");
        assert!(problems.is_empty());
    }

    #[test]
    fn accepts_conventional_error_names() {
        let problems = check_code(
            "err := errors.New(\"boom\")\nparseErr := errors.New(\"bad\")\nioError := fmt.Errorf(\"io\")\n",
        );
        assert!(problems.is_empty());
    }

    #[test]
    fn flags_unconventional_error_variable() {
        let problems = check_code("oops := errors.New(\"boom\")\n");
        assert_eq!(problems.len(), 1);
        assert!(problems[0].message.contains("oops"));
        assert!(problems[0].fix.is_none());
    }

    #[test]
    fn severity_comes_from_config() {
        let config = ErrorConfig {
            severity: Severity::Info,
            ..ErrorConfig::default()
        };
        let problems =
            ErrorRules::from_config(&config).check("oops := errors.New(\"boom\")\n");
        assert_eq!(problems[0].severity, Severity::Info);
    }
}
