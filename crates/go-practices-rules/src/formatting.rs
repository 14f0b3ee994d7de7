//! Rule enforcing Go formatting practices.
//!
//! # Rationale
//!
//! Overlong lines hurt readability, and indentation that moves by partial
//! steps usually signals mixed tabs and spaces or a misplaced edit.
//!
//! # Configuration
//!
//! - `max_line_length`: maximum allowed line length (default: 100)
//! - `indent_width`: expected indentation step between adjacent lines
//!   (default: 4)
//!
//! The indentation policy is deliberately simple: any nonzero change in
//! leading whitespace between adjacent lines that is not exactly
//! `indent_width` is flagged, in both directions. Tab-width semantics are
//! not modeled.

use go_practices_core::scanner;
use go_practices_core::{FormattingConfig, Problem, Rule, Severity};

/// Rule id for formatting practices.
pub const ID: &str = "go-formatting";

/// Checks line length and indentation consistency.
#[derive(Debug, Clone)]
pub struct FormattingRules {
    enabled: bool,
    severity: Severity,
    max_line_length: usize,
    indent_width: usize,
}

impl FormattingRules {
    /// Creates the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: &FormattingConfig) -> Self {
        Self {
            enabled: config.enabled,
            severity: config.severity,
            max_line_length: config.max_line_length,
            indent_width: config.indent_width,
        }
    }
}

impl Rule for FormattingRules {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Go Formatting Practices"
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

        for line in &doc.lines {
            if line.text.chars().count() > self.max_line_length {
                problems.push(Problem::new(
                    ID,
                    self.severity,
                    line.number,
                    1,
                    format!(
                        "Line exceeds {} characters. Consider breaking it up for readability.",
                        self.max_line_length
                    ),
                ));
            }
        }

        for pair in doc.lines.windows(2) {
            let diff = pair[1].indentation.abs_diff(pair[0].indentation);
            if diff > 0 && diff != self.indent_width {
                problems.push(Problem::new(
                    ID,
                    self.severity,
                    pair[1].number,
                    1,
                    format!(
                        "Inconsistent indentation. Use {} spaces or tabs consistently.",
                        self.indent_width
                    ),
                ));
            }
        }

        problems
    }
}
