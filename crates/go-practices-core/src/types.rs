//! Core types for lint problems and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single text replacement over a half-open byte range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Byte offset where the replacement starts (inclusive).
    pub start: usize,
    /// Byte offset where the replacement ends (exclusive).
    pub end: usize,
    /// New text to insert in place of the range.
    pub text: String,
}

impl Replacement {
    /// Creates a new replacement.
    #[must_use]
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// A suggested fix attached to a problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixInfo {
    /// Human-readable description of the fix.
    pub message: String,
    /// Ordered text replacements that realize the fix.
    pub replacements: Vec<Replacement>,
}

impl FixInfo {
    /// Creates a fix with the given replacements.
    #[must_use]
    pub fn new(message: impl Into<String>, replacements: Vec<Replacement>) -> Self {
        Self {
            message: message.into(),
            replacements,
        }
    }

    /// Creates a fix consisting of a single replacement.
    #[must_use]
    pub fn single(message: impl Into<String>, replacement: Replacement) -> Self {
        Self::new(message, vec![replacement])
    }
}

/// A lint problem found during analysis.
///
/// Positions are 1-based and refer to the document the problem was produced
/// from. Problems are plain values; nothing about them is persisted between
/// analysis runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Id of the rule that produced this problem (e.g., "go-naming").
    pub rule: String,
    /// Severity of this problem.
    pub severity: Severity,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Human-readable message.
    pub message: String,
    /// Optional suggested fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<FixInfo>,
}

impl Problem {
    /// Creates a new problem without a fix.
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            line,
            column,
            message: message.into(),
            fix: None,
        }
    }

    /// Attaches a suggested fix to this problem.
    #[must_use]
    pub fn with_fix(mut self, fix: FixInfo) -> Self {
        self.fix = Some(fix);
        self
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.line, self.column, self.severity, self.rule, self.message
        )
    }
}

/// Converts a Problem to a miette Diagnostic for rich error display.
#[allow(dead_code)] // Public API for miette integration
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ProblemDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl ProblemDiagnostic {
    /// Builds a diagnostic for `problem`, resolving its line/column against
    /// `source` to a byte span.
    #[must_use]
    pub fn new(problem: &Problem, source: &str) -> Self {
        let offset = crate::scanner::offset_for(source, problem.line, problem.column);
        Self {
            message: format!("[{}] {}", problem.rule, problem.message),
            help: problem.fix.as_ref().map(|f| f.message.clone()),
            span: SourceSpan::from((offset, 0)),
            label_message: problem.rule.clone(),
        }
    }
}

/// A problem tagged with the file it was found in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProblem {
    /// File path relative to the analysis root.
    pub file: PathBuf,
    /// The problem itself.
    #[serde(flatten)]
    pub problem: Problem,
}

impl FileProblem {
    /// Creates a new file-tagged problem.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, problem: Problem) -> Self {
        Self {
            file: file.into(),
            problem,
        }
    }
}

impl std::fmt::Display for FileProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.file.display(),
            self.problem.line,
            self.problem.column,
            self.problem.severity,
            self.problem.rule,
            self.problem.message
        )
    }
}

/// Result of running lint analysis over a set of files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All problems found.
    pub problems: Vec<FileProblem>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any error-level problems.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.problems
            .iter()
            .any(|p| p.problem.severity == Severity::Error)
    }

    /// Returns true if there are any warnings or errors.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.problems
            .iter()
            .any(|p| p.problem.severity >= Severity::Warning)
    }

    /// Counts problems by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let mut errors = 0;
        let mut warnings = 0;
        let mut infos = 0;
        for p in &self.problems {
            match p.problem.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => infos += 1,
            }
        }
        (errors, warnings, infos)
    }

    /// Returns problems filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&FileProblem> {
        self.problems
            .iter()
            .filter(|p| p.problem.severity == severity)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_problem(severity: Severity) -> Problem {
        Problem::new("go-naming", severity, 3, 1, "Package name check failed")
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn problem_new_has_no_fix() {
        let p = make_problem(Severity::Warning);
        assert!(p.fix.is_none());
    }

    #[test]
    fn problem_with_fix_sets_value() {
        let p = make_problem(Severity::Warning).with_fix(FixInfo::single(
            "Rename package",
            Replacement::new(8, 12, "main"),
        ));
        let fix = p.fix.expect("fix should be set");
        assert_eq!(fix.replacements.len(), 1);
        assert_eq!(fix.replacements[0].text, "main");
    }

    #[test]
    fn problem_display_includes_rule_and_position() {
        let p = make_problem(Severity::Error);
        let display = format!("{p}");
        assert!(display.contains("3:1"));
        assert!(display.contains("[go-naming]"));
    }

    #[test]
    fn problem_diagnostic_carries_fix_as_help() {
        let source = "package Main\n";
        let p = Problem::new("go-naming", Severity::Warning, 1, 1, "bad name")
            .with_fix(FixInfo::single("Rename package", Replacement::new(8, 12, "main")));
        let diag = ProblemDiagnostic::new(&p, source);
        assert!(format!("{diag}").contains("bad name"));
    }

    // --- LintResult tests ---

    #[test]
    fn empty_result_has_no_errors() {
        let result = LintResult::new();
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
        assert_eq!(result.count_by_severity(), (0, 0, 0));
    }

    #[test]
    fn count_by_severity_buckets() {
        let mut result = LintResult::new();
        result
            .problems
            .push(FileProblem::new("main.go", make_problem(Severity::Error)));
        result
            .problems
            .push(FileProblem::new("main.go", make_problem(Severity::Warning)));
        result
            .problems
            .push(FileProblem::new("util.go", make_problem(Severity::Info)));

        assert_eq!(result.count_by_severity(), (1, 1, 1));
        assert!(result.has_errors());
        assert_eq!(result.by_severity(Severity::Info).len(), 1);
    }

    #[test]
    fn warnings_detected_without_errors() {
        let mut result = LintResult::new();
        result
            .problems
            .push(FileProblem::new("main.go", make_problem(Severity::Warning)));
        assert!(!result.has_errors());
        assert!(result.has_warnings());
    }
}
