//! File-walking analyzer running the rule engine over a directory tree.

use crate::config::ConfigError;
use crate::engine::RuleEngine;
use crate::types::{FileProblem, LintResult};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    engine: Option<RuleEngine>,
    exclude_patterns: Vec<String>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the rule engine to run over each discovered file.
    #[must_use]
    pub fn engine(mut self, engine: RuleEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved while
    /// absolutizing a relative root.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        if exclude_patterns.is_empty() {
            exclude_patterns.extend(["**/vendor/**".to_string(), "**/testdata/**".to_string()]);
        }

        Ok(Analyzer {
            root,
            engine: self.engine.unwrap_or_default(),
            exclude_patterns,
        })
    }
}

/// Runs the rule engine over every Go file under a root directory.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    engine: RuleEngine,
    exclude_patterns: Vec<String>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the rule engine.
    #[must_use]
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Returns the rule engine for mutation (enable/disable rules).
    pub fn engine_mut(&mut self) -> &mut RuleEngine {
        &mut self.engine
    }

    /// Analyzes all discovered files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for path in &files {
            debug!("Analyzing: {}", path.display());
            let content = std::fs::read_to_string(path)?;
            let relative = path
                .strip_prefix(&self.root)
                .map_or_else(|_| path.clone(), Path::to_path_buf);

            for problem in self.engine.analyze(&content) {
                result
                    .problems
                    .push(FileProblem::new(relative.clone(), problem));
            }
            result.files_checked += 1;
        }

        // Sort problems by file, then position
        result.problems.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then(a.problem.line.cmp(&b.problem.line))
                .then(a.problem.column.cmp(&b.problem.column))
        });

        info!(
            "Analysis complete: {} problems in {} files",
            result.problems.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Discovers all Go source files to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let pattern = format!("{}/**/*.go", self.root.display());
        let mut files = Vec::new();

        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| AnalyzerError::Io(e.into_error()))?;

            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/vendor/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Rule, RuleBox};
    use crate::types::{Problem, Severity};
    use std::fs;
    use tempfile::TempDir;

    struct LineCountRule;

    impl Rule for LineCountRule {
        fn id(&self) -> &'static str {
            "line-count"
        }
        fn description(&self) -> &'static str {
            "Reports the number of lines"
        }
        fn enabled(&self) -> bool {
            true
        }
        fn set_enabled(&mut self, _enabled: bool) {}
        fn severity(&self) -> Severity {
            Severity::Info
        }
        fn set_severity(&mut self, _severity: Severity) {}
        fn check(&self, text: &str) -> Vec<Problem> {
            vec![Problem::new(
                self.id(),
                self.severity(),
                1,
                1,
                format!("{} lines", text.lines().count()),
            )]
        }
    }

    fn engine_with_stub() -> RuleEngine {
        RuleEngine::with_rules(vec![Box::new(LineCountRule) as RuleBox])
    }

    #[test]
    fn discovers_go_files_and_skips_vendor() {
        let tmp = TempDir::new().expect("temp dir");
        fs::write(tmp.path().join("main.go"), "package main\n").expect("write");
        fs::write(tmp.path().join("notes.txt"), "not go\n").expect("write");
        fs::create_dir_all(tmp.path().join("vendor/dep")).expect("mkdir");
        fs::write(tmp.path().join("vendor/dep/dep.go"), "package dep\n").expect("write");

        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .build()
            .expect("analyzer should build");
        let result = analyzer.analyze().expect("analysis should succeed");

        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn problems_carry_relative_paths_sorted_by_file() {
        let tmp = TempDir::new().expect("temp dir");
        fs::write(tmp.path().join("b.go"), "package b\n").expect("write");
        fs::write(tmp.path().join("a.go"), "package a\n").expect("write");

        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .engine(engine_with_stub())
            .build()
            .expect("analyzer should build");
        let result = analyzer.analyze().expect("analysis should succeed");

        let files: Vec<String> = result
            .problems
            .iter()
            .map(|p| p.file.display().to_string())
            .collect();
        assert_eq!(files, vec!["a.go", "b.go"]);
    }

    #[test]
    fn custom_exclude_patterns() {
        let tmp = TempDir::new().expect("temp dir");
        fs::create_dir_all(tmp.path().join("gen")).expect("mkdir");
        fs::write(tmp.path().join("gen/out.go"), "package gen\n").expect("write");
        fs::write(tmp.path().join("main.go"), "package main\n").expect("write");

        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .exclude("**/gen/**")
            .build()
            .expect("analyzer should build");
        let result = analyzer.analyze().expect("analysis should succeed");

        assert_eq!(result.files_checked, 1);
    }
}
