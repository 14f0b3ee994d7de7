//! # go-practices-core
//!
//! Core framework for Go best-practices linting.
//!
//! This crate provides the foundational pieces of the lint pipeline:
//!
//! - [`scanner`] for extracting lexical markers from Go source text
//! - [`Rule`] trait for document-text rules
//! - [`RuleEngine`] for orchestrating rule execution over a document
//! - [`Analyzer`] for running the engine over a directory of Go files
//! - [`Problem`] for representing lint findings, with optional fixes
//! - [`apply_fixes`] for applying suggested fixes to text
//!
//! ## Example
//!
//! ```ignore
//! use go_practices_core::{Analyzer, RuleEngine};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./internal")
//!     .engine(engine)
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod engine;
mod fix;
mod rule;
mod types;

/// Lexical scanning of Go source text.
pub mod scanner;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{Config, ConfigError, ErrorConfig, FormattingConfig, NamingConfig};
pub use engine::RuleEngine;
pub use fix::{apply_fixes, FixOutcome};
pub use rule::{Rule, RuleBox};
pub use types::{
    FileProblem, FixInfo, LintResult, Problem, ProblemDiagnostic, Replacement, Severity,
};
