//! Check command implementation.

use anyhow::{Context, Result};
use go_practices_core::Analyzer;
use go_practices_rules::engine_from_config;
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = super::load_config(path, config_path)?;

    let mut engine = engine_from_config(&config).context("Failed to construct rules")?;

    // Restrict to the requested rules by disabling everything else
    if let Some(filter) = rules_filter {
        let requested: Vec<&str> = filter.split(',').map(str::trim).collect();
        let wired: Vec<&'static str> = engine.rules().iter().map(|r| r.id()).collect();

        for name in &requested {
            if !wired.contains(name) {
                tracing::warn!("Unknown rule: {}", name);
            }
        }
        for id in wired {
            if let Some(rule) = engine.rule_mut(id) {
                rule.set_enabled(requested.contains(&id));
            }
        }
    }

    let mut builder = Analyzer::builder().root(path).engine(engine);
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }
    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {:?} with {} rules",
        path,
        analyzer.engine().rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    // Output results
    super::output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}
