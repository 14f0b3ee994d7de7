//! Fix command implementation.
//!
//! Runs the full analysis, then rewrites each affected file with its
//! suggested fixes applied.

use anyhow::{Context, Result};
use go_practices_core::{apply_fixes, Analyzer, Problem};
use go_practices_rules::engine_from_config;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runs the fix command.
pub fn run(path: &Path, exclude: Vec<String>, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(path, config_path)?;
    let engine = engine_from_config(&config).context("Failed to construct rules")?;

    let mut builder = Analyzer::builder().root(path).engine(engine);
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }
    let analyzer = builder.build().context("Failed to build analyzer")?;

    let result = analyzer.analyze().context("Analysis failed")?;

    // Group problems by file; positions refer to that file's text
    let mut by_file: BTreeMap<PathBuf, Vec<Problem>> = BTreeMap::new();
    for fp in result.problems {
        by_file.entry(fp.file).or_default().push(fp.problem);
    }

    let mut files_changed = 0;
    let mut total_applied = 0;

    for (file, problems) in by_file {
        let full_path = analyzer.root().join(&file);
        let text = std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read {}", full_path.display()))?;

        let outcome = apply_fixes(&text, &problems);
        if outcome.applied == 0 || outcome.text == text {
            continue;
        }

        std::fs::write(&full_path, &outcome.text)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;

        println!("{}: applied {} fix(es)", file.display(), outcome.applied);
        files_changed += 1;
        total_applied += outcome.applied;
    }

    println!(
        "\nApplied {} fix(es) in {} file(s) ({} file(s) checked)",
        total_applied, files_changed, result.files_checked
    );

    Ok(())
}
