//! CLI subcommand implementations.

pub mod check;
pub mod fix;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use go_practices_core::Config;
use std::path::Path;

use crate::config_resolver::{self, ConfigSource};

/// Loads configuration for a project directory, falling back to defaults
/// when no config file is found.
pub(crate) fn load_config(project_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    match config_resolver::resolve(project_dir, explicit) {
        ConfigSource::Default => Ok(Config::default()),
        source => {
            // Invariant: non-Default variants always have a path
            let p = source.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}
