//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# go-practices configuration

# Each rule can be enabled/disabled and have its severity overridden
# (one of "error", "warning", "info").

[naming]
enabled = true
# severity = "warning"
# Custom patterns override the built-in naming conventions
# package_name_regex = "^[a-z][a-z0-9]*$"
# function_name_regex = "^[a-zA-Z][a-zA-Z0-9]*$"

[error]
enabled = true
# severity = "warning"

[formatting]
enabled = true
# severity = "info"
max_line_length = 100
indent_width = 4
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("go-practices.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created go-practices.toml");
    println!("\nNext steps:");
    println!("  1. Edit go-practices.toml to configure rules");
    println!("  2. Run: go-practices check");

    Ok(())
}
