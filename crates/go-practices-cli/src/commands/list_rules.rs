//! List rules command implementation.

use anyhow::{Context, Result};
use go_practices_core::Config;
use go_practices_rules::default_rules;

/// Runs the list-rules command.
pub fn run() -> Result<()> {
    let rules = default_rules(&Config::default()).context("Failed to construct rules")?;

    println!("Available rules:\n");
    println!("{:<22} {:<10} Description", "Id", "Severity");
    println!("{}", "-".repeat(70));

    for rule in &rules {
        println!(
            "{:<22} {:<10} {}",
            rule.id(),
            rule.severity().to_string(),
            rule.description()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  go-practices check --rules go-naming,go-error-handling");

    Ok(())
}
