use std::fs;

use crate::{EXIT_ERROR, EXIT_SUCCESS, JavaGuardError, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(JavaGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# java-guard configuration file

[scanner]
# File extension to analyze (matched case-insensitively)
extension = "java"

# Directory names never descended into
exclude_dirs = [".git", "node_modules", "target", "build", "dist"]

# Extra glob patterns to skip
# exclude = ["**/generated/**"]

# Files larger than this many bytes are reported, not read
max_file_size = 1048576

[analysis]
# "extended" runs every rule, "basic" only the formatting/comment/debug rules,
# "legacy" runs the basic rules and reports approximate breakdowns
mode = "extended"

# Analyze files in parallel
parallel = true

[metrics.debt_minutes]
blocker = 120
critical = 60
major = 30
minor = 0
info = 0

[metrics.quality_gate]
# The gate passes when both counts are within these bounds
max_blocker = 0
max_critical = 5

# Rule overrides. Each category can be switched off, and each rule can change
# `enabled`, `severity` and its numeric parameters.
#
# [rules.coding-standards.line-length]
# max_length = 100
#
# [rules.production-readiness.todo-comments]
# enabled = false
#
# [rules.security]
# enabled = false
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
