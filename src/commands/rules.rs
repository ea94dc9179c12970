use crate::cli::{CatalogFormat, Cli, RulesArgs};
use crate::config::RuleCatalog;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::context::{load_config, write_output};

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Print the rule catalog after configuration has been applied.
///
/// # Errors
/// Returns an error if configuration cannot be loaded or serialized.
pub fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> crate::Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let output = format_catalog(&config.rule_catalog(), args.format)?;
    write_output(None, &output, false)
}

/// Serialize the category/rule tree.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_catalog(catalog: &RuleCatalog, format: CatalogFormat) -> crate::Result<String> {
    match format {
        CatalogFormat::Toml => Ok(toml::to_string_pretty(catalog.get_config())?),
        CatalogFormat::Json => {
            let mut json = serde_json::to_string_pretty(catalog.get_config())?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
