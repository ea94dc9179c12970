use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::ColorMode;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from an explicit path, the default locations, or
/// nowhere at all when `no_config` is set.
///
/// # Errors
/// Returns an error if a configuration file exists but cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        log::debug!("Configuration loading disabled, using defaults");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write output to a file or stdout.
///
/// `quiet` only suppresses stdout; file writes always happen.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        log::info!("Report written to {}", path.display());
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
