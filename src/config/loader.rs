use std::path::{Path, PathBuf};

use crate::error::{JavaGuardError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".java-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.java-guard.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. `Config::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.user_config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(JavaGuardError::from)
    }

    fn read_config(&self, path: &Path) -> Result<Config> {
        let content = self.fs.read_to_string(path).map_err(|source| {
            JavaGuardError::Config(format!(
                "Failed to read config file {}: {source}",
                path.display()
            ))
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::parse_config(&content)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.is_file(&path) {
                return self.read_config(&path);
            }
        }

        log::debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
