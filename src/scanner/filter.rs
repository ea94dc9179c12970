use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScannerConfig;
use crate::error::{JavaGuardError, Result};

pub trait FileFilter {
    /// Whether a discovered file should be analyzed.
    fn should_include(&self, path: &Path) -> bool;

    /// Whether a directory should be descended into.
    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

/// Matches files by a case-insensitive name suffix and prunes a fixed set of
/// directory names plus any glob exclusions.
pub struct SourceFileFilter {
    suffix: String,
    exclude_dirs: Vec<String>,
    exclude_patterns: GlobSet,
}

impl SourceFileFilter {
    /// Create a new filter.
    ///
    /// `extension` may be given with or without its leading dot.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extension: &str, exclude_dirs: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| JavaGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| JavaGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffix: format!(".{}", extension.trim_start_matches('.').to_lowercase()),
            exclude_dirs,
            exclude_patterns,
        })
    }

    /// Build the filter described by the scanner section of the config.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        Self::new(&config.extension, config.exclude_dirs.clone(), &config.exclude)
    }

    fn has_valid_suffix(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for SourceFileFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_suffix(path) && !self.is_excluded(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        let named_excluded = dir
            .file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| self.exclude_dirs.iter().any(|d| *d == name));
        !named_excluded && !self.is_excluded(dir)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
