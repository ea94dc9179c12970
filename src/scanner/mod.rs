mod filter;

pub use filter::{FileFilter, SourceFileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// Unreadable entries are logged and skipped; an unlistable root yields
    /// an empty list.
    ///
    /// # Errors
    /// Implementations may fail on conditions that make the whole scan
    /// meaningless; per-entry failures are never errors.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    max_depth: usize,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        if !root.is_dir() {
            log::warn!("Cannot list {}: not a directory", root.display());
            return Vec::new();
        }

        // walkdir keeps its own stack of open directories, so deep trees do
        // not grow the call stack.
        let walker = WalkDir::new(root)
            .follow_links(true)
            .max_depth(self.max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !e.file_type().is_dir() || self.filter.should_descend(e.path())
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let location = err
                        .path()
                        .map_or_else(|| root.display().to_string(), |p| p.display().to_string());
                    log::warn!("Skipping unreadable entry {location}: {err}");
                    continue;
                }
            };

            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let files = self.scan_impl(root);
        log::info!("Discovered {} source files under {}", files.len(), root.display());
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
