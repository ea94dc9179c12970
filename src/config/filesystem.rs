use std::io;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "java-guard";

/// The filesystem view the config loader works against; mocked in its tests.
pub trait FileSystem {
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Whether `path` is a regular file. A directory that happens to carry a
    /// config file name is not a candidate.
    fn is_file(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// `java-guard` directory under the platform config root
    /// (`~/.config/java-guard` on Linux), if the platform has one.
    fn user_config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
