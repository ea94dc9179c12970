use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JavaGuardError {
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not readable: {path}")]
    PathUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl JavaGuardError {
    /// Short, stable tag naming the error class.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::PathNotFound(_) => "PathNotFound",
            Self::PathUnreadable { .. } => "PathUnreadable",
            Self::Config(_) => "Config",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) | Self::TomlSerialize(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Whether the error means the scan root itself could not be used.
    #[must_use]
    pub const fn is_root_error(&self) -> bool {
        matches!(self, Self::PathNotFound(_) | Self::PathUnreadable { .. })
    }
}

pub type Result<T> = std::result::Result<T, JavaGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
