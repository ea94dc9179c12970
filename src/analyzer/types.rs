use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::{CategoryId, Severity};

/// Tag naming the check that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    Indentation,
    Braces,
    MalformedElseIf,
    LineLength,
    TrailingWhitespace,
    InlineComment,
    LongMethod,
    LargeClass,
    DebugCode,
    TodoComment,
    MagicNumber,
    StringConcatenation,
    SqlInjection,
    HardcodedPassword,
    FileError,
    FileTooLarge,
}

impl FindingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indentation => "indentation",
            Self::Braces => "braces",
            Self::MalformedElseIf => "malformed-else-if",
            Self::LineLength => "line-length",
            Self::TrailingWhitespace => "trailing-whitespace",
            Self::InlineComment => "inline-comment",
            Self::LongMethod => "long-method",
            Self::LargeClass => "large-class",
            Self::DebugCode => "debug-code",
            Self::TodoComment => "todo-comment",
            Self::MagicNumber => "magic-number",
            Self::StringConcatenation => "string-concatenation",
            Self::SqlInjection => "sql-injection",
            Self::HardcodedPassword => "hardcoded-password",
            Self::FileError => "file-error",
            Self::FileTooLarge => "file-too-large",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub category: CategoryId,
    pub severity: Severity,
    /// 1-based line number; file-level findings use 1.
    pub line: usize,
    pub message: String,
    pub suggestion: String,
}

impl Finding {
    #[must_use]
    pub fn new(
        kind: FindingKind,
        category: CategoryId,
        severity: Severity,
        line: usize,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            category,
            severity,
            line,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Structural counts for a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    pub total_lines: usize,
    pub method_count: usize,
    pub class_count: usize,
    pub imports: usize,
}

/// Analysis output for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAnalysis {
    pub path: PathBuf,
    #[serde(rename = "issues")]
    pub findings: Vec<Finding>,
    pub stats: FileStats,
}

impl FileAnalysis {
    #[must_use]
    pub const fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// A file that could not be analyzed, reported as one `general` finding.
    #[must_use]
    pub fn unreadable(path: PathBuf, kind: FindingKind, message: String, suggestion: &str) -> Self {
        Self {
            path,
            findings: vec![Finding::new(
                kind,
                CategoryId::General,
                Severity::Major,
                1,
                message,
                suggestion,
            )],
            stats: FileStats::default(),
        }
    }
}
