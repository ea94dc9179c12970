mod checks;
mod patterns;
mod source;
mod types;

pub use types::{FileAnalysis, FileStats, Finding, FindingKind};

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_MAX_FILE_SIZE, RuleCatalog, RuleSet};

use checks::{CategoryChecks, LineContext, RuleScope};
use patterns::Patterns;

/// Runs every active rule over a file, line by line, then the whole-file checks.
///
/// The catalog is owned and read-only, so one analyzer can be shared across
/// threads for a whole scan.
pub struct FileAnalyzer {
    catalog: RuleCatalog,
    rule_set: RuleSet,
    max_file_size: u64,
    patterns: Patterns,
    checks: Vec<Box<dyn CategoryChecks>>,
}

impl FileAnalyzer {
    #[must_use]
    pub fn new(catalog: RuleCatalog, rule_set: RuleSet) -> Self {
        Self {
            catalog,
            rule_set,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            patterns: Patterns::new(),
            checks: checks::all(),
        }
    }

    #[must_use]
    pub const fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    #[must_use]
    pub const fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Analyze one file on disk.
    ///
    /// Never fails: read errors and oversized files come back as a single
    /// `general` finding so the rest of the scan can continue.
    #[must_use]
    pub fn analyze_file(&self, path: &Path) -> FileAnalysis {
        match fs::metadata(path) {
            Ok(meta) if meta.len() > self.max_file_size => {
                log::debug!("Skipping {} ({} bytes)", path.display(), meta.len());
                return FileAnalysis::unreadable(
                    path.to_path_buf(),
                    FindingKind::FileTooLarge,
                    format!(
                        "File too large to analyze: {} bytes (limit {})",
                        meta.len(),
                        self.max_file_size
                    ),
                    "Raise scanner.max_file_size or exclude the file.",
                );
            }
            Ok(_) => {}
            Err(e) => return Self::read_failure(path, &e),
        }

        match fs::read(path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                if let Cow::Owned(_) = content {
                    log::debug!("{} is not valid UTF-8, decoded lossily", path.display());
                }
                self.analyze_source(path, &content)
            }
            Err(e) => Self::read_failure(path, &e),
        }
    }

    fn read_failure(path: &Path, error: &std::io::Error) -> FileAnalysis {
        log::debug!("Failed to read {}: {error}", path.display());
        FileAnalysis::unreadable(
            path.to_path_buf(),
            FindingKind::FileError,
            format!("Failed to read file: {error}"),
            "Check that the file exists and is readable.",
        )
    }

    /// Analyze already-loaded source text.
    #[must_use]
    pub fn analyze_source(&self, path: impl Into<PathBuf>, content: &str) -> FileAnalysis {
        let path = path.into();
        let lines = source::split_lines(content);
        let stats = self.file_stats(content, lines.len());

        let scopes: Vec<RuleScope<'_>> = self
            .checks
            .iter()
            .map(|check| RuleScope::new(&self.catalog, self.rule_set, check.category()))
            .collect();

        let mut findings = Vec::new();
        for index in 0..lines.len() {
            let ctx = LineContext {
                lines: &lines,
                index,
                stats: &stats,
                patterns: &self.patterns,
            };
            for (check, scope) in self.checks.iter().zip(&scopes) {
                check.check_line(&ctx, scope, &mut findings);
            }
        }
        for (check, scope) in self.checks.iter().zip(&scopes) {
            check.check_file(&stats, scope, &mut findings);
        }

        log::debug!(
            "Analyzed {}: {} lines, {} findings",
            path.display(),
            stats.total_lines,
            findings.len()
        );

        FileAnalysis {
            path,
            findings,
            stats,
        }
    }

    fn file_stats(&self, content: &str, total_lines: usize) -> FileStats {
        FileStats {
            total_lines,
            method_count: self.patterns.method_signature.find_iter(content).count(),
            class_count: self.patterns.class_declaration.find_iter(content).count(),
            imports: self.patterns.import_statement.find_iter(content).count(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
