use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analyzer::{FileAnalysis, FileAnalyzer};
use crate::config::{AnalysisMode, Config, MetricsConfig, RuleCatalog};
use crate::error::{JavaGuardError, Result};
use crate::report::{self, AnalysisResult};
use crate::scanner::{DirectoryScanner, FileScanner, SourceFileFilter};

/// One configured scan: discovery, per-file analysis and aggregation.
///
/// Everything is built up front from a [`Config`]; nothing changes while a
/// scan runs.
pub struct Engine {
    scanner: DirectoryScanner<SourceFileFilter>,
    analyzer: FileAnalyzer,
    metrics: MetricsConfig,
    mode: AnalysisMode,
    parallel: bool,
}

impl Engine {
    /// # Errors
    /// Returns an error if an exclude pattern is invalid.
    pub fn new(config: &Config) -> Result<Self> {
        let filter = SourceFileFilter::from_config(&config.scanner)?;
        let scanner = DirectoryScanner::new(filter).with_max_depth(config.scanner.max_depth);
        let analyzer = FileAnalyzer::new(config.rule_catalog(), config.analysis.mode.rule_set())
            .with_max_file_size(config.scanner.max_file_size);

        Ok(Self {
            scanner,
            analyzer,
            metrics: config.metrics,
            mode: config.analysis.mode,
            parallel: config.analysis.parallel,
        })
    }

    #[must_use]
    pub const fn catalog(&self) -> &RuleCatalog {
        self.analyzer.catalog()
    }

    #[must_use]
    pub const fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// Check that `root` exists and return its canonical form.
    ///
    /// A root that is not a directory is accepted here; discovery finds
    /// nothing under it.
    ///
    /// # Errors
    /// `PathNotFound` if it does not exist, `PathUnreadable` if its metadata
    /// cannot be read.
    pub fn validate_root(root: &Path) -> Result<PathBuf> {
        fs::metadata(root).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                JavaGuardError::PathNotFound(root.to_path_buf())
            } else {
                JavaGuardError::PathUnreadable {
                    path: root.to_path_buf(),
                    source: e,
                }
            }
        })?;
        dunce::canonicalize(root).map_err(|e| JavaGuardError::PathUnreadable {
            path: root.to_path_buf(),
            source: e,
        })
    }

    /// Source files under an already validated root.
    ///
    /// # Errors
    /// Propagates scanner errors.
    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.scanner.scan(root)
    }

    /// Analyze `files`, keeping their order. `on_file` is called once per file
    /// after it has been analyzed, possibly from several threads.
    pub fn analyze_files<P>(&self, files: &[PathBuf], on_file: P) -> Vec<FileAnalysis>
    where
        P: Fn(&Path) + Sync,
    {
        let analyze = |path: &PathBuf| {
            let analysis = self.analyzer.analyze_file(path);
            on_file(path);
            analysis
        };

        if self.parallel {
            files.par_iter().map(analyze).collect()
        } else {
            files.iter().map(analyze).collect()
        }
    }

    #[must_use]
    pub fn aggregate(&self, root: PathBuf, files: Vec<FileAnalysis>) -> AnalysisResult {
        report::aggregate(root, files, &self.metrics, self.mode)
    }

    /// Run a whole scan.
    ///
    /// # Errors
    /// Fails only when the root itself cannot be used. Unreadable entries and
    /// files are reported inside the result.
    pub fn run(&self, root: &Path) -> Result<AnalysisResult> {
        let root = Self::validate_root(root)?;
        let files = self.discover(&root)?;
        let analyses = self.analyze_files(&files, |_| {});
        Ok(self.aggregate(root, analyses))
    }
}

/// Analyze every source file under `root` with the given configuration.
///
/// # Errors
/// See [`Engine::run`]; also fails on an invalid exclude pattern.
pub fn analyze(root: &Path, config: &Config) -> Result<AnalysisResult> {
    Engine::new(config)?.run(root)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
