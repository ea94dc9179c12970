//! Folder-level aggregation of per-file analyses.

mod legacy;
mod metrics;

pub use metrics::{QualityGate, TechnicalDebt};

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::analyzer::FileAnalysis;
use crate::config::{AnalysisMode, CategoryId, MetricsConfig, Severity};

/// Whether the histograms were counted or approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakdown {
    Measured,
    Approximate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Always 0: no check detects duplication.
    pub duplicated_code_blocks: usize,
    /// Always 0: no check measures complexity.
    pub average_method_complexity: usize,
    pub technical_debt: TechnicalDebt,
    pub quality_gate: QualityGate,
}

/// The complete outcome of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The scanned directory.
    pub root: PathBuf,
    pub total_files: usize,
    pub files_with_errors: usize,
    pub total_issues: usize,
    pub issues_by_severity: IndexMap<Severity, usize>,
    pub issues_by_category: IndexMap<CategoryId, usize>,
    pub files: Vec<FileAnalysis>,
    pub summary: Summary,
    pub mode: AnalysisMode,
    pub breakdown: Breakdown,
}

impl AnalysisResult {
    #[must_use]
    pub fn severity_count(&self, severity: Severity) -> usize {
        self.issues_by_severity.get(&severity).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn category_count(&self, category: CategoryId) -> usize {
        self.issues_by_category.get(&category).copied().unwrap_or(0)
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        self.summary.quality_gate.is_passed()
    }
}

/// Combine per-file analyses into the folder result.
///
/// `files` keeps its order. In [`AnalysisMode::Legacy`] the histograms are
/// fixed shares of the total and the summary is fixed at no debt and a passing
/// gate.
#[must_use]
pub fn aggregate(
    root: PathBuf,
    files: Vec<FileAnalysis>,
    metrics: &MetricsConfig,
    mode: AnalysisMode,
) -> AnalysisResult {
    let total_files = files.len();
    let files_with_errors = files.iter().filter(|f| f.has_findings()).count();
    let total_issues = files.iter().map(|f| f.findings.len()).sum();

    let (issues_by_severity, issues_by_category, summary, breakdown) =
        if mode == AnalysisMode::Legacy {
            (
                legacy::severity_breakdown(total_issues),
                legacy::category_breakdown(total_issues),
                Summary {
                    duplicated_code_blocks: 0,
                    average_method_complexity: 0,
                    technical_debt: TechnicalDebt::default(),
                    quality_gate: QualityGate::Passed,
                },
                Breakdown::Approximate,
            )
        } else {
            let by_severity = count_by_severity(&files);
            let by_category = count_by_category(&files);
            let summary = summarize(&by_severity, metrics);
            (by_severity, by_category, summary, Breakdown::Measured)
        };

    log::info!(
        "Aggregated {total_files} files: {total_issues} findings, gate {}",
        summary.quality_gate
    );

    AnalysisResult {
        root,
        total_files,
        files_with_errors,
        total_issues,
        issues_by_severity,
        issues_by_category,
        files,
        summary,
        mode,
        breakdown,
    }
}

fn count_by_severity(files: &[FileAnalysis]) -> IndexMap<Severity, usize> {
    let mut counts: IndexMap<Severity, usize> =
        Severity::DESCENDING.iter().map(|&s| (s, 0)).collect();
    for finding in files.iter().flat_map(|f| &f.findings) {
        *counts.entry(finding.severity).or_default() += 1;
    }
    counts
}

/// Every rule category is present; `general` only when it occurs.
fn count_by_category(files: &[FileAnalysis]) -> IndexMap<CategoryId, usize> {
    let mut counts: IndexMap<CategoryId, usize> =
        CategoryId::RULE_CATEGORIES.iter().map(|&c| (c, 0)).collect();
    for finding in files.iter().flat_map(|f| &f.findings) {
        *counts.entry(finding.category).or_default() += 1;
    }
    counts
}

fn summarize(by_severity: &IndexMap<Severity, usize>, metrics: &MetricsConfig) -> Summary {
    let count = |severity: Severity| by_severity.get(&severity).copied().unwrap_or(0);
    Summary {
        duplicated_code_blocks: 0,
        average_method_complexity: 0,
        technical_debt: TechnicalDebt::estimate(by_severity, &metrics.debt_minutes),
        quality_gate: QualityGate::evaluate(
            count(Severity::Blocker),
            count(Severity::Critical),
            &metrics.quality_gate,
        ),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
