use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::catalog::{RuleCatalog, RulePatch, RuleSet, Severity};

/// Default directory names never descended into.
pub const DEFAULT_EXCLUDE_DIRS: [&str; 5] = [".git", "node_modules", "target", "build", "dist"];

/// Default per-file read cap (1 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Default walk depth bound.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// File discovery.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Rule set selection and execution.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Technical debt weights and quality gate policy.
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Partial rule updates, keyed by category id.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, CategoryPatch>,
}

impl Config {
    /// Build the rule catalog this configuration describes.
    ///
    /// Starts from the default catalog and applies every `[rules]` entry.
    /// Unknown categories or rules are skipped.
    #[must_use]
    pub fn rule_catalog(&self) -> RuleCatalog {
        let mut catalog = RuleCatalog::default();
        for (category, patch) in &self.rules {
            if let Some(enabled) = patch.enabled {
                catalog.set_category_enabled(category, enabled);
            }
            for (rule, rule_patch) in &patch.rules {
                catalog.update_rule(category, rule, rule_patch);
            }
        }
        catalog
    }

    /// Record a partial update for a single rule (used by CLI overrides).
    pub fn patch_rule(&mut self, category: &str, rule: &str, patch: RulePatch) {
        let entry = self
            .rules
            .entry(category.to_string())
            .or_default()
            .rules
            .entry(rule.to_string())
            .or_default();
        if patch.enabled.is_some() {
            entry.enabled = patch.enabled;
        }
        if patch.severity.is_some() {
            entry.severity = patch.severity;
        }
        entry.params.extend(patch.params);
    }

    /// Record a category toggle (used by CLI overrides).
    pub fn set_category_enabled(&mut self, category: &str, enabled: bool) {
        self.rules.entry(category.to_string()).or_default().enabled = Some(enabled);
    }
}

/// Category-level partial configuration `[rules.<category>]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Rule patches `[rules.<category>.<rule>]`.
    #[serde(flatten)]
    pub rules: IndexMap<String, RulePatch>,
}

/// Scanner configuration for file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Target file extension, matched case-insensitively.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory names skipped at any depth.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Additional glob patterns excluded from discovery.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Maximum directory depth walked below the root.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Files larger than this many bytes are reported instead of read.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            exclude_dirs: default_exclude_dirs(),
            exclude: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Which analyzer behavior to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Every implemented rule, measured breakdowns.
    #[default]
    Extended,
    /// Classic formatting/comment/debug rules only, measured breakdowns.
    Basic,
    /// Basic rules with fixed-percentage severity/category breakdowns.
    Legacy,
}

impl AnalysisMode {
    #[must_use]
    pub const fn rule_set(self) -> RuleSet {
        match self {
            Self::Extended => RuleSet::Extended,
            Self::Basic | Self::Legacy => RuleSet::Basic,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extended => "extended",
            Self::Basic => "basic",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extended" => Ok(Self::Extended),
            "basic" => Ok(Self::Basic),
            "legacy" => Ok(Self::Legacy),
            _ => Err(format!("Unknown analysis mode: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub mode: AnalysisMode,

    /// Analyze files on the rayon pool.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mode: AnalysisMode::default(),
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsConfig {
    #[serde(default)]
    pub debt_minutes: DebtWeights,

    #[serde(default)]
    pub quality_gate: QualityGateConfig,
}

/// Remediation cost per finding, in minutes, by severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebtWeights {
    #[serde(default = "default_blocker_minutes")]
    pub blocker: u64,
    #[serde(default = "default_critical_minutes")]
    pub critical: u64,
    #[serde(default = "default_major_minutes")]
    pub major: u64,
    #[serde(default)]
    pub minor: u64,
    #[serde(default)]
    pub info: u64,
}

impl DebtWeights {
    #[must_use]
    pub const fn for_severity(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Blocker => self.blocker,
            Severity::Critical => self.critical,
            Severity::Major => self.major,
            Severity::Minor => self.minor,
            Severity::Info => self.info,
        }
    }
}

impl Default for DebtWeights {
    fn default() -> Self {
        Self {
            blocker: default_blocker_minutes(),
            critical: default_critical_minutes(),
            major: default_major_minutes(),
            minor: 0,
            info: 0,
        }
    }
}

/// Quality gate policy. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualityGateConfig {
    #[serde(default)]
    pub max_blocker: usize,
    #[serde(default = "default_max_critical")]
    pub max_critical: usize,
}

impl Default for QualityGateConfig {
    fn default() -> Self {
        Self {
            max_blocker: 0,
            max_critical: default_max_critical(),
        }
    }
}

fn default_extension() -> String {
    "java".to_string()
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(ToString::to_string).collect()
}

const fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

const fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

const fn default_true() -> bool {
    true
}

const fn default_blocker_minutes() -> u64 {
    120
}

const fn default_critical_minutes() -> u64 {
    60
}

const fn default_major_minutes() -> u64 {
    30
}

const fn default_max_critical() -> usize {
    5
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
