use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::config::{DebtWeights, QualityGateConfig, Severity};

/// Pass/fail verdict over the severity histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityGate {
    Passed,
    Failed,
}

impl QualityGate {
    /// Passes iff both counts are within their (inclusive) bounds.
    #[must_use]
    pub const fn evaluate(blocker: usize, critical: usize, policy: &QualityGateConfig) -> Self {
        if blocker <= policy.max_blocker && critical <= policy.max_critical {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for QualityGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated remediation effort, in whole minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TechnicalDebt {
    minutes: u64,
}

impl TechnicalDebt {
    #[must_use]
    pub const fn from_minutes(minutes: u64) -> Self {
        Self { minutes }
    }

    /// Weighted sum of the severity histogram.
    #[must_use]
    pub fn estimate(by_severity: &IndexMap<Severity, usize>, weights: &DebtWeights) -> Self {
        let minutes = by_severity.iter().fold(0u64, |acc, (severity, count)| {
            let count = u64::try_from(*count).unwrap_or(u64::MAX);
            acc.saturating_add(count.saturating_mul(weights.for_severity(*severity)))
        });
        Self { minutes }
    }

    #[must_use]
    pub const fn minutes(self) -> u64 {
        self.minutes
    }

    #[must_use]
    pub const fn hours(self) -> u64 {
        self.minutes / 60
    }
}

impl fmt::Display for TechnicalDebt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}min", self.hours(), self.minutes % 60)
    }
}

impl Serialize for TechnicalDebt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
