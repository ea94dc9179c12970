//! Legacy approximation of the severity and category breakdowns.
//!
//! Older consumers expected histograms even from the basic analyzer, which
//! never classified its findings. Those histograms were filled with fixed
//! shares of the total finding count. They are not measurements, and the
//! report says so through [`Breakdown::Approximate`](super::Breakdown).

use indexmap::IndexMap;

use crate::config::{CategoryId, Severity};

const SEVERITY_SHARES: [(Severity, f64); 5] = [
    (Severity::Blocker, 0.003),
    (Severity::Critical, 0.0),
    (Severity::Major, 0.970),
    (Severity::Minor, 0.008),
    (Severity::Info, 0.019),
];

const CATEGORY_SHARES: [(CategoryId, f64); 5] = [
    (CategoryId::CodingStandards, 0.79),
    (CategoryId::CodeSmells, 0.086),
    (CategoryId::ProductionReadiness, 0.123),
    (CategoryId::Performance, 0.0006),
    (CategoryId::Security, 0.0003),
];

#[must_use]
pub fn severity_breakdown(total: usize) -> IndexMap<Severity, usize> {
    SEVERITY_SHARES
        .iter()
        .map(|&(severity, fraction)| (severity, share(total, fraction)))
        .collect()
}

#[must_use]
pub fn category_breakdown(total: usize) -> IndexMap<CategoryId, usize> {
    CATEGORY_SHARES
        .iter()
        .map(|&(category, fraction)| (category, share(total, fraction)))
        .collect()
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn share(total: usize, fraction: f64) -> usize {
    (total as f64 * fraction).floor() as usize
}

#[cfg(test)]
#[path = "legacy_tests.rs"]
mod tests;
