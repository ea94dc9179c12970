//! Rule checks, one module per catalog category.

mod performance;
mod production;
mod security;
mod smells;
mod standards;

pub use performance::PerformanceChecks;
pub use production::ProductionChecks;
pub use security::SecurityChecks;
pub use smells::SmellChecks;
pub use standards::StandardsChecks;

use crate::config::{CategoryId, Rule, RuleCatalog, RuleSet};

use super::patterns::Patterns;
use super::source;
use super::types::{FileStats, Finding, FindingKind};

/// The line under inspection plus everything a check may look at around it.
pub struct LineContext<'a> {
    pub lines: &'a [&'a str],
    pub index: usize,
    pub stats: &'a FileStats,
    pub patterns: &'a Patterns,
}

impl<'a> LineContext<'a> {
    #[must_use]
    pub fn line(&self) -> &'a str {
        self.lines[self.index]
    }

    #[must_use]
    pub fn trimmed(&self) -> &'a str {
        self.line().trim()
    }

    /// 1-based line number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn next_line(&self) -> Option<&'a str> {
        self.lines.get(self.index + 1).copied()
    }

    /// Up to `count` lines immediately before the current one.
    #[must_use]
    pub fn preceding(&self, count: usize) -> &'a [&'a str] {
        &self.lines[self.index.saturating_sub(count)..self.index]
    }

    #[must_use]
    pub fn code(&self) -> &'a str {
        source::code_part(self.line())
    }
}

/// Rule lookup for one category, restricted to the active rule set.
pub struct RuleScope<'a> {
    catalog: &'a RuleCatalog,
    rule_set: RuleSet,
    category: CategoryId,
}

impl<'a> RuleScope<'a> {
    #[must_use]
    pub const fn new(catalog: &'a RuleCatalog, rule_set: RuleSet, category: CategoryId) -> Self {
        Self {
            catalog,
            rule_set,
            category,
        }
    }

    /// The rule if it and its category are enabled for this pass.
    #[must_use]
    pub fn rule(&self, key: &str) -> Option<&'a Rule> {
        self.catalog.active_rule(self.category, key, self.rule_set)
    }

    /// Build a finding carrying this category and the rule's configured severity.
    #[must_use]
    pub fn finding(
        &self,
        rule: &Rule,
        kind: FindingKind,
        line: usize,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Finding {
        Finding::new(kind, self.category, rule.severity, line, message, suggestion)
    }
}

/// Checks owned by one rule category.
pub trait CategoryChecks: Send + Sync {
    fn category(&self) -> CategoryId;

    /// Append findings for the current line.
    fn check_line(&self, ctx: &LineContext<'_>, rules: &RuleScope<'_>, out: &mut Vec<Finding>);

    /// Append whole-file findings. Runs after every line has been checked.
    fn check_file(&self, _stats: &FileStats, _rules: &RuleScope<'_>, _out: &mut Vec<Finding>) {}
}

/// All categories in evaluation order.
#[must_use]
pub fn all() -> Vec<Box<dyn CategoryChecks>> {
    vec![
        Box::new(StandardsChecks),
        Box::new(SmellChecks),
        Box::new(ProductionChecks),
        Box::new(PerformanceChecks),
        Box::new(SecurityChecks),
    ]
}

/// `count > limit` where the limit comes from an unvalidated integer parameter.
#[must_use]
pub fn exceeds(count: usize, limit: i64) -> bool {
    !i64::try_from(count).is_ok_and(|count| count <= limit)
}


#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
