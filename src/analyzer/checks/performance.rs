use crate::analyzer::types::{Finding, FindingKind};
use crate::config::CategoryId;
use crate::config::catalog::{keys, params};

use super::{CategoryChecks, LineContext, RuleScope};

const DEFAULT_LOOKBACK: i64 = 20;

/// String building inside loops. `unnecessary-loops` and `resource-leaks`
/// have no check.
pub struct PerformanceChecks;

impl CategoryChecks for PerformanceChecks {
    fn category(&self) -> CategoryId {
        CategoryId::Performance
    }

    fn check_line(&self, ctx: &LineContext<'_>, rules: &RuleScope<'_>, out: &mut Vec<Finding>) {
        let Some(rule) = rules.rule(keys::STRING_CONCATENATION) else {
            return;
        };
        let trimmed = ctx.trimmed();
        if !(trimmed.contains('+') && trimmed.contains('"')) {
            return;
        }

        let lookback = usize::try_from(rule.param_or(params::LOOKBACK_LINES, DEFAULT_LOOKBACK))
            .unwrap_or(0);
        let in_loop = ctx
            .preceding(lookback)
            .iter()
            .any(|line| ctx.patterns.loop_header.is_match(line));
        if in_loop {
            out.push(rules.finding(
                rule,
                FindingKind::StringConcatenation,
                ctx.number(),
                "String concatenation inside a loop",
                "Use a StringBuilder when building strings in loops.",
            ));
        }
    }
}

#[cfg(test)]
#[path = "performance_tests.rs"]
mod tests;
