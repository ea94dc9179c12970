//! Code smell checks.
//!
//! Both checks are whole-file heuristics: a "long method" is any public
//! signature in a file whose total line count is over the limit, and a "large
//! class" is the file itself being over the limit. `complex-methods` and
//! `duplicated-code` exist in the catalog but have no check here, so they never
//! produce findings.

use crate::analyzer::types::{FileStats, Finding, FindingKind};
use crate::config::CategoryId;
use crate::config::catalog::{keys, params};

use super::{CategoryChecks, LineContext, RuleScope, exceeds};

const DEFAULT_MAX_LINES: i64 = 200;

pub struct SmellChecks;

impl CategoryChecks for SmellChecks {
    fn category(&self) -> CategoryId {
        CategoryId::CodeSmells
    }

    fn check_line(&self, ctx: &LineContext<'_>, rules: &RuleScope<'_>, out: &mut Vec<Finding>) {
        let Some(rule) = rules.rule(keys::LONG_METHODS) else {
            return;
        };
        let max = rule.param_or(params::MAX_LINES, DEFAULT_MAX_LINES);
        if exceeds(ctx.stats.total_lines, max) && ctx.patterns.public_signature.is_match(ctx.line()) {
            out.push(rules.finding(
                rule,
                FindingKind::LongMethod,
                ctx.number(),
                format!("Method may be too long (file has {} lines)", ctx.stats.total_lines),
                "Split the method into smaller ones.",
            ));
        }
    }

    fn check_file(&self, stats: &FileStats, rules: &RuleScope<'_>, out: &mut Vec<Finding>) {
        let Some(rule) = rules.rule(keys::LARGE_CLASSES) else {
            return;
        };
        if exceeds(stats.total_lines, rule.param_or(params::MAX_LINES, DEFAULT_MAX_LINES)) {
            out.push(rules.finding(
                rule,
                FindingKind::LargeClass,
                1,
                format!("Class too large: {} lines", stats.total_lines),
                "Split the class into smaller classes.",
            ));
        }
    }
}

#[cfg(test)]
#[path = "smells_tests.rs"]
mod tests;
