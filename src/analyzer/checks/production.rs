use crate::analyzer::types::{Finding, FindingKind};
use crate::config::CategoryId;
use crate::config::catalog::keys;

use super::{CategoryChecks, LineContext, RuleScope};

const DEBUG_CALLS: [&str; 3] = ["System.out.print", "printStackTrace()", "console.log"];

/// Leftovers that should not ship: debug output, TODO markers, magic numbers.
///
/// `exception-handling` has no check.
pub struct ProductionChecks;

impl CategoryChecks for ProductionChecks {
    fn category(&self) -> CategoryId {
        CategoryId::ProductionReadiness
    }

    fn check_line(&self, ctx: &LineContext<'_>, rules: &RuleScope<'_>, out: &mut Vec<Finding>) {
        let trimmed = ctx.trimmed();

        if let Some(rule) = rules.rule(keys::DEBUG_CODE)
            && let Some(call) = DEBUG_CALLS.iter().find(|call| trimmed.contains(**call))
        {
            out.push(rules.finding(
                rule,
                FindingKind::DebugCode,
                ctx.number(),
                format!("Debug output found: {call}"),
                "Use a proper logging framework in production code.",
            ));
        }

        if let Some(rule) = rules.rule(keys::TODO_COMMENTS)
            && let Some(marker) = ctx.patterns.todo_marker.find(trimmed)
        {
            out.push(rules.finding(
                rule,
                FindingKind::TodoComment,
                ctx.number(),
                format!("Development marker found: {}", marker.as_str()),
                "Resolve or remove the marker before releasing.",
            ));
        }

        if let Some(rule) = rules.rule(keys::HARDCODED_VALUES)
            && let Some(number) = ctx.patterns.magic_number.find(ctx.code())
        {
            out.push(rules.finding(
                rule,
                FindingKind::MagicNumber,
                ctx.number(),
                format!("Magic number: {}", number.as_str()),
                "Replace the literal with a named constant.",
            ));
        }
    }
}

#[cfg(test)]
#[path = "production_tests.rs"]
mod tests;
