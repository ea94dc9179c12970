use crate::analyzer::source::{self, leading_spaces, leading_whitespace};
use crate::analyzer::types::{Finding, FindingKind};
use crate::config::catalog::{keys, params};
use crate::config::{CategoryId, Rule};

use super::{CategoryChecks, LineContext, RuleScope, exceeds};

const DEFAULT_MAX_LENGTH: i64 = 120;

/// Formatting checks: indentation, braces, line length, whitespace, comments.
pub struct StandardsChecks;

impl CategoryChecks for StandardsChecks {
    fn category(&self) -> CategoryId {
        CategoryId::CodingStandards
    }

    fn check_line(&self, ctx: &LineContext<'_>, rules: &RuleScope<'_>, out: &mut Vec<Finding>) {
        if let Some(rule) = rules.rule(keys::INDENTATION)
            && let Some(finding) = indentation(ctx, rules, rule)
        {
            out.push(finding);
        }
        if let Some(rule) = rules.rule(keys::BRACES)
            && let Some(finding) = braces(ctx, rules, rule)
        {
            out.push(finding);
        }
        if let Some(rule) = rules.rule(keys::LINE_LENGTH) {
            let max = rule.param_or(params::MAX_LENGTH, DEFAULT_MAX_LENGTH);
            let length = ctx.line().chars().count();
            if exceeds(length, max) {
                out.push(rules.finding(
                    rule,
                    FindingKind::LineLength,
                    ctx.number(),
                    format!("Line too long: {length} characters (max {max})"),
                    "Break the line into several shorter lines.",
                ));
            }
        }
        if let Some(rule) = rules.rule(keys::TRAILING_WHITESPACE)
            && ctx.line().ends_with([' ', '\t'])
        {
            out.push(rules.finding(
                rule,
                FindingKind::TrailingWhitespace,
                ctx.number(),
                "Trailing whitespace",
                "Remove spaces and tabs at the end of the line.",
            ));
        }
        if let Some(rule) = rules.rule(keys::INLINE_COMMENTS)
            && let Some(start) = source::line_comment_start(ctx.line())
            && !ctx.line()[..start].trim().is_empty()
        {
            out.push(rules.finding(
                rule,
                FindingKind::InlineComment,
                ctx.number(),
                "Inline comment after code",
                "Move the comment to its own line above the code.",
            ));
        }
    }
}

fn indentation(ctx: &LineContext<'_>, rules: &RuleScope<'_>, rule: &Rule) -> Option<Finding> {
    let line = ctx.line();
    if line.trim().is_empty() {
        return None;
    }

    let indent = leading_whitespace(line);
    if indent.contains(' ') && indent.contains('\t') {
        return Some(rules.finding(
            rule,
            FindingKind::Indentation,
            ctx.number(),
            "Mixed tabs and spaces in indentation",
            "Indent with spaces only or tabs only.",
        ));
    }

    // Neither a multiple of 2 nor of 4.
    let spaces = leading_spaces(line);
    (spaces % 2 != 0).then(|| {
        rules.finding(
            rule,
            FindingKind::Indentation,
            ctx.number(),
            format!("Inconsistent indentation: {spaces} spaces"),
            "Indent consistently by 2 or 4 spaces.",
        )
    })
}

fn braces(ctx: &LineContext<'_>, rules: &RuleScope<'_>, rule: &Rule) -> Option<Finding> {
    let trimmed = ctx.trimmed();
    let patterns = ctx.patterns;

    if patterns.control_header.is_match(trimmed) || patterns.bare_else.is_match(trimmed) {
        let next = ctx.next_line()?.trim();
        if next.is_empty() || next.starts_with('{') || source::is_comment(next) {
            return None;
        }
        return Some(rules.finding(
            rule,
            FindingKind::Braces,
            ctx.number(),
            format!("Control statement without braces: {trimmed}"),
            "Always wrap control statement bodies in {}.",
        ));
    }

    patterns.malformed_else_if.is_match(trimmed).then(|| {
        rules.finding(
            rule,
            FindingKind::MalformedElseIf,
            ctx.number(),
            "Malformed else-if",
            "Write \"else if\" instead of \"else { if\".",
        )
    })
}

#[cfg(test)]
#[path = "standards_tests.rs"]
mod tests;
