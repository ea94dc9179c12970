use crate::analyzer::types::{Finding, FindingKind};
use crate::config::CategoryId;
use crate::config::catalog::keys;

use super::{CategoryChecks, LineContext, RuleScope};

/// Injection-prone SQL building and credentials in source.
///
/// `unsafe-deserialization` has no check.
pub struct SecurityChecks;

impl CategoryChecks for SecurityChecks {
    fn category(&self) -> CategoryId {
        CategoryId::Security
    }

    fn check_line(&self, ctx: &LineContext<'_>, rules: &RuleScope<'_>, out: &mut Vec<Finding>) {
        let trimmed = ctx.trimmed();

        if let Some(rule) = rules.rule(keys::SQL_INJECTION)
            && trimmed.contains("SELECT")
            && trimmed.contains('+')
            && trimmed.contains(['"', '\''])
        {
            out.push(rules.finding(
                rule,
                FindingKind::SqlInjection,
                ctx.number(),
                "Possible SQL injection: query built by concatenation",
                "Use a PreparedStatement with bound parameters.",
            ));
        }

        if let Some(rule) = rules.rule(keys::HARDCODED_PASSWORDS)
            && ctx.patterns.hardcoded_password.is_match(trimmed)
        {
            out.push(rules.finding(
                rule,
                FindingKind::HardcodedPassword,
                ctx.number(),
                "Hardcoded password",
                "Load credentials from the environment or a secrets store.",
            ));
        }
    }
}

#[cfg(test)]
#[path = "security_tests.rs"]
mod tests;
