use super::*;
use crate::analyzer::checks::test_support::{extended, run};
use crate::config::{RuleCatalog, RuleSet, Severity};

#[test]
fn concatenated_select_is_flagged() {
    let findings = extended(
        &SecurityChecks,
        "String q = \"SELECT * FROM users WHERE id = \" + id;",
    );

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::SqlInjection);
    assert_eq!(findings[0].severity, Severity::Blocker);
}

#[test]
fn constant_select_is_fine() {
    assert!(extended(&SecurityChecks, "String q = \"SELECT 1\";").is_empty());
}

#[test]
fn hardcoded_password_variants() {
    for line in [
        "password = \"abc123\";",
        "String dbPassword = \"hunter2\";",
        "pwd='secret';",
        "SENHA = \"x\";",
    ] {
        let findings = extended(&SecurityChecks, line);
        assert_eq!(findings.len(), 1, "{line}");
        assert_eq!(findings[0].kind, FindingKind::HardcodedPassword);
        assert_eq!(findings[0].category, CategoryId::Security);
        assert_eq!(findings[0].severity, Severity::Blocker);
    }
}

#[test]
fn password_from_variable_is_fine() {
    assert!(extended(&SecurityChecks, "password = System.getenv(\"DB_PASS\");").is_empty());
    assert!(extended(&SecurityChecks, "password = \"\";").is_empty());
}

#[test]
fn security_is_extended_only() {
    let findings = run(
        &SecurityChecks,
        &RuleCatalog::default(),
        RuleSet::Basic,
        "password = \"abc123\";",
    );
    assert!(findings.is_empty());
}

#[test]
fn disabled_category_yields_nothing() {
    let mut catalog = RuleCatalog::default();
    catalog.set_category_enabled("security", false);

    let content = "q = \"SELECT \" + x; password = \"abc\";";
    assert!(run(&SecurityChecks, &catalog, RuleSet::Extended, content).is_empty());
}
