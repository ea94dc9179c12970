use super::*;
use crate::analyzer::checks::test_support::{extended, run};
use crate::config::{RuleCatalog, RulePatch, RuleSet};

fn padded(head: &str, total_lines: usize) -> String {
    let mut content = String::from(head);
    for _ in head.lines().count()..total_lines {
        content.push_str("\nint x;");
    }
    content
}

#[test]
fn small_file_has_no_smells() {
    let content = padded("public void run() {", 50);
    assert!(extended(&SmellChecks, &content).is_empty());
}

#[test]
fn public_signature_in_big_file_is_long_method() {
    let content = padded("public void run() {", 201);
    let findings = extended(&SmellChecks, &content);

    let long: Vec<_> = findings
        .iter()
        .filter(|f| f.kind == FindingKind::LongMethod)
        .collect();
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].line, 1);
}

#[test]
fn large_class_fires_once_after_line_findings() {
    let content = padded("public void run() {", 201);
    let findings = extended(&SmellChecks, &content);

    let last = findings.last().unwrap();
    assert_eq!(last.kind, FindingKind::LargeClass);
    assert_eq!(last.line, 1);
    assert_eq!(
        findings
            .iter()
            .filter(|f| f.kind == FindingKind::LargeClass)
            .count(),
        1
    );
}

#[test]
fn exactly_max_lines_is_not_large() {
    let content = padded("class A {", 200);
    assert!(extended(&SmellChecks, &content).is_empty());
}

#[test]
fn large_class_threshold_is_configurable() {
    let mut catalog = RuleCatalog::default();
    catalog.update_rule(
        "code-smells",
        "large-classes",
        &RulePatch::default().with_param("max_lines", 2),
    );

    let findings = run(&SmellChecks, &catalog, RuleSet::Extended, "a\nb\nc");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::LargeClass);
}

#[test]
fn smells_are_extended_only() {
    let content = padded("public void run() {", 300);
    let findings = run(&SmellChecks, &RuleCatalog::default(), RuleSet::Basic, &content);
    assert!(findings.is_empty());
}

#[test]
fn disabled_category_yields_nothing() {
    let mut catalog = RuleCatalog::default();
    catalog.set_category_enabled("code-smells", false);

    let content = padded("public void run() {", 300);
    assert!(run(&SmellChecks, &catalog, RuleSet::Extended, &content).is_empty());
}
