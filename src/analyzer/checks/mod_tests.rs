use super::*;

#[test]
fn categories_run_in_catalog_order() {
    let order: Vec<CategoryId> = all().iter().map(|c| c.category()).collect();
    assert_eq!(order, CategoryId::RULE_CATEGORIES.to_vec());
}

#[test]
fn exceeds_handles_negative_limits() {
    assert!(exceeds(0, -1));
    assert!(exceeds(121, 120));
    assert!(!exceeds(120, 120));
    assert!(!exceeds(5, i64::MAX));
}

#[test]
fn preceding_window_is_clamped_at_file_start() {
    let lines = ["a", "b", "c", "d"];
    let stats = FileStats::default();
    let patterns = Patterns::new();
    let ctx = LineContext {
        lines: &lines,
        index: 2,
        stats: &stats,
        patterns: &patterns,
    };

    assert_eq!(ctx.preceding(20), &["a", "b"]);
    assert_eq!(ctx.preceding(1), &["b"]);
    assert!(ctx.preceding(0).is_empty());
    assert_eq!(ctx.number(), 3);
    assert_eq!(ctx.next_line(), Some("d"));
}

#[test]
fn scope_hides_extended_rules_from_basic_pass() {
    let catalog = RuleCatalog::default();
    let basic = RuleScope::new(&catalog, RuleSet::Basic, CategoryId::Security);
    let extended = RuleScope::new(&catalog, RuleSet::Extended, CategoryId::Security);

    assert!(basic.rule("hardcoded-passwords").is_none());
    assert!(extended.rule("hardcoded-passwords").is_some());
}
