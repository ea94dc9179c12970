use super::*;
use crate::config::{Config, RulePatch, Severity};

#[test]
fn json_lists_every_category_in_order() {
    let output = format_catalog(&RuleCatalog::default(), CatalogFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    let keys: Vec<&str> = parsed
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 5);
    assert!(keys.contains(&"coding-standards"));
    assert!(keys.contains(&"security"));
    assert_eq!(
        parsed["coding-standards"]["rules"]["line-length"]["max_length"],
        120
    );
    assert_eq!(parsed["security"]["rules"]["sql-injection"]["severity"], "blocker");
}

#[test]
fn toml_round_trips_through_the_parser() {
    let output = format_catalog(&RuleCatalog::default(), CatalogFormat::Toml).unwrap();
    let parsed: toml::Table = toml::from_str(&output).unwrap();

    let standards = parsed["coding-standards"].as_table().unwrap();
    assert_eq!(standards["name"].as_str(), Some("Coding Standards"));
    assert_eq!(standards["enabled"].as_bool(), Some(true));
}

#[test]
fn configured_overrides_are_reflected() {
    let mut config = Config::default();
    config.patch_rule(
        "performance",
        "string-concatenation",
        RulePatch {
            severity: Some(Severity::Major),
            ..RulePatch::default()
        },
    );
    config.set_category_enabled("code-smells", false);

    let output = format_catalog(&config.rule_catalog(), CatalogFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        parsed["performance"]["rules"]["string-concatenation"]["severity"],
        "major"
    );
    assert_eq!(parsed["code-smells"]["enabled"], false);
}
