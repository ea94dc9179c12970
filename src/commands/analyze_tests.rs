use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::config::{AnalysisMode, CategoryId, RuleSet};

fn parse(argv: &[&str]) -> Cli {
    Cli::parse_from(argv)
}

fn args(cli: &Cli) -> &AnalyzeArgs {
    match &cli.command {
        Commands::Analyze(args) => args,
        _ => panic!("Expected Analyze command"),
    }
}

fn tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

#[test]
fn overrides_mode_and_parallelism() {
    let cli = parse(&["java-guard", "analyze", "--mode", "basic", "--sequential"]);
    let mut config = Config::default();

    apply_cli_overrides(&mut config, args(&cli));

    assert_eq!(config.analysis.mode, AnalysisMode::Basic);
    assert!(!config.analysis.parallel);
}

#[test]
fn max_line_length_patches_the_rule() {
    let cli = parse(&["java-guard", "analyze", "--max-line-length", "80"]);
    let mut config = Config::default();

    apply_cli_overrides(&mut config, args(&cli));

    let catalog = config.rule_catalog();
    let rule = catalog.rule("coding-standards", "line-length").unwrap();
    assert_eq!(rule.param_or("max_length", 0), 80);
}

#[test]
fn disable_targets_categories_and_rules() {
    let cli = parse(&[
        "java-guard",
        "analyze",
        "--disable",
        "security",
        "--disable",
        "production-readiness.todo-comments",
    ]);
    let mut config = Config::default();

    apply_cli_overrides(&mut config, args(&cli));

    let catalog = config.rule_catalog();
    assert!(!catalog.category(CategoryId::Security).unwrap().enabled);
    assert!(
        catalog
            .active_rule(CategoryId::ProductionReadiness, "todo-comments", RuleSet::Extended)
            .is_none()
    );
    assert!(
        catalog
            .active_rule(CategoryId::ProductionReadiness, "debug-code", RuleSet::Extended)
            .is_some()
    );
}

#[test]
fn clean_tree_passes_the_gate() {
    let dir = tree(&[("src/App.java", "public class App {\n}\n")]);
    let root = dir.path().to_str().unwrap();
    let cli = parse(&["java-guard", "analyze", root, "--no-config", "-q"]);

    assert_eq!(run_analyze_impl(args(&cli), &cli).unwrap(), EXIT_SUCCESS);
}

#[test]
fn blocker_fails_the_gate() {
    let dir = tree(&[(
        "src/Login.java",
        "class Login {\n    String password = \"hunter2\";\n}\n",
    )]);
    let root = dir.path().to_str().unwrap();
    let cli = parse(&["java-guard", "analyze", root, "--no-config", "-q"]);

    assert_eq!(run_analyze_impl(args(&cli), &cli).unwrap(), EXIT_GATE_FAILED);
}

#[test]
fn disabling_the_category_restores_the_gate() {
    let dir = tree(&[(
        "src/Login.java",
        "class Login {\n    String password = \"hunter2\";\n}\n",
    )]);
    let root = dir.path().to_str().unwrap();
    let cli = parse(&[
        "java-guard",
        "analyze",
        root,
        "--no-config",
        "-q",
        "--disable",
        "security",
    ]);

    assert_eq!(run_analyze_impl(args(&cli), &cli).unwrap(), EXIT_SUCCESS);
}

#[test]
fn json_report_is_written_to_file() {
    let dir = tree(&[("A.java", "class A {\n}\n")]);
    let out = dir.path().join("out/report.json");
    let root = dir.path().to_str().unwrap();
    let out_arg = out.to_str().unwrap();
    let cli = parse(&[
        "java-guard", "analyze", root, "--no-config", "-q", "-f", "json", "-o", out_arg,
    ]);

    run_analyze_impl(args(&cli), &cli).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
    assert_eq!(parsed["totalFiles"], 1);
    assert_eq!(parsed["summary"]["qualityGate"], "PASSED");
}

#[test]
fn missing_root_is_an_error_exit() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let cli = parse(&[
        "java-guard",
        "analyze",
        missing.to_str().unwrap(),
        "--no-config",
        "-q",
    ]);

    assert_eq!(run_analyze(args(&cli), &cli), EXIT_ERROR);
}
