use std::path::PathBuf;

use super::*;

fn analyze_args(argv: &[&str]) -> AnalyzeArgs {
    let cli = Cli::parse_from(argv);
    match cli.command {
        Commands::Analyze(args) => args,
        _ => panic!("Expected Analyze command"),
    }
}

#[test]
fn analyze_defaults() {
    let args = analyze_args(&["java-guard", "analyze"]);

    assert_eq!(args.path, PathBuf::from("."));
    assert_eq!(args.config, None);
    assert_eq!(args.mode, None);
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.disable.is_empty());
    assert!(!args.sequential);
}

#[test]
fn analyze_with_path_and_format() {
    let args = analyze_args(&["java-guard", "analyze", "src/main/java", "-f", "json"]);

    assert_eq!(args.path, PathBuf::from("src/main/java"));
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn analyze_with_mode() {
    let args = analyze_args(&["java-guard", "analyze", "--mode", "legacy"]);

    assert_eq!(args.mode, Some(AnalysisMode::Legacy));
}

#[test]
fn analyze_rejects_unknown_mode() {
    let result = Cli::try_parse_from(["java-guard", "analyze", "--mode", "strict"]);

    assert!(result.is_err());
}

#[test]
fn analyze_disable_is_repeatable() {
    let args = analyze_args(&[
        "java-guard",
        "analyze",
        "--disable",
        "security",
        "--disable",
        "coding-standards.line-length",
    ]);

    assert_eq!(args.disable, vec!["security", "coding-standards.line-length"]);
}

#[test]
fn analyze_overrides() {
    let args = analyze_args(&[
        "java-guard",
        "analyze",
        "--max-line-length",
        "100",
        "--sequential",
        "-o",
        "report.json",
    ]);

    assert_eq!(args.max_line_length, Some(100));
    assert!(args.sequential);
    assert_eq!(args.output, Some(PathBuf::from("report.json")));
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::parse_from(["java-guard", "analyze", "-vv", "--color", "never", "--no-config"]);

    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.no_config);
    assert!(!cli.quiet);
}

#[test]
fn rules_default_format_is_toml() {
    let cli = Cli::parse_from(["java-guard", "rules"]);
    match cli.command {
        Commands::Rules(args) => assert_eq!(args.format, CatalogFormat::Toml),
        _ => panic!("Expected Rules command"),
    }
}

#[test]
fn rules_json_format() {
    let cli = Cli::parse_from(["java-guard", "rules", "--format", "json"]);
    match cli.command {
        Commands::Rules(args) => assert_eq!(args.format, CatalogFormat::Json),
        _ => panic!("Expected Rules command"),
    }
}

#[test]
fn init_defaults() {
    let cli = Cli::parse_from(["java-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".java-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn init_with_force() {
    let cli = Cli::parse_from(["java-guard", "init", "-o", "custom.toml", "--force"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from("custom.toml"));
            assert!(args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["java-guard"]).is_err());
}
