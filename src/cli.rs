use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::AnalysisMode;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Serialization used by `rules`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CatalogFormat {
    #[default]
    Toml,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "java-guard")]
#[command(author, version, about = "Rule-based static analysis for Java source trees")]
#[command(long_about = "Scans a directory of Java sources, applies coding-standard, \
    code-smell, production-readiness, performance and security rules, and reports \
    findings, technical debt and a quality gate.\n\n\
    Exit codes:\n  \
    0 - Quality gate passed\n  \
    1 - Quality gate failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a source tree and report findings
    Analyze(AnalyzeArgs),

    /// Print the effective rule catalog
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Root directory to analyze
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Analysis mode [possible values: extended, basic, legacy]
    #[arg(long)]
    pub mode: Option<AnalysisMode>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable a category or a single rule (CATEGORY or CATEGORY.RULE, repeatable)
    #[arg(long, value_name = "CATEGORY[.RULE]")]
    pub disable: Vec<String>,

    /// Maximum line length (overrides config)
    #[arg(long)]
    pub max_line_length: Option<i64>,

    /// Analyze files on the current thread only
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: CatalogFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".java-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
