use crate::cli::{AnalyzeArgs, Cli};
use crate::config::{Config, RulePatch, catalog};
use crate::engine::Engine;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, TextFormatter};
use crate::report::AnalysisResult;
use crate::{EXIT_ERROR, EXIT_GATE_FAILED, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_analyze(args: &AnalyzeArgs, cli: &Cli) -> i32 {
    match run_analyze_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            log::debug!("Analysis aborted: {}", e.error_type());
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Analyze a tree, print the report and map the quality gate to an exit code.
///
/// # Errors
/// Returns an error if configuration cannot be loaded, the root is unusable,
/// or the report cannot be written.
pub fn run_analyze_impl(args: &AnalyzeArgs, cli: &Cli) -> crate::Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    let engine = Engine::new(&config)?;
    let result = run_with_progress(&engine, args, cli.quiet)?;

    let output = format_result(&result, args.format, cli)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(if result.passed() {
        EXIT_SUCCESS
    } else {
        EXIT_GATE_FAILED
    })
}

fn run_with_progress(
    engine: &Engine,
    args: &AnalyzeArgs,
    quiet: bool,
) -> crate::Result<AnalysisResult> {
    let root = Engine::validate_root(&args.path)?;
    let files = engine.discover(&root)?;

    let progress = ScanProgress::new(files.len() as u64, quiet);
    let analyses = engine.analyze_files(&files, |path| progress.file_done(path));
    progress.finish();

    Ok(engine.aggregate(root, analyses))
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &AnalyzeArgs) {
    if let Some(mode) = args.mode {
        config.analysis.mode = mode;
    }
    if args.sequential {
        config.analysis.parallel = false;
    }
    if let Some(max_length) = args.max_line_length {
        config.patch_rule(
            catalog::CategoryId::CodingStandards.as_str(),
            catalog::keys::LINE_LENGTH,
            RulePatch::default().with_param(catalog::params::MAX_LENGTH, max_length),
        );
    }
    for target in &args.disable {
        match target.split_once('.') {
            Some((category, rule)) => {
                config.patch_rule(category, rule, RulePatch::enabled(false));
            }
            None => config.set_category_enabled(target, false),
        }
    }
}

fn format_result(result: &AnalysisResult, format: OutputFormat, cli: &Cli) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_choice_to_mode(cli.color))
            .with_suggestions(cli.verbose > 0)
            .format(result),
        OutputFormat::Json => JsonFormatter.format(result),
    }
}

#[cfg(test)]
#[path = "analyze_tests.rs"]
mod tests;
