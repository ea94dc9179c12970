use clap::Parser;
use log::LevelFilter;

use java_guard::cli::{Cli, Commands};
use java_guard::commands::{run_analyze, run_init, run_rules};

const fn log_level(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.quiet, cli.verbose))
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let exit_code = match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
