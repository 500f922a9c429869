//! fgen
//!
//! Command-line interface for the Fortran interface generator and its
//! companion header tools.

mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::{Cli, Commands};
use commands::GenerateArgs;
use config::FgenConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = init_tracing(cli.quiet, cli.verbose) {
        eprintln!("fgen error: {error:#}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("fgen error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = FgenConfig::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Generate { header, output, module, line_budget, stamp } => commands::generate(
            GenerateArgs {
                header: &header,
                output: output.as_deref(),
                module,
                line_budget,
                stamp,
            },
            &config,
        ),
        Commands::CheckApi { source, header, prefix, strict } => {
            commands::check_api(&source, &header, prefix, strict, &config)
        }
        Commands::ExtractStrings { schema, header, output } => {
            commands::extract_strings(&schema, header, output.as_deref())
        }
        Commands::FileToString { file, output } => commands::file_to_string(&file, output.as_deref()),
    }
}

/// Logs go to stderr; stdout is reserved for generated text.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
