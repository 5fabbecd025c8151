mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::lists::split_list;
use crate::input::{InputError, load_input};
use crate::model::error::TopsisError;
use crate::pipeline::run_topsis;
use crate::pipeline::stage1_validate::run_stage1;
use crate::pipeline::stage7_report::{ReportError, ReportTargets, Stage7Input, write_reports};

#[derive(Debug, Parser)]
#[command(name = "topsis-rank", version)]
#[command(about = "Rank alternatives in a decision table with TOPSIS", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank every row of a decision table
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Input table (CSV/TSV, optionally .gz); first column identifies alternatives
    input: PathBuf,

    /// Comma-separated positive weights, one per criterion (e.g. "1,1,2")
    #[arg(allow_hyphen_values = true)]
    weights: String,

    /// Comma-separated impacts, '+' to maximize or '-' to minimize (e.g. "+,-,+")
    #[arg(allow_hyphen_values = true)]
    impacts: String,

    /// Output table; the input columns plus "Topsis Score" and "Rank"
    result: PathBuf,

    /// Field delimiter; defaults to tab for .tsv inputs and comma otherwise
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,

    /// Decimal places for written scores (default: shortest exact form)
    #[arg(long)]
    precision: Option<usize>,

    /// Write only the identifier, score and rank columns
    #[arg(long)]
    compact: bool,

    /// Also write a JSON summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Also write a plain-text report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    input: PathBuf,
    weights: Vec<String>,
    impacts: Vec<String>,
    result: PathBuf,
    delimiter: Option<u8>,
    precision: Option<usize>,
    compact: bool,
    summary: Option<PathBuf>,
    report: Option<PathBuf>,
    verbose: u8,
    quiet: bool,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Topsis(#[from] TopsisError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };
    logging::init(config.verbose, config.quiet);

    if let Err(err) = run(&config) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), RunError> {
    let bundle = load_input(&config.input, config.delimiter)?;

    let validated = run_stage1(&bundle.table, &config.weights, &config.impacts)?;
    let outcome = run_topsis(&validated)?;

    for warning in &outcome.result.warnings {
        tracing::warn!("{warning}");
    }

    let input = Stage7Input {
        bundle: &bundle,
        validated: &validated,
        outcome: &outcome,
        precision: config.precision,
        compact: config.compact,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let targets = ReportTargets {
        result: config.result.clone(),
        summary: config.summary.clone(),
        report: config.report.clone(),
    };
    write_reports(&input, &targets)?;

    tracing::info!(
        criteria = validated.matrix.n_criteria(),
        alternatives = validated.matrix.n_alternatives(),
        "scored {} alternatives over {} criteria",
        validated.matrix.n_alternatives(),
        validated.matrix.n_criteria()
    );

    Ok(())
}

fn parse_args<I, T>(args: I) -> Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let Command::Run(args) = cli.command;
    Ok(RunConfig {
        weights: split_list(&args.weights),
        impacts: split_list(&args.impacts),
        input: args.input,
        result: args.result,
        delimiter: args.delimiter,
        precision: args.precision,
        compact: args.compact,
        summary: args.summary,
        report: args.report,
        verbose: args.verbose,
        quiet: args.quiet,
    })
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!("delimiter must be a single ASCII character, got {raw:?}")),
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
