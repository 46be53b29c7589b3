//! Jstack Analyzer CLI
//!
//! Counts reactor and boundedElastic threads in jstack dumps and reports
//! which of them sit in blocking RestTemplate calls or socket reads.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use jstack_analyzer::commands::{execute_analyze, AnalyzeArgs};
use jstack_analyzer::utils::config::EXIT_OUTPUT_FAILED;
use jstack_analyzer::utils::AnalyzeError;

const USAGE: &str = "Usage: analyze-jstack <jstack_dir_or_files...>";

/// Jstack Analyzer - spot blocked reactor event loops in thread dumps
#[derive(Parser, Debug)]
#[command(name = "analyze-jstack")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Dump files, or directories whose *.txt files are analyzed
    #[arg(value_name = "JSTACK_DIR_OR_FILES")]
    paths: Vec<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            EXIT_OUTPUT_FAILED
        }
    };

    process::exit(code);
}

/// Parse arguments, run the analysis and map the outcome to an exit code
fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Logs go to stderr; keep them quiet unless asked so stdout stays a clean table
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AnalyzeArgs { paths: cli.paths };
    let mut stdout = io::stdout().lock();

    match execute_analyze(&args, &mut stdout) {
        Ok(_) => Ok(0),
        Err(err @ AnalyzeError::NoInputs) => {
            writeln!(stdout, "{}", USAGE).context("Failed to print usage")?;
            Ok(err.exit_code())
        }
        Err(err @ AnalyzeError::NoFilesFound) => {
            writeln!(stdout, "{}", err).context("Failed to print message")?;
            Ok(err.exit_code())
        }
        Err(err) => Err(err).context("Failed to print report"),
    }
}
