//! Roshambo CLI - play Rock Paper Scissors against the computer.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::Parser;
use roshambo::RandomSource;
use std::path::PathBuf;
use std::process::ExitCode;

/// Roshambo - Rock Paper Scissors against a uniformly random computer
#[derive(Parser, Debug)]
#[command(name = "roshambo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Play line by line on stdin/stdout instead of the TUI
    #[arg(long)]
    plain: bool,

    /// Output format for --plain: text or json
    #[arg(short, long, default_value = "text")]
    format: cli::OutputFormat,

    /// Seed the computer's moves for a reproducible session (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory with icon art (fist.txt, hand-paper.txt, scissors.txt, error.txt)
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Also write debug diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show info diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), cli::CliError> {
    cli::logging::init(args.log_file.as_deref(), args.verbose)?;

    // One generator for the whole session
    let source = args
        .seed
        .map_or_else(RandomSource::from_entropy, RandomSource::seeded);
    if let Some(seed) = args.seed {
        log::info!("Seeded session: {seed}");
    }

    if args.plain {
        cli::plain::execute(source, args.format)
    } else {
        cli::tui::execute(source, args.assets.as_deref())
    }
}
