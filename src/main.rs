//! Wordle Pal - CLI
//!
//! Review Wordle guess paths from the command line, in bulk, or over HTTP.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use wordle_pal::{
    commands::{
        ReviewConfig, format_batch_json, format_batch_results, parse_batch, run_batch, run_review,
        summarize,
    },
    logging,
    server::{self, config::ServerConfig},
    wordlists::default_reviewer,
};

#[derive(Parser)]
#[command(
    name = "wordle_pal",
    about = "Measure how much each Wordle guess narrows the answer pool",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Review one guess path against a target word
    Review {
        /// Target word for the puzzle
        #[arg(short, long)]
        target: String,

        /// Comma separated list of guesses, in order
        #[arg(short, long, default_value = "")]
        path: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Show feedback codes and pool sizes for each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Review every `target: guess,guess,...` line of a file in parallel
    Batch {
        /// File with one path per line
        file: PathBuf,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the web interface and JSON API
    Serve {
        #[arg(
            short,
            long,
            help = "Listen address [default: $WORDLE_PAL_LISTEN or 127.0.0.1:8080]"
        )]
        listen: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);
    debug!(debug = cli.debug, "command started");

    match cli.command {
        Commands::Review {
            target,
            path,
            json,
            verbose,
        } => run_review_command(&ReviewConfig {
            target,
            raw_path: path,
            json,
            verbose,
        }),
        Commands::Batch { file, json } => run_batch_command(&file, json),
        Commands::Serve { listen } => run_serve_command(listen.as_deref()),
    }
}

fn run_review_command(config: &ReviewConfig) -> Result<()> {
    let output = run_review(config, &default_reviewer())?;
    print!("{output}");
    Ok(())
}

fn run_batch_command(file: &Path, json: bool) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read batch file '{}'", file.display()))?;

    let entries = parse_batch(&content);
    let show_progress = !json && std::io::stderr().is_terminal();
    let outcomes = run_batch(entries, &default_reviewer(), show_progress);
    let summary = summarize(&outcomes);
    info!(reviewed = summary.reviewed, failed = summary.failed, "batch complete");

    if json {
        println!("{}", format_batch_json(&outcomes, &summary));
    } else {
        println!("{}", format_batch_results(&outcomes, &summary));
    }
    Ok(())
}

fn run_serve_command(listen: Option<&str>) -> Result<()> {
    let config = ServerConfig::resolve(listen)?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(server::serve(config))
}
