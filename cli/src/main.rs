//! Railsight CLI
//!
//! Command-line companion for the Railsight platform. Runs the same
//! triage rules as the API server, but locally over files and
//! arguments, printing JSON to stdout.
//!
//! # Usage
//!
//! ```bash
//! railsight --help
//! railsight report "urgent bolt issue in zone 7"
//! railsight score --file samples.json
//! railsight summarize --file samples.json
//! ```

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::models::SensorSample;
use shared::triage::{parse_report, score_samples, summarize_samples};
use std::path::PathBuf;

/// Railsight CLI - track triage from the command line
#[derive(Parser)]
#[command(name = "railsight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API server URL
    #[arg(
        short,
        long,
        env = "RAILSIGHT_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API server health
    Health,
    /// Triage a free-text inspection report
    Report {
        /// The report text
        text: String,
    },
    /// Score a JSON array of sensor samples for anomalies
    Score {
        /// Path to a JSON file holding an array of samples
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Summarize a JSON array of sensor samples
    Summarize {
        /// Path to a JSON file holding an array of samples
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn load_samples(path: &PathBuf) -> Result<Vec<SensorSample>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid sample JSON in {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Health) => {
            println!("Checking health of Railsight API at {}...", cli.api_url);
            println!("Health check not yet implemented");
        }
        Some(Commands::Report { text }) => {
            let analysis = parse_report(&text);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Some(Commands::Score { file }) => {
            let samples = load_samples(&file)?;
            let points = score_samples(&samples);
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
        Some(Commands::Summarize { file }) => {
            let samples = load_samples(&file)?;
            let summary = summarize_samples(&samples)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        None => {
            println!("Railsight CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
