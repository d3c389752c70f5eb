//! Performance ledger CLI
//!
//! Entry point for the `perf-ledger` command-line tool.

use clap::{Args, Parser, Subcommand};
use perf_ledger::telemetry::init_tracing;
use perf_ledger::{filter, filter_legacy, filter_report, EffectiveConfig};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "perf-ledger")]
#[command(about = "Extract performance averages from build console output", version)]
struct Cli {
    /// Path to a config file overriding identifier widths
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Emit logs as JSON (stderr)
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write identifier/average pairs from a console log, one per line
    Filter {
        /// Raw console output
        raw_log: PathBuf,

        /// File to write the pairs to
        output: PathBuf,

        #[command(flatten)]
        width: WidthArgs,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every average of one suite from a historical ledger
    Legacy {
        /// Previously written ledger text
        report: PathBuf,

        /// Suite name (any string)
        suite: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print one version-stamped row per supported suite
    Report {
        /// Raw console output
        raw_log: PathBuf,

        /// Version label stamped on every row
        version: String,

        #[command(flatten)]
        width: WidthArgs,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the merged configuration and where each layer came from
    Config,
}

#[derive(Args)]
struct WidthArgs {
    /// Minimum identifier word length
    #[arg(long)]
    min_width: Option<usize>,

    /// Maximum identifier word length
    #[arg(long)]
    max_width: Option<usize>,
}

impl WidthArgs {
    /// CLI layer for `section`, if any flag was given.
    fn overrides(&self, section: &str) -> Option<serde_json::Value> {
        let mut fields = serde_json::Map::new();
        if let Some(min) = self.min_width {
            fields.insert("min_width".to_string(), min.into());
        }
        if let Some(max) = self.max_width {
            fields.insert("max_width".to_string(), max.into());
        }
        if fields.is_empty() {
            return None;
        }
        let mut layer = serde_json::Map::new();
        layer.insert(section.to_string(), serde_json::Value::Object(fields));
        Some(serde_json::Value::Object(layer))
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    init_tracing(cli.log_json, level);

    match cli.command {
        Commands::Filter {
            raw_log,
            output,
            width,
            json,
        } => {
            let config = load_config(cli.config, width.overrides("filter"));
            match filter(&raw_log, &output, &config.ledger) {
                Ok(summary) if json => print_json(&summary),
                Ok(_) => {}
                Err(e) => fail(e),
            }
        }
        Commands::Legacy { report, suite, json } => {
            // Widths do not apply here, but a bad config still fails.
            load_config(cli.config, None);
            match filter_legacy(&report, &suite) {
                Ok(row) if json => print_json(&row),
                Ok(row) => println!("{}", row),
                Err(e) => fail(e),
            }
        }
        Commands::Report {
            raw_log,
            version,
            width,
            json,
        } => {
            let config = load_config(cli.config, width.overrides("report"));
            match filter_report(&raw_log, &version, &config.ledger) {
                Ok(rows) if json => print_json(&rows),
                Ok(rows) => {
                    for row in rows {
                        println!("{}", row);
                    }
                }
                Err(e) => fail(e),
            }
        }
        Commands::Config => {
            let config = load_config(cli.config, None);
            match config.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing output: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}

fn load_config(path: Option<PathBuf>, cli_overrides: Option<serde_json::Value>) -> EffectiveConfig {
    match EffectiveConfig::build(path.as_deref(), cli_overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", e);
    process::exit(1);
}
