//! diffnav CLI
//!
//! A path-aware structural diff navigator for JSON documents.
//! Compares two files, walks into the requested path, and prints a ranked
//! summary of the differences found there.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use diffnav::commands::{execute_inspect, validate_args, InspectArgs};
use diffnav::utils::config::{DEFAULT_SIGNIFICANT_DIGITS, DISPLAY_SUMMARY_TOP};

/// Diff two JSON files and navigate to a specific path
#[derive(Parser, Debug)]
#[command(name = "diffnav")]
#[command(version, about, long_about = None)]
struct Cli {
    /// First JSON file (left side)
    left: PathBuf,

    /// Second JSON file (right side)
    right: PathBuf,

    /// Dot-separated path to navigate, e.g. data.items[0].name
    path: String,

    /// Number of prefix groups shown per category
    #[arg(long, default_value_t = DISPLAY_SUMMARY_TOP)]
    top: usize,

    /// Keep additions present only in the second file
    #[arg(long)]
    keep_added: bool,

    /// Decimal places compared before a numeric difference is reported
    #[arg(long, default_value_t = DEFAULT_SIGNIFICANT_DIGITS)]
    significant_digits: u32,

    /// Compare numbers exactly instead of by decimal places
    #[arg(long, conflicts_with = "significant_digits")]
    exact: bool,

    /// Report integer vs float as a type change
    #[arg(long)]
    numeric_type_changes: bool,

    /// Print the raw diff as JSON instead of the ranked summary
    #[arg(long)]
    raw: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; the report owns stdout, so logs stay quiet unless asked for
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = InspectArgs {
        left: cli.left,
        right: cli.right,
        path: cli.path,
        top: cli.top,
        keep_added: cli.keep_added,
        significant_digits: if cli.exact {
            None
        } else {
            Some(cli.significant_digits)
        },
        numeric_type_changes: cli.numeric_type_changes,
        raw: cli.raw,
    };

    // Validate args first
    validate_args(&args)?;

    // Execute inspection
    execute_inspect(args)?;

    Ok(())
}
