//! League Standings CLI
//!
//! Command-line interface for computing league standings from CSV match
//! ledgers.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- matches.csv > standings.csv
//! cargo run -- --mode goal-difference matches.csv > standings.csv
//! cargo run -- --mode standard --win-points 2 --loss-points -1 matches.csv
//! cargo run -- --scoring scoring.toml matches.csv > standings.csv
//! ```
//!
//! The program reads match results from the input CSV file, folds them into
//! a ranked standings table under the selected scoring configuration, and
//! writes the table to stdout. Diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing file, malformed row, empty ledger, bad configuration)

use league_standings::{cli, pipeline};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();
    init_logging(args.verbose);

    let config = match args.to_scoring_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Standings table goes to stdout; everything else to stderr
    let mut output = std::io::stdout();
    if let Err(e) = pipeline::run(&args.input_file, &config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Install the tracing subscriber for CLI diagnostics
///
/// Respects RUST_LOG when set; otherwise defaults to info, or debug for the
/// crate when --verbose is given. Logs go to stderr so the standings table
/// on stdout stays clean.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "league_standings=debug,info"
    } else {
        "league_standings=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
