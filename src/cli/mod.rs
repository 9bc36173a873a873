// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, ScoringMode};

use clap::Parser;

/// Parse command-line arguments
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
