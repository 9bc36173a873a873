//! End-to-end standings pipeline
//!
//! Orchestrates the full flow: read and validate the match ledger, fold it
//! into a ranked standings table under the active scoring configuration,
//! and write the table as CSV.
//!
//! Unlike error handling in streaming systems that skip bad records, a
//! malformed row here aborts the whole run: the computation is deterministic
//! and a partial table would be silently wrong.

use crate::core::{Ledger, StandingsEngine};
use crate::io::write_standings_csv;
use crate::types::{ScoringConfig, StandingsError};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Compute standings from a CSV ledger file and write the table to `output`
///
/// # Arguments
///
/// * `input_path` - Path to the input CSV match ledger
/// * `config` - The active scoring configuration
/// * `output` - Writer that receives the ranked standings table as CSV
///
/// # Errors
///
/// Propagates the first error from any stage: file access, row validation,
/// empty ledger, or output writing. No partial table is ever written.
pub fn run(
    input_path: &Path,
    config: &ScoringConfig,
    output: &mut dyn Write,
) -> Result<(), StandingsError> {
    let ledger = Ledger::from_path(input_path)?;
    info!(
        matches = ledger.len(),
        teams = ledger.teams().len(),
        "parsed match ledger"
    );

    let engine = StandingsEngine::new(*config);
    let table = engine.compute(&ledger)?;
    debug!(rows = table.len(), "computed standings table");

    write_standings_csv(&table, output)
}
