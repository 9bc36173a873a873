//! CSV format handling for ledger rows and standings output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRow structure for deserialization
//! - Conversion and validation from CSV rows to match records
//! - Standings table output serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{MatchRecord, StandingsError, TeamStanding};
use std::io::Write;

/// Output column order for the standings table
pub const OUTPUT_HEADER: [&str; 10] = [
    "Team",
    "Wins",
    "Ties",
    "Losses",
    "Points_mod",
    "Points_standard",
    "Goals_Scored",
    "Goals_Conceded",
    "Goal_Difference",
    "Rank",
];

/// CSV row structure for deserialization
///
/// Matches the input CSV format with columns: HomeTeam, AwayTeam, HomeGoals,
/// AwayGoals. Additional columns are ignored. Every field is optional at this
/// stage so that a missing column surfaces as a named validation error in
/// [`convert_row`] rather than an opaque serde failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct CsvRow {
    #[serde(rename = "HomeTeam")]
    pub home_team: Option<String>,
    #[serde(rename = "AwayTeam")]
    pub away_team: Option<String>,
    #[serde(rename = "HomeGoals")]
    pub home_goals: Option<String>,
    #[serde(rename = "AwayGoals")]
    pub away_goals: Option<String>,
}

/// Convert a CsvRow to a validated MatchRecord
///
/// This function:
/// - Requires all four fields to be present and non-empty
/// - Parses both goal values as non-negative integers
/// - Rejects rows where home and away name the same team
///
/// # Arguments
///
/// * `row` - The deserialized CSV row
/// * `row_index` - 1-based data row index, used for error context
///
/// # Returns
///
/// * `Ok(MatchRecord)` - Successfully validated record
/// * `Err(StandingsError::MalformedInput)` - Validation failure naming the
///   row and field
pub fn convert_row(row: CsvRow, row_index: usize) -> Result<MatchRecord, StandingsError> {
    let home_team = require_team(row.home_team, row_index, "HomeTeam")?;
    let away_team = require_team(row.away_team, row_index, "AwayTeam")?;

    if home_team == away_team {
        return Err(StandingsError::malformed_input(
            row_index,
            "AwayTeam",
            format!("home and away name the same team '{}'", home_team),
        ));
    }

    let home_goals = parse_goals(row.home_goals, row_index, "HomeGoals")?;
    let away_goals = parse_goals(row.away_goals, row_index, "AwayGoals")?;

    Ok(MatchRecord {
        home_team,
        away_team,
        home_goals,
        away_goals,
    })
}

/// Require a team name field to be present and non-empty
fn require_team(
    value: Option<String>,
    row_index: usize,
    field: &str,
) -> Result<String, StandingsError> {
    match value {
        Some(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        Some(_) => Err(StandingsError::malformed_input(
            row_index,
            field,
            "value is empty",
        )),
        None => Err(StandingsError::malformed_input(
            row_index,
            field,
            "missing required column",
        )),
    }
}

/// Parse a goal field as a non-negative integer
fn parse_goals(
    value: Option<String>,
    row_index: usize,
    field: &str,
) -> Result<u32, StandingsError> {
    let raw = match value {
        Some(raw) if !raw.trim().is_empty() => raw,
        Some(_) => {
            return Err(StandingsError::malformed_input(
                row_index,
                field,
                "value is empty",
            ))
        }
        None => {
            return Err(StandingsError::malformed_input(
                row_index,
                field,
                "missing required column",
            ))
        }
    };

    let trimmed = raw.trim();
    trimmed.parse::<u32>().map_err(|_| {
        let message = if trimmed.starts_with('-') {
            format!("negative goal value '{}'", trimmed)
        } else {
            format!("expected a non-negative integer, got '{}'", trimmed)
        };
        StandingsError::malformed_input(row_index, field, message)
    })
}

/// Write a standings table to CSV format
///
/// Writes the table with the columns in [`OUTPUT_HEADER`] order. The table
/// is expected to already be sorted by rank ascending; rows are written in
/// the order given.
///
/// # Arguments
///
/// * `standings` - The ranked standings table to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(StandingsError::Io)` if a write error occurred
pub fn write_standings_csv(
    standings: &[TeamStanding],
    output: &mut dyn Write,
) -> Result<(), StandingsError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record(OUTPUT_HEADER)
        .map_err(|e| StandingsError::Io {
            message: format!("Failed to write CSV header: {}", e),
        })?;

    for standing in standings {
        writer
            .write_record(&[
                standing.team.clone(),
                standing.wins.to_string(),
                standing.ties.to_string(),
                standing.losses.to_string(),
                standing.points_modified.to_string(),
                standing.points_standard.to_string(),
                standing.goals_scored.to_string(),
                standing.goals_conceded.to_string(),
                standing.goal_difference.to_string(),
                standing.rank.to_string(),
            ])
            .map_err(|e| StandingsError::Io {
                message: format!("Failed to write standings record: {}", e),
            })?;
    }

    writer.flush().map_err(|e| StandingsError::Io {
        message: format!("Failed to flush output: {}", e),
    })?;

    Ok(())
}
