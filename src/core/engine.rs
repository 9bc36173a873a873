//! Standings computation engine
//!
//! This module provides the StandingsEngine that folds a match ledger into a
//! ranked standings table under a given scoring configuration.
//!
//! The original row-by-row mutation of a shared table is expressed here as a
//! pure fold over the match sequence: the engine owns its working aggregates
//! exclusively for the duration of one `compute` call, and the same ledger
//! and configuration always produce the identical table.

use crate::core::ledger::Ledger;
use crate::types::{ScoringConfig, StandingsError, StandingsTable, TeamStanding};
use std::collections::HashMap;

/// Standings computation engine
///
/// Holds the active scoring configuration and computes ranked standings
/// tables from ledgers. Purely functional given its inputs: no state
/// survives between `compute` calls.
#[derive(Debug, Clone, Copy)]
pub struct StandingsEngine {
    config: ScoringConfig,
}

impl StandingsEngine {
    /// Create an engine for the given scoring configuration
    pub fn new(config: ScoringConfig) -> Self {
        StandingsEngine { config }
    }

    /// Fold the ledger into a ranked standings table
    ///
    /// Initializes one zeroed standing per team, folds over the matches in
    /// order, derives goal difference, sorts, and assigns ranks.
    ///
    /// # Sorting and tie-breaking
    ///
    /// Teams are sorted descending by `(points_modified, goal_difference,
    /// goals_scored)`. Any residual tie keeps the teams in first-appearance
    /// ledger order (the sort is stable over the initialization order), and
    /// equal-tuple teams still receive distinct consecutive ranks.
    ///
    /// # Errors
    ///
    /// Returns `StandingsError::EmptyLedger` when the ledger holds no
    /// matches; with no matches, no teams can be enumerated, so an empty
    /// table would be silently misleading.
    pub fn compute(&self, ledger: &Ledger) -> Result<StandingsTable, StandingsError> {
        if ledger.is_empty() {
            return Err(StandingsError::EmptyLedger);
        }

        let mut table: Vec<TeamStanding> = ledger
            .teams()
            .iter()
            .map(|team| TeamStanding::new(team.as_str()))
            .collect();

        let index: HashMap<&str, usize> = ledger
            .teams()
            .iter()
            .enumerate()
            .map(|(position, team)| (team.as_str(), position))
            .collect();

        for record in ledger.matches() {
            // The team set is derived from the matches, so both lookups are
            // infallible; a miss is an internal invariant violation.
            let home = *index
                .get(record.home_team.as_str())
                .expect("home team missing from team set derived from ledger");
            let away = *index
                .get(record.away_team.as_str())
                .expect("away team missing from team set derived from ledger");

            table[home].goals_scored += record.home_goals;
            table[home].goals_conceded += record.away_goals;
            table[away].goals_scored += record.away_goals;
            table[away].goals_conceded += record.home_goals;

            if record.home_goals > record.away_goals {
                table[home].wins += 1;
                table[away].losses += 1;
            } else if record.home_goals < record.away_goals {
                table[away].wins += 1;
                table[home].losses += 1;
            } else {
                table[home].ties += 1;
                table[away].ties += 1;
            }

            // Reference score line: fixed 3/1/0 regardless of the active
            // scheme, shown alongside the modified points in the table.
            let (home_standard, away_standard) =
                ScoringConfig::standard_points_for(record.home_goals, record.away_goals);
            table[home].points_standard += home_standard;
            table[away].points_standard += away_standard;

            let (home_modified, away_modified) =
                self.config.points_for(record.home_goals, record.away_goals);
            table[home].points_modified += home_modified;
            table[away].points_modified += away_modified;
        }

        for standing in &mut table {
            standing.goal_difference =
                standing.goals_scored as i32 - standing.goals_conceded as i32;
        }

        // Stable sort: equal keys keep first-appearance order.
        table.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

        for (position, standing) in table.iter_mut().enumerate() {
            standing.rank = position + 1;
        }

        Ok(table)
    }
}
