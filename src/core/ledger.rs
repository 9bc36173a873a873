//! Match ledger collection and team enumeration
//!
//! A [`Ledger`] is the validated output of the Match Ledger Parser: the full
//! ordered sequence of match records for a league plus the set of distinct
//! team names drawn from the union of the home and away columns.

use crate::io::LedgerReader;
use crate::types::{MatchRecord, StandingsError};
use std::collections::HashSet;
use std::path::Path;

/// Validated match ledger
///
/// Matches are kept in original row order (later stages do not depend on
/// order, but the contract is order-preserving for reproducibility). Teams
/// are deduplicated in first-appearance order, home before away within a
/// row; that order is the documented residual tie-break for the standings
/// sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    matches: Vec<MatchRecord>,
    teams: Vec<String>,
}

impl Ledger {
    /// Collect validated records into a ledger
    ///
    /// Consumes an iterator of parse results and aborts on the first error,
    /// so a malformed row anywhere in the input produces no ledger at all.
    ///
    /// # Errors
    ///
    /// Propagates the first `StandingsError` yielded by the iterator.
    pub fn from_records<I>(records: I) -> Result<Self, StandingsError>
    where
        I: IntoIterator<Item = Result<MatchRecord, StandingsError>>,
    {
        let mut matches = Vec::new();
        let mut teams = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for result in records {
            let record = result?;

            if seen.insert(record.home_team.clone()) {
                teams.push(record.home_team.clone());
            }
            if seen.insert(record.away_team.clone()) {
                teams.push(record.away_team.clone());
            }

            matches.push(record);
        }

        Ok(Ledger { matches, teams })
    }

    /// Read and validate a ledger from a CSV file
    ///
    /// # Errors
    ///
    /// * `StandingsError::FileNotFound` / `StandingsError::Io` if the file
    ///   cannot be opened
    /// * `StandingsError::MalformedInput` for the first invalid row
    pub fn from_path(path: &Path) -> Result<Self, StandingsError> {
        let reader = LedgerReader::new(path)?;
        Self::from_records(reader)
    }

    /// Match records in original row order
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Distinct team names in first-appearance order
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Number of match records
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the ledger holds no match records
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(home: &str, away: &str, hg: u32, ag: u32) -> Result<MatchRecord, StandingsError> {
        Ok(MatchRecord {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_goals: hg,
            away_goals: ag,
        })
    }

    #[test]
    fn test_teams_enumerated_in_first_appearance_order() {
        let ledger = Ledger::from_records(vec![
            record("Chelsea", "Arsenal", 1, 1),
            record("Liverpool", "Chelsea", 2, 0),
            record("Arsenal", "Liverpool", 3, 2),
        ])
        .unwrap();

        assert_eq!(ledger.teams(), &["Chelsea", "Arsenal", "Liverpool"]);
    }

    #[test]
    fn test_match_order_preserved() {
        let ledger = Ledger::from_records(vec![
            record("A", "B", 2, 1),
            record("B", "A", 0, 0),
        ])
        .unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.matches()[0].home_team, "A");
        assert_eq!(ledger.matches()[1].home_team, "B");
    }

    #[test]
    fn test_duplicate_teams_not_repeated() {
        let ledger = Ledger::from_records(vec![
            record("A", "B", 1, 0),
            record("A", "B", 0, 1),
            record("B", "A", 2, 2),
        ])
        .unwrap();

        assert_eq!(ledger.teams(), &["A", "B"]);
    }

    #[test]
    fn test_first_error_aborts_collection() {
        let records = vec![
            record("A", "B", 1, 0),
            Err(StandingsError::malformed_input(2, "HomeGoals", "bad value")),
            record("C", "D", 2, 2),
        ];

        let result = Ledger::from_records(records);
        assert_eq!(
            result.unwrap_err(),
            StandingsError::malformed_input(2, "HomeGoals", "bad value")
        );
    }

    #[test]
    fn test_empty_records_yield_empty_ledger() {
        let ledger = Ledger::from_records(Vec::new()).unwrap();
        assert!(ledger.is_empty());
        assert!(ledger.teams().is_empty());
    }
}
