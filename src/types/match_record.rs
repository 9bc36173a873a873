//! Match-record types for the league standings engine
//!
//! This module defines the validated match record produced by the ledger
//! parser and consumed by the standings engine.

/// A single validated match result
///
/// Represents one row of the match ledger after validation. Immutable once
/// parsed: the parser guarantees that the two team names differ and that
/// both goal counts are non-negative integers (enforced by `u32`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Name of the home team
    pub home_team: String,

    /// Name of the away team
    ///
    /// Always differs from `home_team`; a row where the two names match is
    /// rejected by the parser as malformed input.
    pub away_team: String,

    /// Goals scored by the home team
    pub home_goals: u32,

    /// Goals scored by the away team
    pub away_goals: u32,
}

impl MatchRecord {
    /// Whether the match ended with unequal goals (a winner and a loser)
    pub fn is_decisive(&self) -> bool {
        self.home_goals != self.away_goals
    }

    /// Absolute goal difference between the two sides
    ///
    /// Zero for a draw; otherwise the margin of victory.
    pub fn margin(&self) -> u32 {
        self.home_goals.abs_diff(self.away_goals)
    }
}
