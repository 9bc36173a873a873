//! Per-team standing state
//!
//! This module defines the TeamStanding structure accumulated by the
//! standings engine while folding over the match ledger.

/// Aggregated standing for a single team
///
/// One instance exists per distinct team in the ledger. Counters are updated
/// incrementally as matches are folded; `goal_difference` and `rank` are
/// derived only after all matches have been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    /// Team name as it appears in the ledger
    pub team: String,

    /// Matches won
    pub wins: u32,

    /// Matches drawn
    pub ties: u32,

    /// Matches lost
    pub losses: u32,

    /// Points under the caller-selected scoring scheme
    ///
    /// May be negative in goal-difference mode, where loss values typically
    /// subtract points.
    pub points_modified: i32,

    /// Points under the fixed 3/1/0 reference scheme
    ///
    /// Always computed alongside the modified points as a comparison column.
    pub points_standard: i32,

    /// Total goals scored across all matches
    pub goals_scored: u32,

    /// Total goals conceded across all matches
    pub goals_conceded: u32,

    /// goals_scored - goals_conceded, derived after the fold
    pub goal_difference: i32,

    /// Position in the sorted table, 1-based, derived after sorting
    ///
    /// Ranks are assigned by sorted position, so teams with identical sort
    /// tuples still receive distinct consecutive ranks.
    pub rank: usize,
}

impl TeamStanding {
    /// Create a zeroed standing for a team
    pub fn new(team: impl Into<String>) -> Self {
        TeamStanding {
            team: team.into(),
            wins: 0,
            ties: 0,
            losses: 0,
            points_modified: 0,
            points_standard: 0,
            goals_scored: 0,
            goals_conceded: 0,
            goal_difference: 0,
            rank: 0,
        }
    }

    /// Sort key for the standings table: descending by this tuple
    pub fn sort_key(&self) -> (i32, i32, u32) {
        (self.points_modified, self.goal_difference, self.goals_scored)
    }
}

/// Ranked standings table, sorted by rank ascending
pub type StandingsTable = Vec<TeamStanding>;
