//! Scoring configuration for the standings engine
//!
//! This module defines the two point-award schemes as a tagged union consumed
//! via exhaustive pattern matching. Adding a third scheme means adding a
//! variant and one match arm; the schemes stay mutually exclusive.
//!
//! The configuration is serde-deserializable (internally tagged by `mode`)
//! so it can be loaded from a TOML file as an alternative to CLI flags.

use serde::Deserialize;

/// Points awarded under the fixed reference scheme for a win
pub const STANDARD_WIN_POINTS: i32 = 3;

/// Points awarded under the fixed reference scheme to each side of a draw
pub const STANDARD_TIE_POINTS: i32 = 1;

/// Points by margin of victory (or defeat) in a decisive match
///
/// Margins are bucketed into one goal, two goals, and three or more goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarginPoints {
    /// Points for a one-goal margin
    pub one: i32,
    /// Points for a two-goal margin
    pub two: i32,
    /// Points for a margin of three or more goals
    pub three_plus: i32,
}

impl MarginPoints {
    /// Look up the points for a decisive margin
    ///
    /// The margin must be at least 1; draws never reach this table.
    pub fn for_margin(&self, margin: u32) -> i32 {
        match margin {
            0 => unreachable!("draws are scored by DrawPoints, not MarginPoints"),
            1 => self.one,
            2 => self.two,
            _ => self.three_plus,
        }
    }
}

/// Points awarded to both sides of a draw, keyed by the shared score
///
/// Draws are classified by how many goals each side scored, capped at 3:
/// 0-0, 1-1, 2-2, and 3-3 or higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawPoints {
    /// Points for a 0-0 draw
    pub zero: i32,
    /// Points for a 1-1 draw
    pub one: i32,
    /// Points for a 2-2 draw
    pub two: i32,
    /// Points for a 3-3 or higher draw
    pub three_plus: i32,
}

impl DrawPoints {
    /// Look up the points for a draw where each side scored `goals`
    pub fn for_score(&self, goals: u32) -> i32 {
        match goals {
            0 => self.zero,
            1 => self.one,
            2 => self.two,
            _ => self.three_plus,
        }
    }
}

/// Point-award scheme for the modified points column
///
/// The engine always computes the fixed 3/1/0 reference score line alongside;
/// this configuration only controls `points_modified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ScoringConfig {
    /// Flat points per outcome, regardless of score line
    Standard {
        /// Points awarded to the winner
        win_points: i32,
        /// Points awarded to each side of a draw
        tie_points: i32,
        /// Points awarded to the loser
        loss_points: i32,
    },

    /// Points depend on the margin of victory, or the exact draw score
    ///
    /// Loss values are typically negative, meaning a heavy defeat subtracts
    /// points. That is intended behavior, not an error case.
    GoalDifference {
        /// Winner's points by margin bucket
        win_by_margin: MarginPoints,
        /// Loser's points by margin bucket
        loss_by_margin: MarginPoints,
        /// Both sides' points by draw score bucket
        draw_by_score: DrawPoints,
    },
}

impl ScoringConfig {
    /// Modified points awarded to (home, away) for a single match
    ///
    /// This is the single dispatch point between the two schemes; both arms
    /// are exhaustive over the match outcome.
    pub fn points_for(&self, home_goals: u32, away_goals: u32) -> (i32, i32) {
        match *self {
            ScoringConfig::Standard {
                win_points,
                tie_points,
                loss_points,
            } => {
                if home_goals > away_goals {
                    (win_points, loss_points)
                } else if home_goals < away_goals {
                    (loss_points, win_points)
                } else {
                    (tie_points, tie_points)
                }
            }
            ScoringConfig::GoalDifference {
                win_by_margin,
                loss_by_margin,
                draw_by_score,
            } => {
                if home_goals == away_goals {
                    let points = draw_by_score.for_score(home_goals);
                    (points, points)
                } else {
                    let margin = home_goals.abs_diff(away_goals);
                    let win = win_by_margin.for_margin(margin);
                    let loss = loss_by_margin.for_margin(margin);
                    if home_goals > away_goals {
                        (win, loss)
                    } else {
                        (loss, win)
                    }
                }
            }
        }
    }

    /// Reference points awarded to (home, away) under the fixed 3/1/0 scheme
    ///
    /// Always computed, regardless of the active scheme, as the canonical
    /// comparison column in the output table.
    pub fn standard_points_for(home_goals: u32, away_goals: u32) -> (i32, i32) {
        if home_goals > away_goals {
            (STANDARD_WIN_POINTS, 0)
        } else if home_goals < away_goals {
            (0, STANDARD_WIN_POINTS)
        } else {
            (STANDARD_TIE_POINTS, STANDARD_TIE_POINTS)
        }
    }
}
