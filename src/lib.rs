//! League Standings Library
//! # Overview
//!
//! This library computes sports league standings from a CSV ledger of match
//! results under one of two point-award schemes.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (MatchRecord, ScoringConfig, TeamStanding, etc.)
//! - [`cli`] - CLI argument parsing and scoring-config assembly
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Validated match ledger and team enumeration
//!   - [`core::engine`] - Standings fold, sorting, and ranking
//! - [`io`] - CSV input validation and standings output
//! - [`pipeline`] - End-to-end orchestration (read, compute, write)
//!
//! # Scoring Schemes
//!
//! The engine supports two schemes for the modified points column:
//!
//! - **Standard**: flat win/tie/loss point values, configurable per run
//! - **Goal difference**: points depend on the margin of victory (buckets of
//!   1, 2, and 3+ goals) or, for draws, on the shared score (0-0, 1-1, 2-2,
//!   3-3+); heavy losses typically subtract points
//!
//! The fixed 3/1/0 reference score line is always computed alongside the
//! modified points as a comparison column.
//!
//! # Standings Table
//!
//! Each team's standing tracks wins, ties, losses, both point columns, goals
//! scored and conceded, and the derived goal difference. The table is sorted
//! descending by `(points_modified, goal_difference, goals_scored)`, with
//! residual ties kept in first-appearance ledger order, and ranks assigned
//! 1..N by sorted position.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{Ledger, StandingsEngine};
pub use crate::io::write_standings_csv;
pub use crate::types::{
    DrawPoints, MarginPoints, MatchRecord, ScoringConfig, StandingsError, StandingsTable,
    TeamStanding,
};
