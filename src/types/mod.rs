//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `match_record`: Validated match results
//! - `scoring`: Point-award scheme configuration
//! - `standing`: Per-team aggregates and the standings table
//! - `error`: Error types for the standings engine

pub mod error;
pub mod match_record;
pub mod scoring;
pub mod standing;

pub use error::StandingsError;
pub use match_record::MatchRecord;
pub use scoring::{DrawPoints, MarginPoints, ScoringConfig};
pub use standing::{StandingsTable, TeamStanding};
