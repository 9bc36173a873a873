//! Core business logic module
//!
//! This module contains the standings computation components:
//! - `ledger` - Validated match ledger and team enumeration
//! - `engine` - Standings fold, sorting, and ranking

pub mod engine;
pub mod ledger;

pub use engine::StandingsEngine;
pub use ledger::Ledger;
