//! Error types for the league standings engine
//!
//! This module defines all error types that can occur while parsing a match
//! ledger or computing standings. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Input Errors**: Malformed rows, missing columns, invalid goal values
//! - **Ledger Errors**: Empty ledger (no teams can be enumerated)
//! - **Configuration Errors**: Scoring configuration missing a parameter
//!
//! The computation is deterministic and pure, so no error is retried and
//! none is silently swallowed: a malformed row aborts the whole computation
//! rather than producing a partial table.

use thiserror::Error;

/// Main error type for the standings engine
///
/// Each variant carries enough context to point the user at the offending
/// input: malformed rows name the 1-based data row index and the field that
/// failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandingsError {
    /// File not found at the specified path
    ///
    /// Fatal; prevents parsing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A ledger row failed validation
    ///
    /// Covers a missing required column, a non-numeric or negative goal
    /// value, and a row where home and away name the same team. The whole
    /// computation aborts; no partial table is produced.
    #[error("Malformed input at row {row}, field '{field}': {message}")]
    MalformedInput {
        /// 1-based data row index (header row excluded)
        row: usize,
        /// Name of the offending field
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Zero match records were supplied
    ///
    /// Surfaced as an error rather than an empty table: with no matches, no
    /// teams can be enumerated.
    #[error("Empty ledger: no match records supplied")]
    EmptyLedger,

    /// Scoring configuration is missing a required parameter or is invalid
    #[error("Invalid scoring configuration: {message}")]
    Configuration {
        /// Description of the configuration problem
        message: String,
    },
}

impl From<std::io::Error> for StandingsError {
    fn from(error: std::io::Error) -> Self {
        StandingsError::Io {
            message: error.to_string(),
        }
    }
}

impl StandingsError {
    /// Create a MalformedInput error
    pub fn malformed_input(row: usize, field: &str, message: impl Into<String>) -> Self {
        StandingsError::MalformedInput {
            row,
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        StandingsError::FileNotFound { path: path.into() }
    }

    /// Create a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        StandingsError::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        StandingsError::FileNotFound { path: "matches.csv".to_string() },
        "File not found: matches.csv"
    )]
    #[case::io_error(
        StandingsError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::malformed_input(
        StandingsError::MalformedInput {
            row: 7,
            field: "HomeGoals".to_string(),
            message: "expected a non-negative integer, got 'two'".to_string(),
        },
        "Malformed input at row 7, field 'HomeGoals': expected a non-negative integer, got 'two'"
    )]
    #[case::empty_ledger(
        StandingsError::EmptyLedger,
        "Empty ledger: no match records supplied"
    )]
    #[case::configuration(
        StandingsError::Configuration { message: "missing field `loss_points`".to_string() },
        "Invalid scoring configuration: missing field `loss_points`"
    )]
    fn test_error_display(#[case] error: StandingsError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::malformed(
        StandingsError::malformed_input(3, "AwayGoals", "value is empty"),
        StandingsError::MalformedInput {
            row: 3,
            field: "AwayGoals".to_string(),
            message: "value is empty".to_string(),
        }
    )]
    #[case::file_not_found(
        StandingsError::file_not_found("missing.csv"),
        StandingsError::FileNotFound { path: "missing.csv".to_string() }
    )]
    #[case::configuration(
        StandingsError::configuration("unknown mode"),
        StandingsError::Configuration { message: "unknown mode".to_string() }
    )]
    fn test_helper_functions(#[case] result: StandingsError, #[case] expected: StandingsError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: StandingsError = io_error.into();
        assert!(matches!(error, StandingsError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
