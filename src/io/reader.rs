//! Streaming CSV reader with iterator interface
//!
//! Provides a streaming iterator over match records from a CSV ledger file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The LedgerReader uses csv::Reader to read and deserialize CSV rows
//! sequentially, converting each to a validated [`MatchRecord`] via
//! [`convert_row`](crate::io::csv_format::convert_row). Rows are processed
//! one at a time without loading the entire file into memory.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Row validation errors are yielded as Err variants carrying the 1-based
//!   data row index; the caller decides whether to abort (the standings
//!   pipeline aborts on the first one, per the no-partial-table contract)

use crate::io::csv_format::{convert_row, CsvRow};
use crate::types::{MatchRecord, StandingsError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over a CSV match ledger
///
/// Implements Iterator, yielding `Result<MatchRecord, StandingsError>` per
/// data row in original file order.
#[derive(Debug)]
pub struct LedgerReader {
    reader: csv::Reader<File>,
    row_index: usize,
}

impl LedgerReader {
    /// Create a new LedgerReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration. The CSV
    /// reader is configured to trim whitespace from all fields and to allow
    /// flexible field counts so that short rows surface as named
    /// missing-column errors rather than opaque parse failures.
    ///
    /// # Errors
    ///
    /// * `StandingsError::FileNotFound` if the path does not exist
    /// * `StandingsError::Io` if the file cannot be opened
    pub fn new(path: &Path) -> Result<Self, StandingsError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StandingsError::file_not_found(path.display().to_string())
            } else {
                StandingsError::Io {
                    message: format!("Failed to open file '{}': {}", path.display(), e),
                }
            }
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            row_index: 0,
        })
    }
}

impl Iterator for LedgerReader {
    type Item = Result<MatchRecord, StandingsError>;

    /// Get the next match record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(MatchRecord))` - Successfully validated record
    /// * `Some(Err(StandingsError))` - Validation or parse error with the
    ///   1-based data row index
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRow>();

        match deserializer.next()? {
            Ok(csv_row) => {
                self.row_index += 1;
                Some(convert_row(csv_row, self.row_index))
            }
            Err(e) => {
                self.row_index += 1;
                Some(Err(StandingsError::malformed_input(
                    self.row_index,
                    "record",
                    format!("CSV parse error: {}", e),
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_reader_new_opens_file() {
        let file = create_temp_csv("HomeTeam,AwayTeam,HomeGoals,AwayGoals\nArsenal,Chelsea,2,1\n");
        assert!(LedgerReader::new(file.path()).is_ok());
    }

    #[test]
    fn test_reader_new_fails_on_missing_file() {
        let result = LedgerReader::new(Path::new("nonexistent.csv"));
        assert!(matches!(result, Err(StandingsError::FileNotFound { .. })));
    }

    #[test]
    fn test_reader_iterates_valid_rows_in_order() {
        let file = create_temp_csv(
            "HomeTeam,AwayTeam,HomeGoals,AwayGoals\n\
             Arsenal,Chelsea,2,1\n\
             Chelsea,Arsenal,0,0\n",
        );

        let reader = LedgerReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].home_team, "Arsenal");
        assert_eq!(records[0].home_goals, 2);
        assert_eq!(records[1].home_team, "Chelsea");
        assert_eq!(records[1].away_goals, 0);
    }

    #[test]
    fn test_reader_ignores_extra_columns() {
        let file = create_temp_csv(
            "Date,HomeTeam,AwayTeam,HomeGoals,AwayGoals,Referee\n\
             2024-08-17,Arsenal,Chelsea,2,1,M. Oliver\n",
        );

        let reader = LedgerReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].home_team, "Arsenal");
        assert_eq!(records[0].away_goals, 1);
    }

    #[test]
    fn test_reader_reports_row_index_for_malformed_row() {
        let file = create_temp_csv(
            "HomeTeam,AwayTeam,HomeGoals,AwayGoals\n\
             Arsenal,Chelsea,2,1\n\
             Liverpool,Everton,x,0\n",
        );

        let reader = LedgerReader::new(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert!(results[0].is_ok());
        match results[1].as_ref().unwrap_err() {
            StandingsError::MalformedInput { row, field, .. } => {
                assert_eq!(*row, 2);
                assert_eq!(field, "HomeGoals");
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_reader_reports_missing_column() {
        // No AwayGoals column at all
        let file = create_temp_csv("HomeTeam,AwayTeam,HomeGoals\nArsenal,Chelsea,2\n");

        let reader = LedgerReader::new(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 1);
        match results[0].as_ref().unwrap_err() {
            StandingsError::MalformedInput { row, field, .. } => {
                assert_eq!(*row, 1);
                assert_eq!(field, "AwayGoals");
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_reader_handles_empty_file_after_header() {
        let file = create_temp_csv("HomeTeam,AwayTeam,HomeGoals,AwayGoals\n");

        let reader = LedgerReader::new(file.path()).unwrap();
        assert_eq!(reader.count(), 0);
    }
}
