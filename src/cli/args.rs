use crate::types::{DrawPoints, MarginPoints, ScoringConfig, StandingsError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute league standings from a CSV match ledger
#[derive(Parser, Debug)]
#[command(name = "league-standings")]
#[command(about = "Compute league standings from a CSV match ledger", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing match results
    #[arg(value_name = "INPUT", help = "Path to the input CSV match ledger")]
    pub input_file: PathBuf,

    /// Point-award scheme for the modified points column
    #[arg(
        long = "mode",
        value_name = "MODE",
        default_value = "standard",
        help = "Scoring mode: 'standard' or 'goal-difference'"
    )]
    pub mode: ScoringMode,

    /// TOML file supplying the full scoring configuration
    #[arg(
        long = "scoring",
        value_name = "FILE",
        help = "TOML file with the scoring configuration (overrides --mode and point flags)"
    )]
    pub scoring_file: Option<PathBuf>,

    /// Points for a win (standard mode)
    #[arg(long = "win-points", value_name = "POINTS", default_value_t = 3)]
    pub win_points: i32,

    /// Points for a tie (standard mode)
    #[arg(long = "tie-points", value_name = "POINTS", default_value_t = 1)]
    pub tie_points: i32,

    /// Points for a loss (standard mode)
    #[arg(
        long = "loss-points",
        value_name = "POINTS",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub loss_points: i32,

    /// Points for a win by one goal (goal-difference mode)
    #[arg(long = "win-by-one", value_name = "POINTS", default_value_t = 2)]
    pub win_by_one: i32,

    /// Points for a loss by one goal (goal-difference mode)
    #[arg(
        long = "loss-by-one",
        value_name = "POINTS",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub loss_by_one: i32,

    /// Points for a win by two goals (goal-difference mode)
    #[arg(long = "win-by-two", value_name = "POINTS", default_value_t = 3)]
    pub win_by_two: i32,

    /// Points for a loss by two goals (goal-difference mode)
    #[arg(
        long = "loss-by-two",
        value_name = "POINTS",
        default_value_t = -2,
        allow_negative_numbers = true
    )]
    pub loss_by_two: i32,

    /// Points for a win by three or more goals (goal-difference mode)
    #[arg(long = "win-by-three", value_name = "POINTS", default_value_t = 4)]
    pub win_by_three: i32,

    /// Points for a loss by three or more goals (goal-difference mode)
    #[arg(
        long = "loss-by-three",
        value_name = "POINTS",
        default_value_t = -3,
        allow_negative_numbers = true
    )]
    pub loss_by_three: i32,

    /// Points for a 0-0 draw (goal-difference mode)
    #[arg(long = "draw-zero", value_name = "POINTS", default_value_t = 1)]
    pub draw_zero: i32,

    /// Points for a 1-1 draw (goal-difference mode)
    #[arg(long = "draw-one", value_name = "POINTS", default_value_t = 2)]
    pub draw_one: i32,

    /// Points for a 2-2 draw (goal-difference mode)
    #[arg(long = "draw-two", value_name = "POINTS", default_value_t = 2)]
    pub draw_two: i32,

    /// Points for a 3-3 or higher draw (goal-difference mode)
    #[arg(long = "draw-three", value_name = "POINTS", default_value_t = 3)]
    pub draw_three: i32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Available scoring modes for the modified points column
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScoringMode {
    Standard,
    GoalDifference,
}

impl CliArgs {
    /// Build the active ScoringConfig from CLI arguments
    ///
    /// When `--scoring FILE` is given, the whole configuration is loaded
    /// from the TOML file and the mode and point flags are ignored.
    /// Otherwise the configuration is assembled from the flag values (or
    /// their defaults, which mirror the conventional 3/1/0 standard scheme
    /// and the original goal-difference defaults).
    ///
    /// # Errors
    ///
    /// * `StandingsError::FileNotFound` / `StandingsError::Io` if the
    ///   scoring file cannot be read
    /// * `StandingsError::Configuration` if the scoring file is missing a
    ///   required parameter or names an unknown mode
    pub fn to_scoring_config(&self) -> Result<ScoringConfig, StandingsError> {
        if let Some(path) = &self.scoring_file {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    StandingsError::file_not_found(path.display().to_string())
                } else {
                    StandingsError::Io {
                        message: format!("Failed to read scoring file '{}': {}", path.display(), e),
                    }
                }
            })?;
            return toml::from_str(&contents)
                .map_err(|e| StandingsError::configuration(e.to_string()));
        }

        Ok(match self.mode {
            ScoringMode::Standard => ScoringConfig::Standard {
                win_points: self.win_points,
                tie_points: self.tie_points,
                loss_points: self.loss_points,
            },
            ScoringMode::GoalDifference => ScoringConfig::GoalDifference {
                win_by_margin: MarginPoints {
                    one: self.win_by_one,
                    two: self.win_by_two,
                    three_plus: self.win_by_three,
                },
                loss_by_margin: MarginPoints {
                    one: self.loss_by_one,
                    two: self.loss_by_two,
                    three_plus: self.loss_by_three,
                },
                draw_by_score: DrawPoints {
                    zero: self.draw_zero,
                    one: self.draw_one,
                    two: self.draw_two,
                    three_plus: self.draw_three,
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case::default_mode(&["program", "matches.csv"], ScoringMode::Standard)]
    #[case::explicit_standard(&["program", "--mode", "standard", "matches.csv"], ScoringMode::Standard)]
    #[case::goal_difference(&["program", "--mode", "goal-difference", "matches.csv"], ScoringMode::GoalDifference)]
    fn test_mode_parsing(#[case] args: &[&str], #[case] expected: ScoringMode) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.mode, expected);
    }

    #[test]
    fn test_standard_defaults_are_3_1_0() {
        let parsed = CliArgs::try_parse_from(["program", "matches.csv"]).unwrap();
        let config = parsed.to_scoring_config().unwrap();
        assert_eq!(
            config,
            ScoringConfig::Standard {
                win_points: 3,
                tie_points: 1,
                loss_points: 0,
            }
        );
    }

    #[test]
    fn test_standard_custom_points() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--win-points",
            "2",
            "--tie-points",
            "1",
            "--loss-points",
            "-1",
            "matches.csv",
        ])
        .unwrap();
        let config = parsed.to_scoring_config().unwrap();
        assert_eq!(
            config,
            ScoringConfig::Standard {
                win_points: 2,
                tie_points: 1,
                loss_points: -1,
            }
        );
    }

    #[test]
    fn test_goal_difference_defaults() {
        let parsed =
            CliArgs::try_parse_from(["program", "--mode", "goal-difference", "matches.csv"])
                .unwrap();
        let config = parsed.to_scoring_config().unwrap();
        assert_eq!(
            config,
            ScoringConfig::GoalDifference {
                win_by_margin: MarginPoints {
                    one: 2,
                    two: 3,
                    three_plus: 4,
                },
                loss_by_margin: MarginPoints {
                    one: -1,
                    two: -2,
                    three_plus: -3,
                },
                draw_by_score: DrawPoints {
                    zero: 1,
                    one: 2,
                    two: 2,
                    three_plus: 3,
                },
            }
        );
    }

    #[test]
    fn test_negative_loss_values_accepted() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--mode",
            "goal-difference",
            "--loss-by-three",
            "-5",
            "matches.csv",
        ])
        .unwrap();
        assert_eq!(parsed.loss_by_three, -5);
    }

    #[test]
    fn test_scoring_file_overrides_flags() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"mode = \"standard\"\nwin_points = 2\ntie_points = 1\nloss_points = 0\n")
            .unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let parsed = CliArgs::try_parse_from([
            "program",
            "--scoring",
            &path,
            "--win-points",
            "10",
            "matches.csv",
        ])
        .unwrap();
        let config = parsed.to_scoring_config().unwrap();
        assert_eq!(
            config,
            ScoringConfig::Standard {
                win_points: 2,
                tie_points: 1,
                loss_points: 0,
            }
        );
    }

    #[test]
    fn test_scoring_file_missing_parameter_is_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"mode = \"standard\"\nwin_points = 3\n").unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let parsed =
            CliArgs::try_parse_from(["program", "--scoring", &path, "matches.csv"]).unwrap();
        let result = parsed.to_scoring_config();
        assert!(matches!(result, Err(StandingsError::Configuration { .. })));
    }

    #[test]
    fn test_scoring_file_not_found() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--scoring",
            "no-such-scoring.toml",
            "matches.csv",
        ])
        .unwrap();
        let result = parsed.to_scoring_config();
        assert!(matches!(result, Err(StandingsError::FileNotFound { .. })));
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_mode(&["program", "--mode", "bonus", "matches.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
