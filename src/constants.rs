//! Application constants for the survey reporter
//!
//! This module contains the export format sentinels, scoring thresholds,
//! report layout widths and default settings used throughout the crate.

// =============================================================================
// Export Format
// =============================================================================

/// Separates a key from its value on every data line
pub const DEFAULT_DELIMITER: char = '=';

/// A line consisting solely of this text closes the current record
pub const DEFAULT_RECORD_SEPARATOR: &str = "=";

/// Joins compound question numbers in keys (`Q12-15`); stripped on parse
pub const DEFAULT_COMPOUND_KEY_PUNCTUATION: char = '-';

/// Answer values that mean "question not answered"
///
/// Compared case-insensitively after trimming surrounding whitespace.
pub const NOT_APPLICABLE_MARKERS: &[&str] = &["", "N/A", "NA"];

/// File extension picked up when an input path is a directory
pub const INPUT_FILE_EXTENSION: &str = "txt";

// =============================================================================
// Rating Scales
// =============================================================================

/// Agreement questions and the overall rating (5 = strongly agree)
pub const AGREEMENT_SCALE_MAX: u8 = 5;

/// Recommendation likelihood (10 = extremely likely)
pub const RECOMMENDATION_SCALE_MAX: u8 = 10;

/// Net Promoter Score classification thresholds (0-10 recommendation scale)
pub mod nps {
    /// Lowest score counted as a promoter
    pub const PROMOTER_MIN: u8 = 9;

    /// Lowest score counted as a passive
    pub const PASSIVE_MIN: u8 = 7;

    /// Highest score on the recommendation scale
    pub const SCORE_MAX: u8 = super::RECOMMENDATION_SCALE_MAX;
}

// =============================================================================
// Report Layout
// =============================================================================

/// Report text layout
pub mod layout {
    /// Labels are left-justified to this width
    pub const LABEL_WIDTH: usize = 11;

    /// Width of the right-justified response count
    pub const COUNT_WIDTH: usize = 3;

    /// Width of right-justified averages and NPS
    pub const VALUE_WIDTH: usize = 6;

    /// Decimal places for averages and NPS
    pub const VALUE_PRECISION: usize = 2;

    /// Rendered in place of an NPS that has no classifiable responses
    pub const NO_DATA: &str = "n/a";

    pub const RESPONSES_LABEL: &str = "Responses";
    pub const NPS_LABEL: &str = "NPS";
}

// =============================================================================
// Configuration and Logging
// =============================================================================

/// Directory under the user config dir that holds `config.toml`
pub const CONFIG_DIR_NAME: &str = "survey-reporter";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV_VAR: &str = "SURVEY_REPORTER_CONFIG";

/// Log level used when neither `RUST_LOG` nor `-v` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Tracing target of this crate, used to build the default filter
pub const LOG_TARGET: &str = "survey_reporter";
