//! Survey Reporter Library
//!
//! A Rust library for turning line-delimited training survey exports into
//! satisfaction reports.
//!
//! This library provides tools for:
//! - Parsing the legacy `KEY=VALUE` export format into flat records
//! - Decoding flat records into typed survey responses with per-field diagnostics
//! - Aggregating category averages and a Net Promoter Score
//! - Rendering the finished report as aligned text or JSON

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod record_decoder;
        pub mod record_parser;
        pub mod report_formatter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Category, FlatRecord, NpsTally, Question, Report, SurveyRecord};
pub use config::Config;

/// Result type alias for survey report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for survey report operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A line did not follow the `KEY=VALUE` layout
    #[error("invalid input at line {line_number}: missing delimiter in {line:?}")]
    StructuralParse { line_number: usize, line: String },

    /// Named input source does not exist
    #[error("Input not found: {path}")]
    InputNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration file '{path}' is not valid TOML")]
    ConfigParsing {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Report or record serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a structural parse error for the offending line
    pub fn structural_parse(line_number: usize, line: impl Into<String>) -> Self {
        Self::StructuralParse {
            line_number,
            line: line.into(),
        }
    }

    /// Create an input not found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parsing error
    pub fn config_parsing(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParsing {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Message followed by every underlying cause, `: `-separated
    pub fn detailed_message(&self) -> String {
        use std::fmt::Write;

        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let _ = write!(message, ": {cause}");
            source = cause.source();
        }
        message
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
