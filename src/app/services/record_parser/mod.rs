//! Record parser for line-delimited survey exports
//!
//! This module turns the legacy `KEY=VALUE` export format into a sequence of
//! flat records, one per survey response.
//!
//! ## Architecture
//!
//! - [`parser`] - Line handling, key normalization and record framing
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Format
//!
//! ```text
//! course=RH134
//! Q12-15=4
//! survey_ver=2
//! =
//! course=RH124
//! ...
//! ```
//!
//! Every line must contain the delimiter. A line holding only the record
//! separator closes the current record; the final record does not need one.
//!
//! ## Usage
//!
//! ```rust
//! use survey_reporter::app::services::record_parser::RecordParser;
//!
//! # fn example() -> survey_reporter::Result<()> {
//! let parser = RecordParser::default();
//! let result = parser.parse_str("course=RH134\nQ12-15=4\n=\ncourse=RH124\n")?;
//!
//! assert_eq!(result.records.len(), 2);
//! assert_eq!(result.records[0].get("Q1215"), Some("4"));
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{RecordParser, RecordStream};
pub use stats::{ParseResult, ParseStats};
