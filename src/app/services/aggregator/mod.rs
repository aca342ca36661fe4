//! Report aggregation for decoded survey records
//!
//! This module turns a sequence of [`SurveyRecord`]s into one [`Report`]:
//! category averages, a Net Promoter Score and per-category comments.
//!
//! ## Architecture
//!
//! - [`accumulator`] - Running sums and report construction
//! - [`nps`] - Promoter/passive/detractor classification and scoring
//!
//! ## Usage
//!
//! ```rust
//! use survey_reporter::app::models::{Question, SurveyRecord};
//! use survey_reporter::app::services::aggregator::ReportAggregator;
//!
//! let records = vec![
//!     SurveyRecord::new().with_rating(Question::Recommendation, 10),
//!     SurveyRecord::new().with_rating(Question::Recommendation, 3),
//! ];
//! let report = ReportAggregator::default().aggregate(&records);
//!
//! assert_eq!(report.responses, 2);
//! assert_eq!(report.nps, Some(0.0));
//! ```
//!
//! [`SurveyRecord`]: crate::app::models::SurveyRecord
//! [`Report`]: crate::app::models::Report

pub mod accumulator;
pub mod nps;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use accumulator::{ReportAccumulator, ReportAggregator};
pub use nps::{NpsBucket, classify, net_promoter_score};
