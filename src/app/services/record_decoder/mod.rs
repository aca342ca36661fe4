//! Record decoder for flat survey records
//!
//! This module coerces flat key/value records into typed [`SurveyRecord`]s.
//!
//! ## Architecture
//!
//! - [`field_table`] - Static table of known keys, their types and scales
//! - [`decoder`] - Per-record decoding and batch orchestration
//! - [`field_parsers`] - Value coercion and field-level diagnostics
//! - [`stats`] - Decoding statistics and result structures
//!
//! A malformed rated value never aborts decoding: it becomes a
//! [`FieldDecodeError`] diagnostic and the answer is treated as absent.
//!
//! [`SurveyRecord`]: crate::app::models::SurveyRecord

pub mod decoder;
pub mod field_parsers;
pub mod field_table;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decoder::RecordDecoder;
pub use field_parsers::{FieldDecodeError, FieldErrorKind};
pub use stats::{DecodeResult, DecodeStats, DecodedRecord};
