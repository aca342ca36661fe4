//! Parsing statistics and result structures for record parsing
//!
//! This module provides types for tracking what the parser saw and for handing
//! the parsed records on to the decoder.

use crate::app::models::FlatRecord;

/// Parsing result with flat records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Flat records in input order
    pub records: Vec<FlatRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of input lines consumed
    pub lines_read: usize,

    /// Number of non-empty records produced
    pub records_emitted: usize,

    /// Number of keys that had compound-question punctuation removed
    pub keys_normalized: usize,

    /// Number of values replaced by a later line with the same key
    pub values_overwritten: usize,

    /// Number of separators that closed a record with no fields
    pub empty_records_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} lines, {} records, {} keys normalized, {} values overwritten, {} empty records skipped",
            self.lines_read,
            self.records_emitted,
            self.keys_normalized,
            self.values_overwritten,
            self.empty_records_skipped
        )
    }
}
