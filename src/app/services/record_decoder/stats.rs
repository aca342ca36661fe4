//! Decoding statistics and result structures for record decoding
//!
//! This module provides types for tracking field-level decode diagnostics and
//! organizing decoded records for the aggregator.

use serde::Serialize;

use super::field_parsers::FieldDecodeError;
use crate::app::models::SurveyRecord;

/// One decoded record with the diagnostics raised while decoding it
#[derive(Debug, Clone)]
pub struct DecodedRecord {
    pub record: SurveyRecord,

    /// Fields that failed to decode and were treated as unanswered
    pub diagnostics: Vec<FieldDecodeError>,

    /// Keys not in the field table
    pub unknown_keys: usize,

    /// Rated fields holding a "not answered" marker
    pub not_applicable: usize,
}

/// Decoding result with survey records and statistics
#[derive(Debug, Clone)]
pub struct DecodeResult {
    /// Decoded records, one per input record, in input order
    pub records: Vec<SurveyRecord>,

    pub stats: DecodeStats,
}

/// Simple decoding statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Number of records decoded
    pub records_decoded: usize,

    /// Number of records with at least one field diagnostic
    pub records_with_diagnostics: usize,

    /// Total field diagnostics across all records
    pub field_errors: usize,

    /// Keys ignored because they are not known fields
    pub unknown_keys_ignored: usize,

    /// Rated fields holding a "not answered" marker
    pub not_applicable_values: usize,

    /// Diagnostic messages for debugging
    pub errors: Vec<String>,
}

impl DecodeStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one decoded record into the totals
    pub fn record(&mut self, decoded: &DecodedRecord) {
        self.records_decoded += 1;
        self.unknown_keys_ignored += decoded.unknown_keys;
        self.not_applicable_values += decoded.not_applicable;

        if !decoded.diagnostics.is_empty() {
            self.records_with_diagnostics += 1;
            self.field_errors += decoded.diagnostics.len();
            for diagnostic in &decoded.diagnostics {
                self.errors
                    .push(format!("Record {}: {}", self.records_decoded, diagnostic));
            }
        }
    }

    /// Percentage of records decoded without any diagnostic
    pub fn clean_rate(&self) -> f64 {
        if self.records_decoded == 0 {
            100.0
        } else {
            let clean = self.records_decoded - self.records_with_diagnostics;
            (clean as f64 / self.records_decoded as f64) * 100.0
        }
    }

    pub fn has_diagnostics(&self) -> bool {
        self.field_errors > 0
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} records decoded, {} field errors in {} records, {} unknown keys ignored, {} not-applicable answers",
            self.records_decoded,
            self.field_errors,
            self.records_with_diagnostics,
            self.unknown_keys_ignored,
            self.not_applicable_values
        )
    }
}
