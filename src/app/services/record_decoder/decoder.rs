//! Core record decoder implementation
//!
//! This module maps flat key/value records onto typed survey records using the
//! static field table, degrading malformed answers to "unanswered".

use tracing::{debug, info, trace};

use super::field_parsers::{is_not_applicable, parse_rating};
use super::field_table::{self, FieldKind};
use super::stats::{DecodeResult, DecodeStats, DecodedRecord};
use crate::app::models::{FlatRecord, SurveyRecord};
use crate::config::DecoderConfig;

/// Decoder from flat records to survey records
///
/// Each record is decoded on its own; records need not share a field set.
#[derive(Debug, Clone, Default)]
pub struct RecordDecoder {
    config: DecoderConfig,
}

impl RecordDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decode one flat record
    ///
    /// Text fields pass through unchanged and missing keys stay empty. Rated
    /// fields that fail to parse or fall outside their scale are recorded as
    /// diagnostics and left unanswered.
    pub fn decode(&self, flat: FlatRecord) -> DecodedRecord {
        let mut decoded = DecodedRecord {
            record: SurveyRecord::new(),
            diagnostics: Vec::new(),
            unknown_keys: 0,
            not_applicable: 0,
        };

        for (key, value) in flat {
            let Some(spec) = field_table::lookup(&key) else {
                trace!("Ignoring unknown key '{}'", key);
                decoded.unknown_keys += 1;
                continue;
            };

            match spec.kind {
                FieldKind::Text(field) => decoded.record.set_text(field, value),
                FieldKind::Rating { question, scale } => {
                    if is_not_applicable(&value, &self.config.not_applicable_markers) {
                        decoded.not_applicable += 1;
                        decoded.record.set_rating(question, None);
                        continue;
                    }

                    match parse_rating(&key, &value, scale) {
                        Ok(answer) => decoded.record.set_rating(question, Some(answer)),
                        Err(e) => {
                            debug!("Decode error: {}", e);
                            decoded.record.set_rating(question, None);
                            decoded.diagnostics.push(e);
                        }
                    }
                }
            }
        }

        decoded
    }

    /// Decode a batch of flat records in order
    pub fn decode_all<I>(&self, records: I) -> DecodeResult
    where
        I: IntoIterator<Item = FlatRecord>,
    {
        let mut stats = DecodeStats::new();
        let records: Vec<SurveyRecord> = records
            .into_iter()
            .map(|flat| {
                let decoded = self.decode(flat);
                stats.record(&decoded);
                decoded.record
            })
            .collect();

        info!("Decoded {} survey records", records.len());
        if stats.has_diagnostics() {
            debug!("Decode diagnostics: {}", stats.summary());
        }

        DecodeResult { records, stats }
    }
}
