//! Core record parser implementation
//!
//! This module reads export text line by line, validates each line, normalizes
//! keys and frames the key/value pairs into flat records.

use std::io::{BufRead, Lines};
use tracing::{debug, info, trace};

use super::stats::{ParseResult, ParseStats};
use crate::app::models::FlatRecord;
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Parser for the line-delimited survey export format
///
/// The parser holds no state between inputs; each call to
/// [`RecordParser::records`] gets its own [`RecordStream`].
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    config: ParserConfig,
}

impl RecordParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Lazily parse records from a reader
    pub fn records<R: BufRead>(&self, reader: R) -> RecordStream<R> {
        RecordStream {
            lines: reader.lines(),
            config: self.config.clone(),
            current: FlatRecord::new(),
            line_number: 0,
            stats: ParseStats::new(),
            finished: false,
        }
    }

    /// Parse every record from a reader, stopping at the first invalid line
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        let mut stream = self.records(reader);
        let mut records = Vec::new();

        for record in stream.by_ref() {
            records.push(record?);
        }

        let stats = stream.into_stats();
        info!(
            "Parsed {} records from {} lines",
            stats.records_emitted, stats.lines_read
        );

        Ok(ParseResult { records, stats })
    }

    /// Parse every record from in-memory export text
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.parse_reader(content.as_bytes())
    }

    /// Remove compound-question punctuation from a key (`Q12-15` → `Q1215`)
    pub fn normalize_key(&self, key: &str) -> String {
        normalize_key(key, self.config.compound_key_punctuation)
    }
}

fn normalize_key(key: &str, punctuation: char) -> String {
    key.chars().filter(|c| *c != punctuation).collect()
}

/// Iterator over the flat records of one input
///
/// Yields `Err` once on the first structural or read failure and then stops;
/// records yielded before the failure remain valid.
#[derive(Debug)]
pub struct RecordStream<R> {
    lines: Lines<R>,
    config: ParserConfig,
    current: FlatRecord,
    line_number: usize,
    stats: ParseStats,
    finished: bool,
}

impl<R: BufRead> RecordStream<R> {
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn into_stats(self) -> ParseStats {
        self.stats
    }

    /// Handle one line, returning a record when the line closes one
    fn process_line(&mut self, line: &str) -> Result<Option<FlatRecord>> {
        if line == self.config.record_separator {
            trace!("Record separator at line {}", self.line_number);
            return Ok(self.take_current());
        }

        let (raw_key, value) = line
            .split_once(self.config.delimiter)
            .ok_or_else(|| Error::structural_parse(self.line_number, line))?;

        let key = normalize_key(raw_key, self.config.compound_key_punctuation);
        if key != raw_key {
            self.stats.keys_normalized += 1;
        }

        if let Some(previous) = self.current.insert(key.as_str(), value) {
            self.stats.values_overwritten += 1;
            debug!(
                "Line {}: '{}' overwrites earlier value '{}' for key '{}'",
                self.line_number, value, previous, key
            );
        }

        Ok(None)
    }

    /// Close the record in progress; empty records are dropped
    fn take_current(&mut self) -> Option<FlatRecord> {
        if self.current.is_empty() {
            self.stats.empty_records_skipped += 1;
            debug!("Skipping empty record ending at line {}", self.line_number);
            return None;
        }
        self.stats.records_emitted += 1;
        Some(std::mem::take(&mut self.current))
    }
}

impl<R: BufRead> Iterator for RecordStream<R> {
    type Item = Result<FlatRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    self.line_number += 1;
                    self.stats.lines_read += 1;

                    match self.process_line(&line) {
                        Ok(Some(record)) => return Some(Ok(record)),
                        Ok(None) => continue,
                        Err(e) => {
                            self.finished = true;
                            return Some(Err(e));
                        }
                    }
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(Error::io(
                        format!("Failed to read line {}", self.line_number + 1),
                        e,
                    )));
                }
                None => {
                    self.finished = true;
                    // An unterminated final record still counts; an empty one is no record
                    if self.current.is_empty() {
                        return None;
                    }
                    self.stats.records_emitted += 1;
                    return Some(Ok(std::mem::take(&mut self.current)));
                }
            }
        }
    }
}
