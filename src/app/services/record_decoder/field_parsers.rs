//! Field parsing utilities for flat survey records
//!
//! This module provides helper functions for coercing raw export values into
//! typed answers, with per-field diagnostics instead of hard failures.

use serde::Serialize;

use super::field_table::Scale;

/// Why a rated field could not be decoded
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum FieldErrorKind {
    #[error("not a base-10 integer")]
    NotAnInteger,

    #[error("outside the {min}-{max} scale")]
    OutOfRange { min: u8, max: u8 },
}

/// Non-fatal decode failure for one field of one record
///
/// The field is treated as unanswered; decoding carries on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("field '{key}' = {value:?}: {kind}")]
pub struct FieldDecodeError {
    pub key: String,
    pub value: String,
    pub kind: FieldErrorKind,
}

impl FieldDecodeError {
    pub fn new(key: impl Into<String>, value: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind,
        }
    }
}

/// Check whether a value is one of the "not answered" markers
pub fn is_not_applicable(value: &str, markers: &[String]) -> bool {
    let trimmed = value.trim();
    markers
        .iter()
        .any(|marker| marker.trim().eq_ignore_ascii_case(trimmed))
}

/// Parse a rated answer as a base-10 integer within `scale`
pub fn parse_rating(key: &str, value: &str, scale: Scale) -> Result<u8, FieldDecodeError> {
    let parsed = value
        .trim()
        .parse::<i64>()
        .map_err(|_| FieldDecodeError::new(key, value, FieldErrorKind::NotAnInteger))?;

    if !scale.contains(parsed) {
        return Err(FieldDecodeError::new(
            key,
            value,
            FieldErrorKind::OutOfRange {
                min: scale.min,
                max: scale.max,
            },
        ));
    }

    // In range, so it fits
    Ok(parsed as u8)
}
