//! Test utilities for record decoder testing
//!
//! This module provides flat record fixtures used across the decoder test
//! modules.

use crate::app::models::FlatRecord;


/// A fully answered response in the legacy layout
pub fn create_complete_flat_record() -> FlatRecord {
    [
        ("country", "US"),
        ("course", "RH134"),
        ("course_ver", "9.0"),
        ("email", "ada@example.com"),
        ("instructor", "Jane Doe"),
        ("language", "en-US"),
        ("modality", "ILT"),
        ("name", "Ada Lovelace"),
        ("progress", "100"),
        ("Q207", "4"),
        ("Q208", "4"),
        ("Q209", "4"),
        ("Q210", "3"),
        ("Q508", "Labs were long"),
        ("Q306", "4"),
        ("Q307", "4"),
        ("Q308", "4"),
        ("Q320", "5"),
        ("Q310", "5"),
        ("Q318", "Clear explanations"),
        ("Q1002", "5"),
        ("Q1003", "4"),
        ("Q1004", "4"),
        ("Q1005", "3"),
        ("Q311", "4"),
        ("Q410", "9"),
        ("Q403", "Would take again"),
        ("start_date", "2024-03-04"),
        ("surveydate", "2024-03-08"),
        ("survey_ver", "2"),
    ]
    .into_iter()
    .collect()
}

/// Helper to build a flat record from pairs
pub fn flat(pairs: &[(&str, &str)]) -> FlatRecord {
    pairs.iter().copied().collect()
}
