//! Test utilities for record parser testing
//!
//! This module provides sample export content shared across the parser
//! test modules.

mod stats_tests;

/// Two complete records in the legacy export layout, separator-terminated
pub fn create_two_record_export() -> String {
    r#"country=US
course=RH134
instructor=Jane Doe
name=Ada Lovelace
Q207=4
Q208=5
Q12-15=3
Q410=10
survey_ver=2
=
country=DE
course=RH124
name=Alan Turing
Q207=2
Q410=6
survey_ver=2
="#
    .to_string()
}

/// One record with no trailing separator
pub fn create_unterminated_export() -> String {
    "course=DO180\nQ311=5\nsurvey_ver=2".to_string()
}
