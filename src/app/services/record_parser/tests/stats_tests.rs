//! Tests for parsing statistics functionality

use super::super::RecordParser;
use super::super::stats::ParseStats;
use super::create_two_record_export;

#[test]
fn test_parse_stats_empty() {
    let stats = ParseStats::new();

    assert_eq!(stats.lines_read, 0);
    assert_eq!(stats.records_emitted, 0);
    assert_eq!(stats.keys_normalized, 0);
    assert_eq!(stats.values_overwritten, 0);
    assert_eq!(stats.empty_records_skipped, 0);
}

#[test]
fn test_parse_stats_counts_export() {
    let result = RecordParser::default()
        .parse_str(&create_two_record_export())
        .unwrap();

    assert_eq!(result.stats.lines_read, 17);
    assert_eq!(result.stats.records_emitted, 2);
    assert_eq!(result.stats.keys_normalized, 1);
    assert_eq!(result.stats.values_overwritten, 0);
}

#[test]
fn test_parse_stats_summary() {
    let stats = ParseStats {
        lines_read: 10,
        records_emitted: 2,
        keys_normalized: 1,
        values_overwritten: 0,
        empty_records_skipped: 3,
    };

    assert_eq!(
        stats.summary(),
        "10 lines, 2 records, 1 keys normalized, 0 values overwritten, 3 empty records skipped"
    );
}
