//! Tests for report accumulation

use super::*;
use crate::app::models::{Category, SurveyRecord};
use crate::app::services::aggregator::{ReportAccumulator, ReportAggregator};
use crate::config::{AggregationConfig, UnansweredPolicy};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_five_identical_promoters() {
    let records: Vec<SurveyRecord> = (0..5)
        .map(|_| create_scored_record([4, 4, 4, 3], [4, 4, 4, 5], [0, 0, 0, 0], 4, 9))
        .collect();

    let report = ReportAggregator::default().aggregate(&records);

    assert_eq!(report.responses, 5);
    assert_close(report.curriculum_avg, 3.75);
    assert_close(report.instructor_avg, 4.25);
    assert_close(report.environment_avg, 0.0);
    assert_close(report.overall_avg, 4.0);
    assert_eq!(report.nps, Some(100.0));
    assert_eq!(report.nps_tally.promoters, 5);
}

#[test]
fn test_averages_are_mean_of_record_averages() {
    let records = vec![
        create_scored_record([5, 5, 5, 5], [5, 5, 5, 5], [5, 5, 5, 5], 5, 10),
        create_scored_record([1, 1, 1, 1], [3, 3, 3, 3], [2, 2, 2, 2], 1, 0),
    ];

    let report = ReportAggregator::default().aggregate(&records);

    assert_close(report.curriculum_avg, 3.0);
    assert_close(report.instructor_avg, 4.0);
    assert_close(report.environment_avg, 3.5);
    assert_close(report.overall_avg, 3.0);
    assert_eq!(report.nps, Some(0.0));
}

#[test]
fn test_empty_batch_is_guarded() {
    let records: Vec<SurveyRecord> = Vec::new();
    let report = ReportAggregator::default().aggregate(&records);

    assert_eq!(report.responses, 0);
    assert!(report.is_empty());
    for category in Category::ALL {
        assert_eq!(report.average(category), 0.0);
    }
    assert_eq!(report.nps, None);
}

#[test]
fn test_responses_include_unanswered_records() {
    let records = vec![
        create_recommendation_record(Some(9)),
        create_recommendation_record(None),
        SurveyRecord::new(),
    ];

    let report = ReportAggregator::default().aggregate(&records);

    assert_eq!(report.responses, 3);
    assert_eq!(report.nps_tally.unanswered, 2);
    assert_eq!(report.nps, Some(100.0));
}

#[test]
fn test_no_classifiable_recommendations_has_no_nps() {
    let records = vec![create_recommendation_record(None); 4];
    let report = ReportAggregator::default().aggregate(&records);

    assert_eq!(report.responses, 4);
    assert_eq!(report.nps, None);
}

#[test]
fn test_legacy_policy_counts_unanswered_as_detractors() {
    let config = AggregationConfig {
        unanswered_recommendation: UnansweredPolicy::Detractor,
        ..AggregationConfig::default()
    };
    let records = vec![
        create_recommendation_record(Some(10)),
        create_recommendation_record(None),
    ];

    let report = ReportAggregator::new(config).aggregate(&records);

    assert_eq!(report.nps_tally.detractors, 1);
    assert_eq!(report.nps, Some(0.0));
}

#[test]
fn test_comments_keyed_by_respondent() {
    let mut ada = create_recommendation_record(Some(10));
    ada.learner_name = "Ada Lovelace".to_string();
    ada.curriculum_comments = "  Labs were long ".to_string();
    ada.overall_comments = "Great".to_string();

    let mut anonymous = SurveyRecord::new();
    anonymous.instructor_comments = "Very clear".to_string();
    anonymous.environment_comments = "   ".to_string();

    let mut by_email = SurveyRecord::new();
    by_email.email = "bob@example.com".to_string();
    by_email.overall_comments = "Fine".to_string();

    let report = ReportAggregator::default().aggregate(&[ada, anonymous, by_email]);
    let comments = &report.comments;

    assert_eq!(comments.len(), 4);
    assert_eq!(
        comments.for_category(Category::Curriculum).unwrap()["Ada Lovelace"],
        vec!["Labs were long".to_string()]
    );
    assert_eq!(
        comments.for_category(Category::Instructor).unwrap()["respondent #2"],
        vec!["Very clear".to_string()]
    );
    assert!(comments.for_category(Category::Environment).is_none());
    assert_eq!(comments.for_category(Category::Overall).unwrap().len(), 2);
    assert!(comments.for_category(Category::Overall).unwrap().contains_key("bob@example.com"));
}

#[test]
fn test_comment_collection_can_be_disabled() {
    let config = AggregationConfig {
        collect_comments: false,
        ..AggregationConfig::default()
    };
    let mut record = SurveyRecord::new();
    record.overall_comments = "Great".to_string();

    let report = ReportAggregator::new(config).aggregate(&[record]);

    assert!(report.comments.is_empty());
}

#[test]
fn test_incremental_matches_batch() {
    let records = vec![
        create_scored_record([4, 4, 4, 3], [4, 4, 4, 5], [1, 2, 3, 4], 4, 9),
        create_scored_record([2, 3, 4, 5], [1, 1, 1, 1], [5, 5, 5, 5], 2, 6),
        create_scored_record([5, 5, 5, 5], [5, 5, 5, 5], [0, 0, 0, 0], 5, 7),
    ];

    let mut accumulator = ReportAccumulator::new(AggregationConfig::default());
    for record in &records {
        accumulator.add(record);
    }
    assert_eq!(accumulator.responses(), 3);

    let incremental = accumulator.finish();
    let batch = ReportAggregator::default().aggregate(&records);

    assert_eq!(incremental, batch);
}
