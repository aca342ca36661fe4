//! Test utilities for report aggregation testing

use crate::app::models::{Question, SurveyRecord};

// Test modules
mod accumulator_tests;

/// Record with the given curriculum, instructor and environment sub-scores
pub fn create_scored_record(
    curriculum: [u8; 4],
    instructor: [u8; 4],
    environment: [u8; 4],
    overall: u8,
    recommendation: u8,
) -> SurveyRecord {
    let groups: [(&[Question], [u8; 4]); 3] = [
        (
            &[
                Question::StudentGuide,
                Question::CourseStructure,
                Question::LabReinforcement,
                Question::CoursePacing,
            ],
            curriculum,
        ),
        (
            &[
                Question::InstructorExpertise,
                Question::InstructorPreparation,
                Question::InstructorClarity,
                Question::ClassroomManagement,
            ],
            instructor,
        ),
        (
            &[
                Question::PreClassSupport,
                Question::AudioConferencing,
                Question::WebConferencing,
                Question::LabPerformance,
            ],
            environment,
        ),
    ];

    let mut record = SurveyRecord::new();
    for (questions, scores) in groups {
        for (question, score) in questions.iter().zip(scores) {
            record.set_rating(*question, Some(score));
        }
    }
    record
        .with_rating(Question::OverallRating, overall)
        .with_rating(Question::Recommendation, recommendation)
}

/// Record with only a recommendation score (or none)
pub fn create_recommendation_record(recommendation: Option<u8>) -> SurveyRecord {
    let mut record = SurveyRecord::new();
    record.set_rating(Question::Recommendation, recommendation);
    record
}
