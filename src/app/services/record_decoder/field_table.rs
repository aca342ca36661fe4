//! Known export fields and how each one decodes
//!
//! This table is the only place that ties export keys to survey record
//! fields. Keys match case-insensitively; keys absent from the table are
//! ignored by the decoder.

use crate::app::models::{Question, TextField};
use crate::constants::{AGREEMENT_SCALE_MAX, RECOMMENDATION_SCALE_MAX};

/// Inclusive range of valid answers to a rated question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub min: u8,
    pub max: u8,
}

impl Scale {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }
}

/// Agreement questions and the overall rating
pub const AGREEMENT: Scale = Scale::new(0, AGREEMENT_SCALE_MAX);

/// Recommendation likelihood
pub const RECOMMENDATION: Scale = Scale::new(0, RECOMMENDATION_SCALE_MAX);

/// How a known field decodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Passed through unchanged
    Text(TextField),
    /// Parsed as a base-10 integer within `scale`
    Rating { question: Question, scale: Scale },
}

/// One known export key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
}

const fn text(key: &'static str, field: TextField) -> FieldSpec {
    FieldSpec {
        key,
        kind: FieldKind::Text(field),
    }
}

const fn rating(key: &'static str, question: Question, scale: Scale) -> FieldSpec {
    FieldSpec {
        key,
        kind: FieldKind::Rating { question, scale },
    }
}

pub const FIELD_TABLE: &[FieldSpec] = &[
    // Identification
    text("country", TextField::Country),
    text("course", TextField::Course),
    text("course_ver", TextField::CourseVersion),
    text("email", TextField::Email),
    text("found_ver", TextField::FoundVersion),
    text("instructor", TextField::Instructor),
    text("language", TextField::Language),
    text("modality", TextField::Modality),
    text("name", TextField::LearnerName),
    text("progress", TextField::Progress),
    text("Q1508", TextField::ContactOptIn),
    // Curriculum
    rating("Q207", Question::StudentGuide, AGREEMENT),
    rating("Q208", Question::CourseStructure, AGREEMENT),
    rating("Q209", Question::LabReinforcement, AGREEMENT),
    rating("Q210", Question::CoursePacing, AGREEMENT),
    text("Q508", TextField::CurriculumComments),
    // Instructor
    rating("Q306", Question::InstructorExpertise, AGREEMENT),
    rating("Q307", Question::InstructorPreparation, AGREEMENT),
    rating("Q308", Question::InstructorClarity, AGREEMENT),
    rating("Q320", Question::ClassroomManagement, AGREEMENT),
    rating("Q310", Question::InstructorAnswers, AGREEMENT),
    text("Q318", TextField::InstructorComments),
    // Learning environment
    text("Q1901", TextField::ConnectionTested),
    rating("Q1002", Question::PreClassSupport, AGREEMENT),
    rating("Q1003", Question::AudioConferencing, AGREEMENT),
    rating("Q1004", Question::WebConferencing, AGREEMENT),
    rating("Q1005", Question::LabPerformance, AGREEMENT),
    text("Q1907", TextField::EnvironmentComments),
    // Overall
    rating("Q311", Question::OverallRating, AGREEMENT),
    rating("Q410", Question::Recommendation, RECOMMENDATION),
    text("Q403", TextField::OverallComments),
    // Additional questions (Yes / No)
    text("Q109", TextField::MetPrerequisites),
    text("Q105", TextField::SkillsAssessment),
    text("Q111", TextField::BetterPrepared),
    text("Q112", TextField::AdoptionLikely),
    text("Q113", TextField::ProjectSuccess),
    text("Q101", TextField::AdditionalFeedback),
    // The learner and their company
    text("Q1101", TextField::JobTitle),
    text("Q1201", TextField::Industry),
    text("Q1801", TextField::LastTraining),
    text("Q1401", TextField::Relationship),
    text("Q1701", TextField::TrainingReason),
    // Record metadata
    text("start_date", TextField::StartDate),
    text("subscript", TextField::Subscription),
    text("surveydate", TextField::SurveyDate),
    text("survey_ver", TextField::SurveyVersion),
];

/// Find the field definition for an export key
pub fn lookup(key: &str) -> Option<&'static FieldSpec> {
    FIELD_TABLE
        .iter()
        .find(|spec| spec.key.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<String> = FIELD_TABLE
            .iter()
            .map(|spec| spec.key.to_ascii_lowercase())
            .collect();
        assert_eq!(keys.len(), FIELD_TABLE.len());
    }

    #[test]
    fn test_every_question_has_one_key() {
        for question in Question::ALL {
            let count = FIELD_TABLE
                .iter()
                .filter(|spec| matches!(spec.kind, FieldKind::Rating { question: q, .. } if q == question))
                .count();
            assert_eq!(count, 1, "{question:?}");
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("q207").map(|s| s.key), Some("Q207"));
        assert_eq!(lookup("SURVEY_VER").map(|s| s.key), Some("survey_ver"));
        assert!(lookup("Q9999").is_none());
    }

    #[test]
    fn test_recommendation_uses_ten_point_scale() {
        match lookup("Q410").unwrap().kind {
            FieldKind::Rating { scale, .. } => assert_eq!(scale, RECOMMENDATION),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_scale_contains() {
        assert!(AGREEMENT.contains(0));
        assert!(AGREEMENT.contains(5));
        assert!(!AGREEMENT.contains(6));
        assert!(!AGREEMENT.contains(-1));
        assert!(RECOMMENDATION.contains(10));
    }
}
