//! Data models for survey processing
//!
//! This module contains the core data structures flowing through the report
//! pipeline: flat key/value records from the parser, typed survey responses
//! from the decoder, and the aggregate report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Flat Record
// =============================================================================

/// One survey response as raw key/value strings, prior to type coercion
///
/// Keys are already normalized (compound-question punctuation removed) and
/// compare case-insensitively: a later write to `q410` replaces an earlier
/// `Q410`, value and spelling both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatRecord {
    fields: BTreeMap<String, String>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let previous = match self.fields.remove(&key) {
            Some(previous) => Some(previous),
            None => self
                .fields
                .keys()
                .find(|existing| existing.eq_ignore_ascii_case(&key))
                .cloned()
                .and_then(|existing| self.fields.remove(&existing)),
        };
        self.fields.insert(key, value.into());
        previous
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for FlatRecord {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = FlatRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

// =============================================================================
// Rated Questions
// =============================================================================

/// Questions answered on an ordinal scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Question {
    /// Q207: the student guide was accurate and had the right amount of detail
    StudentGuide,
    /// Q208: the course had a logical structure and covered relevant subject matter
    CourseStructure,
    /// Q209: the labs adequately reinforced the topics discussed in class
    LabReinforcement,
    /// Q210: the course allowed sufficient time to cover the material
    CoursePacing,
    /// Q306: the instructor demonstrated expertise in the topics taught
    InstructorExpertise,
    /// Q307: the instructor showed evidence of strong preparation
    InstructorPreparation,
    /// Q308: the instructor made concepts and tasks clear
    InstructorClarity,
    /// Q310: the instructor provided accurate and helpful answers to questions
    InstructorAnswers,
    /// Q320: the instructor effectively managed classroom interaction
    ClassroomManagement,
    /// Q1002: pre-class support was effective, responsive and accessible
    PreClassSupport,
    /// Q1003: the audio conferencing system performed adequately
    AudioConferencing,
    /// Q1004: the web conferencing system performed adequately
    WebConferencing,
    /// Q1005: lab exercises performed adequately
    LabPerformance,
    /// Q311: overall rating of the training event
    OverallRating,
    /// Q410: likelihood of recommending the training to a colleague
    Recommendation,
}

impl Question {
    pub const COUNT: usize = 15;

    pub const ALL: [Question; Question::COUNT] = [
        Question::StudentGuide,
        Question::CourseStructure,
        Question::LabReinforcement,
        Question::CoursePacing,
        Question::InstructorExpertise,
        Question::InstructorPreparation,
        Question::InstructorClarity,
        Question::InstructorAnswers,
        Question::ClassroomManagement,
        Question::PreClassSupport,
        Question::AudioConferencing,
        Question::WebConferencing,
        Question::LabPerformance,
        Question::OverallRating,
        Question::Recommendation,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Answers to the rated questions of one response; `None` means absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Ratings([Option<u8>; Question::COUNT]);

impl Ratings {
    pub fn get(&self, question: Question) -> Option<u8> {
        self.0[question.index()]
    }

    pub fn set(&mut self, question: Question, value: Option<u8>) {
        self.0[question.index()] = value;
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Evaluation dimensions reported as averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Curriculum,
    Instructor,
    Environment,
    Overall,
}

impl Category {
    pub const COUNT: usize = 4;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Curriculum,
        Category::Instructor,
        Category::Environment,
        Category::Overall,
    ];

    /// Questions averaged into this category
    ///
    /// Q310 is kept on the record but is not part of the instructor average.
    pub fn questions(self) -> &'static [Question] {
        match self {
            Category::Curriculum => &[
                Question::StudentGuide,
                Question::CourseStructure,
                Question::LabReinforcement,
                Question::CoursePacing,
            ],
            Category::Instructor => &[
                Question::InstructorExpertise,
                Question::InstructorPreparation,
                Question::InstructorClarity,
                Question::ClassroomManagement,
            ],
            Category::Environment => &[
                Question::PreClassSupport,
                Question::AudioConferencing,
                Question::WebConferencing,
                Question::LabPerformance,
            ],
            Category::Overall => &[Question::OverallRating],
        }
    }

    /// Report label
    pub fn label(self) -> &'static str {
        match self {
            Category::Curriculum => "Curriculum",
            Category::Instructor => "Instructor",
            Category::Environment => "Environment",
            Category::Overall => "Overall",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Survey Record
// =============================================================================

/// Free-text fields of a survey response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Country,
    Course,
    CourseVersion,
    Email,
    FoundVersion,
    Instructor,
    Language,
    Modality,
    LearnerName,
    Progress,
    ContactOptIn,
    CurriculumComments,
    InstructorComments,
    ConnectionTested,
    EnvironmentComments,
    OverallComments,
    MetPrerequisites,
    SkillsAssessment,
    BetterPrepared,
    AdoptionLikely,
    ProjectSuccess,
    AdditionalFeedback,
    JobTitle,
    Industry,
    LastTraining,
    Relationship,
    TrainingReason,
    StartDate,
    Subscription,
    SurveyDate,
    SurveyVersion,
}

/// Course survey response for an individual learner
///
/// Built once by the record decoder and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SurveyRecord {
    pub country: String,
    pub course: String,
    pub course_version: String,
    pub email: String,
    pub found_version: String,
    pub instructor: String,
    pub language: String,
    pub modality: String,
    pub learner_name: String,
    pub progress: String,

    /// Q1508: wants to be contacted about the training experience
    pub contact_opt_in: String,

    pub curriculum_comments: String,
    pub instructor_comments: String,
    /// Q1901: tested connection and systems before the course
    pub connection_tested: String,
    pub environment_comments: String,
    pub overall_comments: String,

    // Yes / No questions
    pub met_prerequisites: String,
    pub skills_assessment: String,
    pub better_prepared: String,
    pub adoption_likely: String,
    pub project_success: String,
    pub additional_feedback: String,

    // About the learner and their company
    pub job_title: String,
    pub industry: String,
    pub last_training: String,
    pub relationship: String,
    pub training_reason: String,

    pub start_date: String,
    pub subscription: String,
    pub survey_date: String,
    pub survey_version: String,

    ratings: Ratings,
}

impl SurveyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer to a rated question, if present and valid
    pub fn rating(&self, question: Question) -> Option<u8> {
        self.ratings.get(question)
    }

    /// Answer to a rated question, with absent answers scoring zero
    pub fn score(&self, question: Question) -> u8 {
        self.rating(question).unwrap_or(0)
    }

    pub fn set_rating(&mut self, question: Question, value: Option<u8>) {
        self.ratings.set(question, value);
    }

    /// Builder-style variant of [`SurveyRecord::set_rating`]
    pub fn with_rating(mut self, question: Question, value: u8) -> Self {
        self.set_rating(question, Some(value));
        self
    }

    /// Mean of the per-question scores in `category`
    pub fn category_average(&self, category: Category) -> f64 {
        let questions = category.questions();
        let total: u32 = questions.iter().map(|q| u32::from(self.score(*q))).sum();
        f64::from(total) / questions.len() as f64
    }

    /// Free-text comment left for `category`
    pub fn comment(&self, category: Category) -> &str {
        match category {
            Category::Curriculum => &self.curriculum_comments,
            Category::Instructor => &self.instructor_comments,
            Category::Environment => &self.environment_comments,
            Category::Overall => &self.overall_comments,
        }
    }

    /// Identity used to key comments: learner name, then email
    pub fn respondent(&self) -> Option<&str> {
        [self.learner_name.trim(), self.email.trim()]
            .into_iter()
            .find(|s| !s.is_empty())
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::Country => &mut self.country,
            TextField::Course => &mut self.course,
            TextField::CourseVersion => &mut self.course_version,
            TextField::Email => &mut self.email,
            TextField::FoundVersion => &mut self.found_version,
            TextField::Instructor => &mut self.instructor,
            TextField::Language => &mut self.language,
            TextField::Modality => &mut self.modality,
            TextField::LearnerName => &mut self.learner_name,
            TextField::Progress => &mut self.progress,
            TextField::ContactOptIn => &mut self.contact_opt_in,
            TextField::CurriculumComments => &mut self.curriculum_comments,
            TextField::InstructorComments => &mut self.instructor_comments,
            TextField::ConnectionTested => &mut self.connection_tested,
            TextField::EnvironmentComments => &mut self.environment_comments,
            TextField::OverallComments => &mut self.overall_comments,
            TextField::MetPrerequisites => &mut self.met_prerequisites,
            TextField::SkillsAssessment => &mut self.skills_assessment,
            TextField::BetterPrepared => &mut self.better_prepared,
            TextField::AdoptionLikely => &mut self.adoption_likely,
            TextField::ProjectSuccess => &mut self.project_success,
            TextField::AdditionalFeedback => &mut self.additional_feedback,
            TextField::JobTitle => &mut self.job_title,
            TextField::Industry => &mut self.industry,
            TextField::LastTraining => &mut self.last_training,
            TextField::Relationship => &mut self.relationship,
            TextField::TrainingReason => &mut self.training_reason,
            TextField::StartDate => &mut self.start_date,
            TextField::Subscription => &mut self.subscription,
            TextField::SurveyDate => &mut self.survey_date,
            TextField::SurveyVersion => &mut self.survey_version,
        };
        *slot = value.into();
    }
}

// =============================================================================
// Report
// =============================================================================

/// Respondent counts per Net Promoter bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpsTally {
    /// Recommendation score 9-10
    pub promoters: usize,
    /// Recommendation score 7-8
    pub passives: usize,
    /// Recommendation score 0-6
    pub detractors: usize,
    /// No usable recommendation score
    pub unanswered: usize,
}

/// Comments per category, keyed by respondent then in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryComments {
    by_category: BTreeMap<Category, BTreeMap<String, Vec<String>>>,
}

impl CategoryComments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, respondent: impl Into<String>, comment: impl Into<String>) {
        self.by_category
            .entry(category)
            .or_default()
            .entry(respondent.into())
            .or_default()
            .push(comment.into());
    }

    pub fn for_category(&self, category: Category) -> Option<&BTreeMap<String, Vec<String>>> {
        self.by_category.get(&category)
    }

    /// Total number of comments across all categories
    pub fn len(&self) -> usize {
        self.by_category
            .values()
            .flat_map(|by_respondent| by_respondent.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Final average scores, NPS and comments over a batch of survey responses
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub responses: usize,

    pub curriculum_avg: f64,
    pub instructor_avg: f64,
    pub environment_avg: f64,
    pub overall_avg: f64,

    /// `None` when no response had a classifiable recommendation score
    pub nps: Option<f64>,
    pub nps_tally: NpsTally,

    #[serde(skip_serializing_if = "CategoryComments::is_empty")]
    pub comments: CategoryComments,
}

impl Report {
    pub fn average(&self, category: Category) -> f64 {
        match category {
            Category::Curriculum => self.curriculum_avg,
            Category::Instructor => self.instructor_avg,
            Category::Environment => self.environment_avg,
            Category::Overall => self.overall_avg,
        }
    }

    /// True when the report covers no responses at all
    pub fn is_empty(&self) -> bool {
        self.responses == 0
    }
}
