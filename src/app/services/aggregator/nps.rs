//! Net Promoter Score classification and scoring
//!
//! Respondents answer "how likely would you be to recommend this training"
//! on a 0-10 scale and fall into one of three buckets:
//! promoters (9-10), passives (7-8) and detractors (0-6).
//!
//! The score ranges from -100 (everybody is a detractor) to 100 (everybody is
//! a promoter).

use serde::Serialize;

use crate::app::models::NpsTally;
use crate::config::UnansweredPolicy;
use crate::constants::nps::{PASSIVE_MIN, PROMOTER_MIN, SCORE_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NpsBucket {
    Promoter,
    Passive,
    Detractor,
}

/// Classify a recommendation score; scores above the scale are unclassifiable
pub fn classify(score: u8) -> Option<NpsBucket> {
    match score {
        s if s > SCORE_MAX => None,
        s if s >= PROMOTER_MIN => Some(NpsBucket::Promoter),
        s if s >= PASSIVE_MIN => Some(NpsBucket::Passive),
        _ => Some(NpsBucket::Detractor),
    }
}

/// `(promoters - detractors) / respondents * 100`, or `None` with no respondents
pub fn net_promoter_score(promoters: usize, passives: usize, detractors: usize) -> Option<f64> {
    let total = promoters + passives + detractors;
    if total == 0 {
        return None;
    }
    Some((promoters as f64 - detractors as f64) / total as f64 * 100.0)
}

impl NpsTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one response's recommendation score
    ///
    /// A missing or unclassifiable score is counted as unanswered and, under
    /// [`UnansweredPolicy::Detractor`], also as a detractor.
    pub fn record(&mut self, score: Option<u8>, policy: UnansweredPolicy) {
        match score.and_then(classify) {
            Some(NpsBucket::Promoter) => self.promoters += 1,
            Some(NpsBucket::Passive) => self.passives += 1,
            Some(NpsBucket::Detractor) => self.detractors += 1,
            None => {
                self.unanswered += 1;
                if policy == UnansweredPolicy::Detractor {
                    self.detractors += 1;
                }
            }
        }
    }

    /// Responses that count towards the score
    pub fn respondents(&self) -> usize {
        self.promoters + self.passives + self.detractors
    }

    pub fn score(&self) -> Option<f64> {
        net_promoter_score(self.promoters, self.passives, self.detractors)
    }
}
