//! Report aggregation over decoded survey records
//!
//! Aggregation is a single linear pass keeping running sums, so records can be
//! fed one at a time or as a batch.

use tracing::{debug, info};

use crate::app::models::{Category, CategoryComments, NpsTally, Question, Report, SurveyRecord};
use crate::config::AggregationConfig;

/// Running totals for a report under construction
#[derive(Debug, Clone)]
pub struct ReportAccumulator {
    config: AggregationConfig,
    responses: usize,
    category_sums: [f64; Category::COUNT],
    nps: NpsTally,
    comments: CategoryComments,
}

impl ReportAccumulator {
    pub fn new(config: AggregationConfig) -> Self {
        Self {
            config,
            responses: 0,
            category_sums: [0.0; Category::COUNT],
            nps: NpsTally::new(),
            comments: CategoryComments::new(),
        }
    }

    /// Fold one response into the totals
    pub fn add(&mut self, record: &SurveyRecord) {
        self.responses += 1;

        for (sum, category) in self.category_sums.iter_mut().zip(Category::ALL) {
            *sum += record.category_average(category);
        }

        self.nps.record(
            record.rating(Question::Recommendation),
            self.config.unanswered_recommendation,
        );

        if self.config.collect_comments {
            self.collect_comments(record);
        }
    }

    fn collect_comments(&mut self, record: &SurveyRecord) {
        let respondent = record
            .respondent()
            .map(str::to_string)
            .unwrap_or_else(|| format!("respondent #{}", self.responses));

        for category in Category::ALL {
            let comment = record.comment(category).trim();
            if !comment.is_empty() {
                self.comments.push(category, respondent.as_str(), comment);
            }
        }
    }

    pub fn responses(&self) -> usize {
        self.responses
    }

    /// Close the batch and compute averages and NPS
    ///
    /// An empty batch yields zero averages and no NPS.
    pub fn finish(self) -> Report {
        let responses = self.responses;
        // Same order as Category::ALL
        let [curriculum_avg, instructor_avg, environment_avg, overall_avg] =
            self.category_sums.map(|sum| {
                if responses == 0 {
                    0.0
                } else {
                    sum / responses as f64
                }
            });

        let report = Report {
            responses,
            curriculum_avg,
            instructor_avg,
            environment_avg,
            overall_avg,
            nps: self.nps.score(),
            nps_tally: self.nps,
            comments: self.comments,
        };

        if report.nps.is_none() {
            debug!(
                "No classifiable recommendation scores among {} responses",
                report.responses
            );
        }

        report
    }
}

/// Aggregator from survey records to a single report
#[derive(Debug, Clone, Default)]
pub struct ReportAggregator {
    config: AggregationConfig,
}

impl ReportAggregator {
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Start an incremental aggregation
    pub fn accumulator(&self) -> ReportAccumulator {
        ReportAccumulator::new(self.config.clone())
    }

    /// Aggregate a batch of records into one report
    pub fn aggregate<'a, I>(&self, records: I) -> Report
    where
        I: IntoIterator<Item = &'a SurveyRecord>,
    {
        let mut accumulator = self.accumulator();
        for record in records {
            accumulator.add(record);
        }

        let report = accumulator.finish();
        info!(
            "Aggregated {} responses ({} NPS respondents, {} unanswered)",
            report.responses,
            report.nps_tally.respondents(),
            report.nps_tally.unanswered
        );
        report
    }
}
