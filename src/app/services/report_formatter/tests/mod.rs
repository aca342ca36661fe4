//! Test utilities for report rendering testing

use crate::app::models::{CategoryComments, NpsTally, Report};


/// Report for five identical promoter responses
pub fn create_promoter_report() -> Report {
    Report {
        responses: 5,
        curriculum_avg: 3.75,
        instructor_avg: 4.25,
        environment_avg: 0.0,
        overall_avg: 4.0,
        nps: Some(100.0),
        nps_tally: NpsTally {
            promoters: 5,
            ..NpsTally::default()
        },
        comments: CategoryComments::new(),
    }
}

/// Report carrying comments in two categories
pub fn create_commented_report() -> Report {
    let mut comments = CategoryComments::new();
    comments.push(crate::Category::Overall, "bob@example.com", "Fine");
    comments.push(crate::Category::Curriculum, "Ada Lovelace", "Labs were long");
    comments.push(crate::Category::Overall, "Ada Lovelace", "Great");
    comments.push(crate::Category::Overall, "Ada Lovelace", "Would return");

    Report {
        comments,
        ..create_promoter_report()
    }
}
