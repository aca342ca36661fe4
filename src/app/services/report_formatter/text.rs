//! Fixed-width text layout

use std::fmt::Write;

use crate::app::models::{Category, Report};
use crate::constants::layout::{
    COUNT_WIDTH, LABEL_WIDTH, NO_DATA, NPS_LABEL, RESPONSES_LABEL, VALUE_PRECISION, VALUE_WIDTH,
};

/// Render the six report lines: responses, four category averages and NPS
///
/// ```text
/// Responses     5
/// Curriculum    3.75
/// Instructor    4.25
/// Environment   0.00
/// Overall       4.00
/// NPS         100.00
/// ```
pub fn render_text(report: &Report) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<label$} {:>count$}",
        RESPONSES_LABEL,
        report.responses,
        label = LABEL_WIDTH,
        count = COUNT_WIDTH
    );

    for category in Category::ALL {
        push_value(&mut output, category.label(), report.average(category));
    }

    match report.nps {
        Some(nps) => push_value(&mut output, NPS_LABEL, nps),
        None => {
            let _ = writeln!(
                output,
                "{:<label$} {:>value$}",
                NPS_LABEL,
                NO_DATA,
                label = LABEL_WIDTH,
                value = VALUE_WIDTH
            );
        }
    }
    output
}

fn push_value(output: &mut String, label: &str, value: f64) {
    let _ = writeln!(
        output,
        "{:<width$} {:>value_width$.precision$}",
        label,
        value,
        width = LABEL_WIDTH,
        value_width = VALUE_WIDTH,
        precision = VALUE_PRECISION
    );
}

/// Render the per-category comments section
///
/// Categories appear in report order, respondents sorted, and each
/// respondent's comments in input order. Categories without comments are
/// left out.
pub fn render_comments(report: &Report) -> String {
    let mut output = String::new();
    let _ = writeln!(output);

    if report.comments.is_empty() {
        let _ = writeln!(output, "Comments: none");
        return output;
    }

    let _ = writeln!(output, "Comments");
    for category in Category::ALL {
        let Some(by_respondent) = report.comments.for_category(category) else {
            continue;
        };
        let _ = writeln!(output, "{}:", category.label());
        for (respondent, comments) in by_respondent {
            for comment in comments {
                let _ = writeln!(output, "  {respondent}: {comment}");
            }
        }
    }
    output
}
