//! JSON rendering

use serde::Serialize;

use crate::app::models::{CategoryComments, Report};
use crate::{Error, Result};

/// Render any serializable payload as pretty-printed JSON
pub fn to_json<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    serde_json::to_string_pretty(payload)
        .map_err(|e| Error::serialization("Failed to render JSON output", e))
}

/// Render the report as JSON, optionally leaving out the comments
///
/// A missing NPS is rendered as `null`.
pub fn render_json(report: &Report, include_comments: bool) -> Result<String> {
    if include_comments {
        return to_json(report);
    }

    let without_comments = Report {
        comments: CategoryComments::new(),
        ..report.clone()
    };
    to_json(&without_comments)
}
