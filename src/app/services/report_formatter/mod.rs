//! Report rendering
//!
//! The finished [`Report`] is rendered either as the fixed-width text layout
//! (one metric per line) or as pretty-printed JSON. Rendering is a pure
//! function of the report, so the same report always yields the same bytes.
//!
//! [`Report`]: crate::app::models::Report

pub mod json;
pub mod text;

#[cfg(test)]
pub mod tests;

pub use json::{render_json, to_json};
pub use text::{render_comments, render_text};

use crate::Result;
use crate::app::models::Report;
use crate::config::{OutputConfig, OutputFormat};

/// Render `report` in the configured format
pub fn render(report: &Report, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Text => {
            let mut rendered = render_text(report);
            if output.include_comments {
                rendered.push_str(&render_comments(report));
            }
            Ok(rendered)
        }
        OutputFormat::Json => render_json(report, output.include_comments),
    }
}
