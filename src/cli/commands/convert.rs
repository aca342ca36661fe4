//! Convert command implementation
//!
//! Prints the flat key/value records of the input as a JSON array, after key
//! normalization and before any type coercion.

use crate::app::services::record_parser::RecordParser;
use crate::app::services::report_formatter::to_json;
use crate::cli::args::ConvertArgs;
use crate::cli::commands::shared::{load_configuration, log_configuration, setup_logging};
use crate::cli::input::open_inputs;
use crate::config::ParserConfig;
use crate::Result;
use std::io::BufRead;
use tracing::info;

/// Render the flat records of export text as a JSON array
pub fn convert_records<R: BufRead>(reader: R, config: &ParserConfig) -> Result<String> {
    let parsed = RecordParser::new(config.clone()).parse_reader(reader)?;
    info!("Parse: {}", parsed.stats.summary());
    to_json(&parsed.records)
}

/// Run the convert command
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let config = load_configuration(&args.input)?;
    setup_logging(&args.input, &config)?;
    log_configuration(&args.input, &config);

    let reader = open_inputs(&args.input.paths)?;
    println!("{}", convert_records(reader, &config.parser)?);
    Ok(())
}
