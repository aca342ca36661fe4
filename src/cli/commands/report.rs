//! Report command implementation
//!
//! Streams the input through parser, decoder and aggregator, then prints the
//! rendered report on stdout.

use crate::app::models::Report;
use crate::app::services::aggregator::ReportAggregator;
use crate::app::services::record_decoder::{DecodeStats, RecordDecoder};
use crate::app::services::record_parser::{ParseStats, RecordParser};
use crate::app::services::report_formatter::render;
use crate::cli::args::ReportArgs;
use crate::cli::commands::shared::{load_configuration, log_configuration, setup_logging};
use crate::cli::input::open_inputs;
use crate::config::Config;
use crate::Result;
use colored::*;
use std::io::BufRead;
use tracing::{debug, info};

/// Finished report together with the statistics of the run that built it
#[derive(Debug, Clone)]
pub struct ReportRun {
    pub report: Report,
    pub parse_stats: ParseStats,
    pub decode_stats: DecodeStats,
}

/// Build a report from export text
///
/// Records are decoded and folded into the report as they are parsed. A
/// structural error anywhere in the input aborts the run and no report is
/// produced.
pub fn generate_report<R: BufRead>(reader: R, config: &Config) -> Result<ReportRun> {
    let parser = RecordParser::new(config.parser.clone());
    let decoder = RecordDecoder::new(config.decoder.clone());
    let mut accumulator = ReportAggregator::new(config.aggregation.clone()).accumulator();
    let mut decode_stats = DecodeStats::new();

    let mut stream = parser.records(reader);
    for flat in stream.by_ref() {
        let decoded = decoder.decode(flat?);
        decode_stats.record(&decoded);
        accumulator.add(&decoded.record);
    }
    let parse_stats = stream.into_stats();

    let report = accumulator.finish();
    info!("Parse: {}", parse_stats.summary());
    info!("Decode: {}", decode_stats.summary());

    Ok(ReportRun {
        report,
        parse_stats,
        decode_stats,
    })
}

/// Apply report flags over the loaded configuration
pub fn apply_cli_overrides(mut config: Config, args: &ReportArgs) -> Config {
    if let Some(format) = args.format {
        config = config.with_format(format);
    }
    if args.comments {
        config = config.with_comments();
    }
    if let Some(policy) = args.unanswered {
        config = config.with_unanswered_policy(policy);
    }
    config
}

/// Run the report command
pub fn run_report(args: ReportArgs) -> Result<()> {
    let config = apply_cli_overrides(load_configuration(&args.input)?, &args);
    setup_logging(&args.input, &config)?;
    log_configuration(&args.input, &config);

    let reader = open_inputs(&args.input.paths)?;
    let run = generate_report(reader, &config)?;

    if run.decode_stats.has_diagnostics() {
        for error in &run.decode_stats.errors {
            debug!("{}", error);
        }
        eprintln!(
            "{} {} malformed answers in {} of {} responses were treated as unanswered (run with -vv for details)",
            "warning:".bright_yellow().bold(),
            run.decode_stats.field_errors,
            run.decode_stats.records_with_diagnostics,
            run.decode_stats.records_decoded
        );
    }

    print!("{}", render(&run.report, &config.output)?);
    Ok(())
}
