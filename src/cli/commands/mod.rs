//! Command implementations for the survey reporter CLI
//!
//! Each command is implemented in its own module:
//! - `report`: Aggregate exports into a text or JSON report
//! - `convert`: Dump the parsed flat records as JSON

pub mod convert;
pub mod report;
pub mod shared;

pub use report::{ReportRun, generate_report};

use crate::cli::args::Commands;
use crate::Result;

/// Dispatch to the handler of the given subcommand
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Report(report_args) => report::run_report(report_args),
        Commands::Convert(convert_args) => convert::run_convert(convert_args),
    }
}
