//! Command-line argument definitions for the survey reporter
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::config::{OutputFormat, UnansweredPolicy};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the survey reporter
///
/// Turns line-delimited training survey exports into a satisfaction report
/// with category averages and a Net Promoter Score.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "survey-reporter",
    version,
    about = "Generate satisfaction and NPS reports from training survey exports",
    long_about = "Reads line-delimited KEY=VALUE survey exports, where a line holding only '=' \
                  separates one response from the next, and prints the number of responses, \
                  the curriculum, instructor, environment and overall averages and the Net \
                  Promoter Score."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the survey reporter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Aggregate survey exports into a report (main command)
    Report(ReportArgs),
    /// Print the parsed key/value records as JSON
    Convert(ConvertArgs),
}

/// Options shared by every command: inputs, configuration and verbosity
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct InputArgs {
    /// Survey export files or directories
    ///
    /// Files are read in order as one stream. Directories are searched
    /// recursively for .txt files. Reads stdin when no path is given.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, uses $SURVEY_REPORTER_CONFIG
    /// or ~/.config/survey-reporter/config.toml when present.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the report command
#[derive(Debug, Clone, Default, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format for the report
    #[arg(long = "format", value_enum, help = "Output format for the report")]
    pub format: Option<OutputFormat>,

    /// Append the comments left for each category
    #[arg(long = "comments", help = "Include per-category comments")]
    pub comments: bool,

    /// NPS treatment of responses with no usable recommendation score
    ///
    /// `exclude` leaves them out of the NPS denominator, `detractor` counts
    /// them as detractors.
    #[arg(
        long = "unanswered",
        value_enum,
        value_name = "POLICY",
        help = "How unanswered recommendation scores count towards NPS"
    )]
    pub unanswered: Option<UnansweredPolicy>,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Default, Parser)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl InputArgs {
    /// Validate the shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    ///
    /// Returns `None` when neither flag was given, leaving the configured level.
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
