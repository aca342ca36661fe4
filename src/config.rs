//! Configuration management and validation.
//!
//! Provides the layered configuration for parsing, decoding, aggregation and
//! output. Values come from built-in defaults, then an optional TOML file,
//! then command-line overrides applied by the CLI.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV_VAR, DEFAULT_COMPOUND_KEY_PUNCTUATION,
    DEFAULT_DELIMITER, DEFAULT_LOG_LEVEL, DEFAULT_RECORD_SEPARATOR, NOT_APPLICABLE_MARKERS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Export format settings for the record parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Splits each data line into key and value
    pub delimiter: char,

    /// Whole-line sentinel that closes the current record
    pub record_separator: String,

    /// Stripped from keys so `Q12-15` becomes `Q1215`
    pub compound_key_punctuation: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            record_separator: DEFAULT_RECORD_SEPARATOR.to_string(),
            compound_key_punctuation: DEFAULT_COMPOUND_KEY_PUNCTUATION,
        }
    }
}

/// Field coercion settings for the record decoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Values meaning "not answered"; decoded as absent without a diagnostic
    pub not_applicable_markers: Vec<String>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            not_applicable_markers: NOT_APPLICABLE_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Treatment of responses without a usable recommendation score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UnansweredPolicy {
    /// Leave them out of the NPS denominator
    #[default]
    Exclude,
    /// Count them as detractors, as legacy reports did
    Detractor,
}

/// Aggregation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub unanswered_recommendation: UnansweredPolicy,

    /// Gather per-category comments into the report
    pub collect_comments: bool,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            unanswered_recommendation: UnansweredPolicy::Exclude,
            collect_comments: true,
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Fixed-width text
    #[default]
    Text,
    /// JSON for scripting
    Json,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Include the per-category comments in the rendered report
    pub include_comments: bool,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is unset (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Global configuration for survey report generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub decoder: DecoderConfig,
    pub aggregation: AggregationConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default location: `<config dir>/survey-reporter/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolve which configuration file to read, if any
    ///
    /// An explicit path wins, then `SURVEY_REPORTER_CONFIG`, then the default
    /// location when a file exists there.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path().ok().filter(|path| path.exists())
    }

    /// Parse a configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::config_parsing(origin, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Defaults overlaid by the resolved configuration file
    pub fn load_layered(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit) {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check settings for internal consistency
    pub fn validate(&self) -> Result<()> {
        let parser = &self.parser;
        if parser.delimiter == parser.compound_key_punctuation {
            return Err(Error::configuration(format!(
                "Delimiter '{}' cannot also be the compound key punctuation",
                parser.delimiter
            )));
        }
        if parser.record_separator.is_empty() {
            return Err(Error::configuration("Record separator cannot be empty"));
        }
        if !parser.record_separator.contains(parser.delimiter) {
            return Err(Error::configuration(format!(
                "Record separator {:?} must contain the delimiter '{}'",
                parser.record_separator, parser.delimiter
            )));
        }

        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}'. Expected one of: {}",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }

    /// Include comments in text output
    pub fn with_comments(mut self) -> Self {
        self.output.include_comments = true;
        self
    }

    /// Set the NPS policy for unanswered recommendation scores
    pub fn with_unanswered_policy(mut self, policy: UnansweredPolicy) -> Self {
        self.aggregation.unanswered_recommendation = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.parser.delimiter, '=');
        assert_eq!(config.parser.record_separator, "=");
        assert_eq!(config.parser.compound_key_punctuation, '-');
        assert_eq!(
            config.aggregation.unanswered_recommendation,
            UnansweredPolicy::Exclude
        );
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
[aggregation]
unanswered_recommendation = "detractor"

[output]
format = "json"
"#,
            "inline",
        )
        .unwrap();

        assert_eq!(
            config.aggregation.unanswered_recommendation,
            UnansweredPolicy::Detractor
        );
        assert!(config.aggregation.collect_comments);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.parser, ParserConfig::default());
    }

    #[test]
    fn test_rejects_delimiter_equal_to_punctuation() {
        let result = Config::from_toml_str(
            r#"
[parser]
delimiter = "-"
record_separator = "-"
"#,
            "inline",
        );
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_rejects_separator_without_delimiter() {
        let mut config = Config::default();
        config.parser.record_separator = "---".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "chatty".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_reports_origin() {
        let err = Config::from_toml_str("[parser", "broken.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigParsing { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_malformed_toml_detail_names_parse_failure() {
        let err = Config::from_toml_str("[parser\n", "broken.toml").unwrap_err();
        let Error::ConfigParsing { source, .. } = &err else {
            panic!("expected config parsing error, got {err:?}");
        };

        let detail = err.detailed_message();
        assert!(detail.starts_with(&err.to_string()));
        assert!(detail.len() > err.to_string().len());
        assert!(detail.contains(&source.to_string()));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ninclude_comments = true").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.output.include_comments);
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/explicit.toml");
        assert_eq!(Config::resolve_path(Some(&path)), Some(path));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let result = Config::from_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
