//! Shared components for CLI commands
//!
//! This module contains the logging and configuration setup used by every
//! command implementation.

use crate::cli::args::InputArgs;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins when set. Otherwise the level comes from `-v`/`-q`, then
/// from the configuration file.
pub fn setup_logging(args: &InputArgs, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args
        .get_log_level()
        .map(str::to_string)
        .unwrap_or_else(|| config.logging.level.to_ascii_lowercase());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let initialized = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    initialized.map_err(|e| Error::configuration(format!("Failed to initialize logging: {e}")))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file)
pub fn load_configuration(args: &InputArgs) -> Result<Config> {
    args.validate()?;
    let config = Config::load_layered(args.config_file.as_deref())?;
    config.validate()?;
    Ok(config)
}

/// Log the effective configuration once logging is up
pub fn log_configuration(args: &InputArgs, config: &Config) {
    match Config::resolve_path(args.config_file.as_deref()) {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }
    debug!("Effective configuration: {:?}", config);
}
