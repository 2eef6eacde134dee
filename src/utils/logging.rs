//! Structured logging setup.
//!
//! Installs a global `tracing` subscriber described by a [`LoggingConfig`].
//! `RUST_LOG` takes precedence over the configured level when it is set.

use crate::config::LoggingConfig;
use crate::error::{constants, CalcError, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::{info, Level};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::EnvFilter;

/// Build the env filter, preferring `RUST_LOG` over the configured level
pub fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()))
}

fn make_writer(config: &LoggingConfig) -> Result<BoxMakeWriter> {
    let file = match (config.log_to_file, config.log_file_path.as_deref()) {
        (true, Some(path)) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CalcError::ConfigError(format!("{} {path}: {e}", constants::ERR_LOG_FILE))
                })?,
        ),
        _ => None,
    };

    let writer = match (config.log_to_console, file) {
        (true, Some(file)) => BoxMakeWriter::new(std::io::stderr.and(Mutex::new(file))),
        (false, Some(file)) => BoxMakeWriter::new(Mutex::new(file)),
        _ => BoxMakeWriter::new(std::io::stderr),
    };
    Ok(writer)
}

/// Install the global subscriber.
///
/// # Errors
/// Returns `CalcError::ConfigError` if the configuration is invalid, the log file
/// cannot be opened, or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(CalcError::ConfigError(errors.join("; ")));
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_level))
        .with_writer(make_writer(config)?)
        .with_target(true)
        .with_ansi(false);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| CalcError::ConfigError(format!("{}: {e}", constants::ERR_LOG_INIT)))?;

    info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_is_rejected_before_install() {
        let config = LoggingConfig {
            log_to_console: false,
            log_to_file: false,
            ..LoggingConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(CalcError::ConfigError(msg)) if msg.contains("At least one logging output")
        ));
    }

    #[test]
    fn test_missing_log_directory_is_rejected() {
        let config = LoggingConfig {
            log_to_file: true,
            log_file_path: Some("/nonexistent-nwcalc-dir/out.log".to_string()),
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config).is_err());
    }
}
