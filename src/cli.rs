//! # Command-Line Interface
//!
//! Argument definitions and command execution for the `nwcalc` binary.
//! Execution is kept here, separate from `main`, so that it can be tested
//! without spawning a process.
//!
//! ```text
//! nwcalc to-int 192.0.2.1        # 3221225985
//! nwcalc to-ip 3232235521        # 192.168.0.1
//! nwcalc --json check 10.0.0.1
//! ```

use crate::config::{CalcConfig, OutputConfig, OutputFormat};
use crate::core::codec::{text_to_value, validate_raw_text, validate_value, value_to_text};
use crate::core::value::RawValue;
use crate::error::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, Level};

/// Convert and validate IPv4 addresses in dotted-decimal and integer form
#[derive(Parser, Debug)]
#[command(name = "nwcalc")]
#[command(about = "Convert and validate IPv4 addresses in dotted-decimal and integer form")]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of the bare result
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<Level>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Convert dotted-decimal text to its integer form
    ToInt {
        /// Address such as 192.0.2.1
        #[arg(allow_hyphen_values = true)]
        address: String,
    },

    /// Convert an integer to dotted-decimal text
    ToIp {
        /// Value read as a JSON scalar; a quoted number is a string and is rejected
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Report whether the input is valid text and/or a valid integer
    Check {
        /// Input read as a JSON scalar, falling back to a plain string
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
}

impl Cli {
    /// Resolve the effective configuration: file (or defaults), then environment, then flags
    pub fn resolve_config(&self) -> Result<CalcConfig> {
        let mut config = match &self.config {
            Some(path) => CalcConfig::from_file(path)?,
            None => CalcConfig::default(),
        };
        config.apply_env()?;

        if self.json {
            config.output.format = OutputFormat::Json;
        }
        if let Some(level) = self.log_level {
            config.logging.log_level = level;
        }

        config.validate_strict()?;
        Ok(config)
    }
}

/// Outcome of one command, printed as the bare result or as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// `to-int`
    Value { input: String, value: u32 },
    /// `to-ip`
    Text { input: RawValue, text: String },
    /// `check`
    Check {
        input: RawValue,
        valid_text: bool,
        valid_value: bool,
    },
}

impl Report {
    /// Render according to the output configuration
    pub fn render(&self, output: &OutputConfig) -> Result<String> {
        match output.format {
            OutputFormat::Json if output.pretty => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Plain => Ok(match self {
                Report::Value { value, .. } => value.to_string(),
                Report::Text { text, .. } => text.clone(),
                Report::Check {
                    valid_text,
                    valid_value,
                    ..
                } => format!("text: {valid_text}\nvalue: {valid_value}"),
            }),
        }
    }
}

/// Execute a command.
///
/// # Errors
/// Returns the codec's `InvalidFormat` / `InvalidRange` error when the input is rejected.
pub fn execute(command: &Command) -> Result<Report> {
    match command {
        Command::ToInt { address } => {
            let value = text_to_value(address)?;
            info!(address = %address, value, "to-int");
            Ok(Report::Value {
                input: address.clone(),
                value,
            })
        }
        Command::ToIp { value } => {
            let raw = RawValue::parse_arg(value);
            let text = value_to_text(&raw)?;
            info!(value = %raw, text = %text, "to-ip");
            Ok(Report::Text { input: raw, text })
        }
        Command::Check { input } => {
            let raw = RawValue::parse_arg(input);
            let valid_text = validate_raw_text(&raw);
            let valid_value = validate_value(&raw);
            Ok(Report::Check {
                input: raw,
                valid_text,
                valid_value,
            })
        }
    }
}
