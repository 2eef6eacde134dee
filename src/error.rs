//! # Error Types
//!
//! Error handling for address validation and conversion.
//!
//! Malformed input is an expected, common case, so the converters surface it as an
//! `Err` value instead of panicking. The validators themselves never fail.
//!
//! ## Error Categories
//! - **Format Errors**: text that is not dotted-decimal IPv4
//! - **Range Errors**: values that are not integers in `[0, 4294967295]`
//! - **Configuration Errors**: unreadable, unparsable or invalid configuration
//! - **I/O Errors**: config and log file access
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use nwcalc::core::codec::text_to_value;
//! use nwcalc::error::{CalcError, Result};
//!
//! fn first_octet(text: &str) -> Result<u8> {
//!     let value = text_to_value(text)?;
//!     Ok((value >> 24) as u8)
//! }
//!
//! assert_eq!(first_octet("192.0.2.1").ok(), Some(192));
//! assert!(matches!(first_octet("192.0.2"), Err(CalcError::InvalidFormat(_))));
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants shared by the codec, configuration and CLI layers.
pub mod constants {
    /// Configuration errors
    pub const ERR_CONFIG_OPEN: &str = "Failed to open config file";
    pub const ERR_CONFIG_READ: &str = "Failed to read config file";
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";
    pub const ERR_CONFIG_SERIALIZE: &str = "Failed to serialize config";
    pub const ERR_CONFIG_WRITE: &str = "Failed to write config file";

    /// Logging errors
    pub const ERR_LOG_FILE: &str = "Failed to open log file";
    pub const ERR_LOG_INIT: &str = "Failed to install tracing subscriber";
}

// CalcError is the single error type for the crate
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum CalcError {
    #[error("Invalid IPv4 format: {0:?} is not a dotted-decimal IPv4 address")]
    InvalidFormat(String),

    #[error("Invalid IPv4 range: {0} is not an integer in [0, 4294967295]")]
    InvalidRange(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),
}

impl CalcError {
    /// True for the two input-rejection variants, as opposed to environment failures
    pub fn is_rejection(&self) -> bool {
        matches!(self, CalcError::InvalidFormat(_) | CalcError::InvalidRange(_))
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::Serialization(e.to_string())
    }
}

/// Type alias for Results using CalcError
pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message_quotes_input() {
        let err = CalcError::InvalidFormat("255.255.255.25 5".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid IPv4 format: \"255.255.255.25 5\" is not a dotted-decimal IPv4 address"
        );
    }

    #[test]
    fn test_range_error_message() {
        let err = CalcError::InvalidRange("4294967296".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid IPv4 range: 4294967296 is not an integer in [0, 4294967295]"
        );
    }

    #[test]
    fn test_rejection_classification() {
        assert!(CalcError::InvalidFormat(String::new()).is_rejection());
        assert!(CalcError::InvalidRange(String::new()).is_rejection());
        assert!(!CalcError::ConfigError(String::new()).is_rejection());
        assert!(!CalcError::Io(io::Error::new(io::ErrorKind::Other, "x")).is_rejection());
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_error_serializes_to_json() {
        let err = CalcError::InvalidRange("-1".to_string());
        let json = serde_json::to_string(&err).expect("serialize");
        assert_eq!(json, r#"{"InvalidRange":"-1"}"#);
    }
}
