//! # nwcalc
//!
//! Validation and conversion between dotted-decimal IPv4 text and its 32-bit
//! unsigned integer form.
//!
//! ```rust
//! use nwcalc::{text_to_value, validate_text, validate_value, value_to_text};
//!
//! assert!(validate_text("192.0.2.1"));
//! assert!(!validate_text("192.0.2.01"));
//! assert_eq!(text_to_value("192.0.2.1").ok(), Some(3221225985));
//!
//! assert!(validate_value(3232235521i64));
//! assert!(!validate_value(-1));
//! assert_eq!(value_to_text(3232235521i64).ok().as_deref(), Some("192.168.0.1"));
//! ```
//!
//! ## Modules
//! - [`core`]: the codec, input values and the typed `Ipv4Value`
//! - [`error`]: `CalcError` and the `Result` alias
//! - [`config`]: output and logging settings for the CLI
//! - [`utils`]: logging setup
//! - [`cli`]: the `nwcalc` command-line front end

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::address::Ipv4Value;
pub use crate::core::codec::{
    text_to_value, validate_raw_text, validate_text, validate_value, value_to_text,
};
pub use crate::core::value::RawValue;
pub use crate::error::{CalcError, Result};
