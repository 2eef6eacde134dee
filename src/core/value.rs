//! # Raw Input Values
//!
//! `RawValue` is the "integer-or-other" input accepted by the integer-side
//! operations. Only the `Integer` variant can ever be a valid IPv4 value; every
//! other variant exists so that callers holding loosely typed data (JSON
//! documents, command-line tokens) can hand it over unchanged and get a
//! rejection instead of a panic.
//!
//! Deserialization is untagged, so a JSON scalar maps onto the variant that
//! matches its JSON type:
//!
//! ```rust
//! use nwcalc::core::value::RawValue;
//!
//! assert_eq!(RawValue::parse_arg("3232235521"), RawValue::Integer(3232235521));
//! assert_eq!(RawValue::parse_arg("\"3232235521\""), RawValue::Text("3232235521".into()));
//! assert_eq!(RawValue::parse_arg("1.5"), RawValue::Float(1.5));
//! assert_eq!(RawValue::parse_arg("323223552a"), RawValue::Text("323223552a".into()));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A loosely typed input value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Boolean; never an integer even though it converts to one in some languages
    Bool(bool),
    /// Signed integer, wide enough to carry the out-of-range neighbours of u32
    Integer(i64),
    /// Floating point number, rejected even when integral
    Float(f64),
    /// String, rejected even when it spells a number
    Text(String),
}

impl RawValue {
    /// Interpret a command-line token as a JSON scalar, falling back to a string.
    ///
    /// Objects, arrays and `null` are not scalars and also fall back to `Text`,
    /// as does any token with surrounding whitespace.
    pub fn parse_arg(arg: &str) -> Self {
        // serde_json skips surrounding whitespace on its own
        if arg.trim() != arg {
            return RawValue::Text(arg.to_string());
        }
        serde_json::from_str::<RawValue>(arg).unwrap_or_else(|_| RawValue::Text(arg.to_string()))
    }

    /// The integer payload, if this is the `Integer` variant
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The string payload, if this is the `Text` variant
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Human-readable name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Bool(_) => "bool",
            RawValue::Integer(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Text(_) => "string",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Integer(i) => write!(f, "{i}"),
            RawValue::Float(x) => write!(f, "{x:?}"),
            RawValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(value: $t) -> Self {
                    RawValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for RawValue {
    fn from(value: u64) -> Self {
        // Beyond i64 is beyond u32 too; saturate so the range check still rejects it
        RawValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Float(f64::from(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<&RawValue> for RawValue {
    fn from(value: &RawValue) -> Self {
        value.clone()
    }
}
