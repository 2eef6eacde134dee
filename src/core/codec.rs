//! # Address Codec
//!
//! Validation and conversion between dotted-decimal IPv4 text and its 32-bit
//! integer form.
//!
//! ## Grammar
//! ```text
//! address = octet "." octet "." octet "." octet
//! octet   = "0" | [1-9] [0-9]? | "1" [0-9] [0-9] | "2" [0-4] [0-9] | "25" [0-5]
//! ```
//! The whole input must match: no whitespace, signs or leading zeros.
//!
//! ## Integer Layout
//! The first octet of the text is the most significant byte:
//! `a.b.c.d == a << 24 | b << 16 | c << 8 | d`.
//!
//! Every function here is pure and may be called from any number of threads.

use crate::core::value::RawValue;
use crate::error::{CalcError, Result};
use tracing::{debug, trace};

/// Number of octets in an IPv4 address
pub const OCTET_COUNT: usize = 4;

/// Largest valid integer form (`255.255.255.255`)
pub const MAX_VALUE: i64 = u32::MAX as i64;

/// Longest valid text form (`255.255.255.255`)
pub const MAX_TEXT_LEN: usize = 15;

/// Parse one octet, rejecting empty, non-digit, leading-zero and >255 input
fn parse_octet(segment: &str) -> Option<u8> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || bytes.len() > 3 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }

    let value = bytes
        .iter()
        .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'));
    u8::try_from(value).ok()
}

/// Parse dotted-decimal text into its four octets, most significant first
pub(crate) fn parse_octets(text: &str) -> Option<[u8; OCTET_COUNT]> {
    if text.len() > MAX_TEXT_LEN {
        return None;
    }

    let mut octets = [0u8; OCTET_COUNT];
    let mut segments = text.split('.');
    for slot in octets.iter_mut() {
        *slot = parse_octet(segments.next()?)?;
    }

    // A fifth segment means too many dots
    if segments.next().is_some() {
        return None;
    }
    Some(octets)
}

/// Render four octets as dotted-decimal text
pub(crate) fn format_octets(octets: [u8; OCTET_COUNT]) -> String {
    let [a, b, c, d] = octets;
    format!("{a}.{b}.{c}.{d}")
}

/// Returns true iff `text` is exactly four dot-separated decimal octets in `[0, 255]`
/// with no leading zeros, whitespace or sign characters.
pub fn validate_text(text: &str) -> bool {
    parse_octets(text).is_some()
}

/// Text validation over a loosely typed value; every non-string variant is rejected.
pub fn validate_raw_text(value: &RawValue) -> bool {
    value.as_text().is_some_and(validate_text)
}

/// Returns true iff `value` is an integer in `[0, 4294967295]`.
///
/// Floats, booleans and strings are rejected even when they look numeric.
pub fn validate_value<V: Into<RawValue>>(value: V) -> bool {
    checked_value(&value.into()).is_some()
}

fn checked_value(value: &RawValue) -> Option<u32> {
    value.as_integer().and_then(|i| u32::try_from(i).ok())
}

/// Convert dotted-decimal text into its integer form.
///
/// # Errors
/// Returns `CalcError::InvalidFormat` if `text` fails [`validate_text`].
pub fn text_to_value(text: &str) -> Result<u32> {
    let Some(octets) = parse_octets(text) else {
        debug!(input = text, "Rejected IPv4 text");
        return Err(CalcError::InvalidFormat(text.to_string()));
    };

    let value = octets
        .iter()
        .fold(0u32, |acc, &octet| (acc << 8) | u32::from(octet));
    trace!(input = text, value, "Converted IPv4 text to integer");
    Ok(value)
}

/// Convert an integer into dotted-decimal text.
///
/// # Errors
/// Returns `CalcError::InvalidRange` if `value` fails [`validate_value`].
pub fn value_to_text<V: Into<RawValue>>(value: V) -> Result<String> {
    let raw = value.into();
    let Some(value) = checked_value(&raw) else {
        debug!(input = %raw, kind = raw.kind(), "Rejected IPv4 integer");
        return Err(CalcError::InvalidRange(raw.to_string()));
    };

    let mut octets = [0u8; OCTET_COUNT];
    for (slot, shift) in octets.iter_mut().zip([24u32, 16, 8, 0]) {
        *slot = ((value >> shift) & 0xFF) as u8;
    }

    let text = format_octets(octets);
    debug_assert!(validate_text(&text));
    trace!(value, output = %text, "Converted integer to IPv4 text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_accepts() {
        for text in ["0.0.0.0", "192.0.2.1", "255.255.255.255", "10.0.100.9", "1.22.199.249"] {
            assert!(validate_text(text), "{text} should be valid");
        }
    }

    #[test]
    fn test_validate_text_rejects() {
        for text in [
            "0.0.0.-1",
            "255.255.255.256",
            "255.255.255.",
            "255.255.255.25 5",
            "255.255.255.a",
            "255.255.255.0255",
            "0.0.0.0255",
            "01.2.3.4",
            "00.0.0.0",
            "1.2.3",
            "1.2.3.4.5",
            "1..2.3",
            " 1.2.3.4",
            "1.2.3.4 ",
            "1.2.3.4\n",
            "+1.2.3.4",
            "",
            "...",
            "1000.1.1.1",
            "٣.1.1.1",
        ] {
            assert!(!validate_text(text), "{text:?} should be invalid");
        }
    }

    #[test]
    fn test_validate_raw_text_rejects_non_strings() {
        assert!(validate_raw_text(&RawValue::from("192.0.2.1")));
        assert!(!validate_raw_text(&RawValue::Integer(3221225985)));
        assert!(!validate_raw_text(&RawValue::Float(1.0)));
        assert!(!validate_raw_text(&RawValue::Bool(true)));
    }

    #[test]
    fn test_validate_value() {
        assert!(validate_value(0));
        assert!(validate_value(1));
        assert!(validate_value(3232235521i64));
        assert!(validate_value(u32::MAX));
        assert!(!validate_value(-1));
        assert!(!validate_value(4294967296i64));
        assert!(!validate_value(32322355201i64));
        assert!(!validate_value("323223552 1"));
        assert!(!validate_value("323223552a"));
        assert!(!validate_value("1"));
        assert!(!validate_value(1.0));
        assert!(!validate_value(true));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_text_to_value() {
        assert_eq!(text_to_value("0.0.0.0").unwrap(), 0);
        assert_eq!(text_to_value("192.0.2.1").unwrap(), 3221225985);
        assert_eq!(text_to_value("255.255.255.255").unwrap(), 4294967295);
        assert_eq!(text_to_value("37.160.113.170").unwrap(), 631271850);
    }

    #[test]
    fn test_text_to_value_failure() {
        assert!(matches!(
            text_to_value("255.255.255.256"),
            Err(CalcError::InvalidFormat(s)) if s == "255.255.255.256"
        ));
        assert!(matches!(
            text_to_value("0.0.0.0255"),
            Err(CalcError::InvalidFormat(_))
        ));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_value_to_text() {
        assert_eq!(value_to_text(0).unwrap(), "0.0.0.0");
        assert_eq!(value_to_text(1).unwrap(), "0.0.0.1");
        assert_eq!(value_to_text(3232235521i64).unwrap(), "192.168.0.1");
        assert_eq!(value_to_text(4294967295u32).unwrap(), "255.255.255.255");
        assert_eq!(value_to_text(631271850).unwrap(), "37.160.113.170");
    }

    #[test]
    fn test_value_to_text_failure() {
        assert!(matches!(
            value_to_text(4294967296i64),
            Err(CalcError::InvalidRange(s)) if s == "4294967296"
        ));
        assert!(matches!(value_to_text(-1), Err(CalcError::InvalidRange(_))));
        assert!(matches!(
            value_to_text("323223552a"),
            Err(CalcError::InvalidRange(_))
        ));
        assert!(matches!(value_to_text(0.0), Err(CalcError::InvalidRange(_))));
    }

    #[test]
    fn test_parse_octet_boundaries() {
        assert_eq!(parse_octet("0"), Some(0));
        assert_eq!(parse_octet("9"), Some(9));
        assert_eq!(parse_octet("10"), Some(10));
        assert_eq!(parse_octet("199"), Some(199));
        assert_eq!(parse_octet("249"), Some(249));
        assert_eq!(parse_octet("255"), Some(255));
        assert_eq!(parse_octet("256"), None);
        assert_eq!(parse_octet("999"), None);
        assert_eq!(parse_octet("00"), None);
        assert_eq!(parse_octet("-0"), None);
    }

    #[test]
    fn test_format_octets() {
        assert_eq!(format_octets([192, 168, 0, 1]), "192.168.0.1");
        assert_eq!(format_octets([0, 0, 0, 0]), "0.0.0.0");
    }
}
