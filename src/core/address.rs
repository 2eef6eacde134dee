//! # Typed IPv4 Values
//!
//! `Ipv4Value` carries an address that has already passed validation, so code
//! holding one never needs to re-check it. It converts to and from the text
//! and integer forms through the codec, and interoperates with
//! `std::net::Ipv4Addr`.
//!
//! With serde it is written as the dotted-decimal string and read back from
//! either that string or a bare integer.

use crate::core::codec::{self, OCTET_COUNT};
use crate::core::value::RawValue;
use crate::error::{CalcError, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A validated IPv4 address in its 32-bit integer form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ipv4Value(u32);

impl Ipv4Value {
    /// `0.0.0.0`
    pub const MIN: Ipv4Value = Ipv4Value(0);
    /// `255.255.255.255`
    pub const MAX: Ipv4Value = Ipv4Value(u32::MAX);

    /// Wrap an integer; every `u32` is a valid address
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer form
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The four octets, most significant first
    pub const fn octets(self) -> [u8; OCTET_COUNT] {
        self.0.to_be_bytes()
    }

    /// Build from four octets, most significant first
    pub const fn from_octets(octets: [u8; OCTET_COUNT]) -> Self {
        Self(u32::from_be_bytes(octets))
    }
}

impl FromStr for Ipv4Value {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        codec::text_to_value(s).map(Self)
    }
}

impl fmt::Display for Ipv4Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format_octets(self.octets()))
    }
}

impl TryFrom<i64> for Ipv4Value {
    type Error = CalcError;

    fn try_from(value: i64) -> Result<Self> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| CalcError::InvalidRange(value.to_string()))
    }
}

impl TryFrom<RawValue> for Ipv4Value {
    type Error = CalcError;

    fn try_from(value: RawValue) -> Result<Self> {
        match value {
            RawValue::Integer(i) => Self::try_from(i),
            other => Err(CalcError::InvalidRange(other.to_string())),
        }
    }
}

impl From<u32> for Ipv4Value {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Ipv4Value> for u32 {
    fn from(value: Ipv4Value) -> Self {
        value.0
    }
}

impl From<Ipv4Addr> for Ipv4Value {
    fn from(addr: Ipv4Addr) -> Self {
        Self::from_octets(addr.octets())
    }
}

impl From<Ipv4Value> for Ipv4Addr {
    fn from(value: Ipv4Value) -> Self {
        Ipv4Addr::from(value.octets())
    }
}

impl Serialize for Ipv4Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct Ipv4ValueVisitor;

impl<'de> Visitor<'de> for Ipv4ValueVisitor {
    type Value = Ipv4Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a dotted-decimal IPv4 string or an integer in [0, 4294967295]")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Ipv4Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Ipv4Value, E>
    where
        E: de::Error,
    {
        Ipv4Value::try_from(v).map_err(E::custom)
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<Ipv4Value, E>
    where
        E: de::Error,
    {
        u32::try_from(v)
            .map(Ipv4Value)
            .map_err(|_| E::custom(CalcError::InvalidRange(v.to_string())))
    }
}

impl<'de> Deserialize<'de> for Ipv4Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Ipv4ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_parse_and_display() {
        let addr: Ipv4Value = "192.168.0.1".parse().unwrap();
        assert_eq!(addr.as_u32(), 3232235521);
        assert_eq!(addr.octets(), [192, 168, 0, 1]);
        assert_eq!(addr.to_string(), "192.168.0.1");
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        assert!(matches!(
            "192.168.00.1".parse::<Ipv4Value>(),
            Err(CalcError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Ipv4Value::MIN.to_string(), "0.0.0.0");
        assert_eq!(Ipv4Value::MAX.to_string(), "255.255.255.255");
        assert_eq!(Ipv4Value::default(), Ipv4Value::MIN);
        assert!(Ipv4Value::MIN < Ipv4Value::MAX);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_try_from_integers() {
        assert_eq!(Ipv4Value::try_from(0i64).unwrap(), Ipv4Value::MIN);
        assert_eq!(
            Ipv4Value::try_from(codec::MAX_VALUE).unwrap(),
            Ipv4Value::MAX
        );
        assert!(Ipv4Value::try_from(-1i64).is_err());
        assert!(Ipv4Value::try_from(codec::MAX_VALUE + 1).is_err());
    }

    #[test]
    fn test_try_from_raw_value() {
        assert_eq!(
            Ipv4Value::try_from(RawValue::Integer(1)).ok(),
            Some(Ipv4Value::new(1))
        );
        assert!(Ipv4Value::try_from(RawValue::Float(1.0)).is_err());
        assert!(Ipv4Value::try_from(RawValue::from("1")).is_err());
        assert!(Ipv4Value::try_from(RawValue::Bool(true)).is_err());
    }

    #[test]
    fn test_std_interop() {
        let std_addr = Ipv4Addr::new(192, 0, 2, 1);
        let value = Ipv4Value::from(std_addr);
        assert_eq!(value.as_u32(), 3221225985);
        assert_eq!(Ipv4Addr::from(value), std_addr);
        assert_eq!(u32::from(value), u32::from(std_addr));
        assert_eq!(Ipv4Value::from_octets([10, 0, 0, 1]), Ipv4Value::from(0x0A00_0001u32));
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_serde_json() {
        let value = Ipv4Value::new(3232235521);
        let json = serde_json::to_string(&value).expect("serialize");
        assert_eq!(json, "\"192.168.0.1\"");

        let from_text: Ipv4Value = serde_json::from_str("\"192.168.0.1\"").expect("text");
        let from_int: Ipv4Value = serde_json::from_str("3232235521").expect("integer");
        assert_eq!(from_text, value);
        assert_eq!(from_int, value);

        assert!(serde_json::from_str::<Ipv4Value>("4294967296").is_err());
        assert!(serde_json::from_str::<Ipv4Value>("-1").is_err());
        assert!(serde_json::from_str::<Ipv4Value>("1.5").is_err());
        assert!(serde_json::from_str::<Ipv4Value>("\"1.2.3\"").is_err());
    }
}
