//! # Core Address Components
//!
//! Validation and conversion between the two forms of an IPv4 address.
//!
//! ## Components
//! - **Codec**: validators and converters for dotted-decimal text and 32-bit integers
//! - **Value**: loosely typed input values (`RawValue`) for the integer side
//! - **Address**: the validated `Ipv4Value` newtype
//!
//! ## Forms
//! ```text
//! "192.0.2.1"  <->  3221225985  (0xC0000201)
//! ```
//!
//! Nothing in this module holds state; every call is independent.

pub mod address;
pub mod codec;
pub mod value;
