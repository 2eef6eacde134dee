#![no_main]

use libfuzzer_sys::fuzz_target;
use nwcalc::{validate_value, value_to_text, RawValue};

fuzz_target!(|data: &[u8]| {
    // Fuzz loosely typed input from JSON and command-line tokens
    if let Ok(arg) = std::str::from_utf8(data) {
        let raw = RawValue::parse_arg(arg);
        assert_eq!(validate_value(&raw), value_to_text(&raw).is_ok());
    }
});
