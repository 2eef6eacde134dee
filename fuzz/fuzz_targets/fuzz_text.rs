#![no_main]

use libfuzzer_sys::fuzz_target;
use nwcalc::{text_to_value, validate_text, value_to_text};

fuzz_target!(|data: &[u8]| {
    // Fuzz the text parser - test for panics and round-trip violations
    if let Ok(text) = std::str::from_utf8(data) {
        let valid = validate_text(text);
        match text_to_value(text) {
            Ok(value) => {
                assert!(valid);
                assert_eq!(value_to_text(value).ok().as_deref(), Some(text));
            }
            Err(_) => assert!(!valid),
        }
    }
});
