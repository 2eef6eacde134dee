use nwcalc::{validate_text, value_to_text};

#[test]
fn stress_value_to_text_sweep_by_65536() {
    // Simulate a long sweep over the address space, ensure no panics and valid output
    let mut value = 0u32;
    loop {
        let text = value_to_text(value).unwrap();
        assert!(validate_text(&text));
        match value.checked_add(1 << 16) {
            Some(next) => value = next,
            None => break,
        }
    }
}
