//! Example: Moving addresses between text, integer and serialized forms
//!
//! Run with: `cargo run --example address_formats`

#![allow(clippy::uninlined_format_args)]

use nwcalc::{text_to_value, value_to_text, Ipv4Value, RawValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Host {
    name: String,
    address: Ipv4Value,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== IPv4 Address Forms Demo ===\n");

    // 1. Text and integer forms
    println!("1. TEXT <-> INTEGER");
    for text in ["0.0.0.0", "192.0.2.1", "37.160.113.170", "255.255.255.255"] {
        let value = text_to_value(text)?;
        println!("   {:>15} -> {:>10} (0x{:08X})", text, value, value);
        assert_eq!(value_to_text(value)?, text);
    }
    println!();

    // 2. Rejected input
    println!("2. REJECTED INPUT");
    for text in ["255.255.255.256", "255.255.255.0255", "255.255.255.25 5"] {
        if let Err(e) = text_to_value(text) {
            println!("   {}", e);
        }
    }
    for raw in [RawValue::Integer(-1), RawValue::Integer(4294967296), RawValue::from("323223552a")] {
        if let Err(e) = value_to_text(&raw) {
            println!("   {} ({})", e, raw.kind());
        }
    }
    println!();

    // 3. Serde: written as text, read from text or integer
    println!("3. SERDE");
    let host = Host {
        name: "gateway".to_string(),
        address: "192.168.0.1".parse()?,
    };
    let json = serde_json::to_string(&host)?;
    println!("   JSON: {}", json);

    let toml_text = toml::to_string(&host)?;
    println!("   TOML: {}", toml_text.replace('\n', " "));

    let from_int: Host = serde_json::from_str(r#"{"name":"gateway","address":3232235521}"#)?;
    println!(
        "   From integer: {} = {}",
        from_int.address,
        from_int.address.as_u32()
    );

    // 4. Standard library interop
    println!("\n4. STD INTEROP");
    let std_addr: std::net::Ipv4Addr = host.address.into();
    println!("   std::net::Ipv4Addr: {} (loopback: {})", std_addr, std_addr.is_loopback());

    Ok(())
}
