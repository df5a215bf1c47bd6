//! Changing brackets, separators and the string delimiter.
//!
//! Run with: cargo run --example custom_delimiters

use serde_pyrepr::{format_with_config, parse_with_config, value, ContainerKind, DelimiterConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let data = value!({"name": "O'Brien", "ids": {1, 2}, "pair": (3, 4), "list": [5, 6]});

    let json_ish = DelimiterConfig::new()
        .with_string_delimiter('"')
        .with_value_separator(",")
        .with_key_value_separator(":");
    println!("{}", format_with_config(&data, &json_ish));

    let explicit_sets = DelimiterConfig::new()
        .with_brackets(ContainerKind::Set, "set(", ")")
        .with_brackets(ContainerKind::Sequence, "<", ">");
    let text = format_with_config(&data, &explicit_sets);
    println!("{}", text);

    // The same configuration reads the text back
    let back = parse_with_config(&text, &explicit_sets)?;
    assert_eq!(back, data);
    println!("✓ Round-trip successful");

    // A configuration the parser cannot read unambiguously is rejected
    let ambiguous = DelimiterConfig::new().with_key_value_separator(" , ");
    if let Err(e) = ambiguous.validate() {
        println!("Rejected: {}", e);
    }

    Ok(())
}
