//! Serde types to text and back.
//!
//! Run with: cargo run --example round_trip

use serde::{Deserialize, Serialize};
use serde_pyrepr::{from_str, parse, to_string, Error};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
enum Status {
    Active,
    Suspended { reason: String },
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: Option<String>,
    location: (f64, f64),
    status: Status,
}

fn main() -> Result<(), Error> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: Some("alice@example.com".to_string()),
            location: (52.52, 13.405),
            status: Status::Active,
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: None,
            location: (-33.87, 151.21),
            status: Status::Suspended {
                reason: "too many 'retries'".to_string(),
            },
        },
    ];

    let text = to_string(&users)?;
    println!("Output:\n{}\n", text);

    let users_back: Vec<User> = from_str(&text)?;
    assert_eq!(users, users_back);
    println!("✓ Round-trip successful");

    match parse("[{'id': 1, 'name': 'x'") {
        Err(e) => println!("Broken input: {}", e),
        Ok(value) => println!("Unexpectedly parsed {}", value),
    }

    Ok(())
}
