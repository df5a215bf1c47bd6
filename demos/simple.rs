//! Formatting standard containers.
//!
//! Run with: cargo run --example simple

use indexmap::IndexMap;
use serde_pyrepr::format;
use std::collections::{BTreeSet, VecDeque};

fn main() {
    let numbers = vec![1, 2, 3];
    println!("{}", format(&numbers));

    let record = (42, "Alice Johnson", true);
    println!("{}", format(&record));

    let mut scores = IndexMap::new();
    scores.insert("alice", vec![90, 85]);
    scores.insert("bob", vec![]);
    println!("{}", format(&scores));

    let tags: BTreeSet<&str> = ["rust", "serde", "it's"].into_iter().collect();
    println!("{}", format(&tags));

    let history: VecDeque<Option<(u8, char)>> = vec![Some((1, 'a')), None].into();
    println!("{}", format(&history));
}
