//! Timing blocks and closures.
//!
//! Block reports go through the `log` facade; set `RUST_LOG` to change the
//! level (defaults to info here).
//!
//! Run with: cargo run --example timing

use serde_pyrepr::format;
use serde_pyrepr::timed::{call, calls, human_duration, Block};
use std::collections::BTreeMap;
use std::time::Duration;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("{}", human_duration(Duration::from_millis(42)));
    println!("{}", human_duration(Duration::from_secs(3 * 3600 + 2 * 60 + 1)));

    {
        let outer = Block::new("build_report");
        let counts = {
            let _inner = outer.nested("count_words");
            let mut counts = BTreeMap::new();
            for word in "the quick brown fox jumps over the lazy dog the end".split(' ') {
                *counts.entry(word).or_insert(0) += 1;
            }
            counts
        };
        let text = call("format_counts", || format(&counts));
        println!("{}", text);
    }

    let info = calls("format_vec", 1_000, || {
        let _ = format(&(0..64).collect::<Vec<u32>>());
    });
    println!("{}", info);
}
