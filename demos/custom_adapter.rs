//! Teaching the formatter about your own types.
//!
//! Run with: cargo run --example custom_adapter

use serde_pyrepr::{format, Adapt, Map, Value};

struct Point {
    x: i32,
    y: i32,
}

impl Adapt for Point {
    fn adapt(&self) -> Value {
        Value::Tuple(vec![self.x.adapt(), self.y.adapt()])
    }
}

struct Polygon {
    name: String,
    points: Vec<Point>,
}

impl Adapt for Polygon {
    fn adapt(&self) -> Value {
        let mut map = Map::new();
        map.insert("name".adapt(), self.name.adapt());
        map.insert("points".adapt(), self.points.adapt());
        map.insert("closed".adapt(), (self.points.len() > 2).adapt());
        Value::Mapping(map)
    }
}

/// Rendered as a raw scalar, so it appears unquoted.
struct Hex(u32);

impl Adapt for Hex {
    fn adapt(&self) -> Value {
        Value::raw(format!("0x{:08x}", self.0))
    }
}

fn main() {
    let triangle = Polygon {
        name: "triangle".to_string(),
        points: vec![Point { x: 0, y: 0 }, Point { x: 4, y: 0 }, Point { x: 0, y: 3 }],
    };
    println!("{}", format(&triangle));

    let registers = vec![("pc", Hex(0x1000)), ("sp", Hex(0xdead_beef))];
    println!("{}", format(&registers));
}
