//! # serde_pyrepr
//!
//! Render Rust values the way Python prints its containers, and read that text back.
//!
//! ## What is it for?
//!
//! Debug output, log lines and test expectations often need a compact,
//! readable dump of nested data: `[1, 2, 3]`, `{'a': 1, 'b': 2}`,
//! `(1, 'foo', true)`. This crate produces exactly that for standard
//! containers, tuples, strings and primitives, and for any Serde type.
//!
//! ## Key Features
//!
//! - **One formatter, any container**: sequences, sets, mappings and tuples
//!   nest freely and are rendered by a single recursive walk
//! - **Strings are marked at build time**: string scalars are quoted and
//!   escaped, numbers and other raw scalars are written verbatim
//! - **Configurable layout**: brackets, separators and the string delimiter
//!   are all set through [`DelimiterConfig`]
//! - **Serde Compatible**: any `#[derive(Serialize)]` type can be formatted,
//!   and text can be read back into `#[derive(Deserialize)]` types
//! - **Extensible**: implement [`Adapt`] to control how your own types look
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_pyrepr = "0.1"
//! ```
//!
//! ### Formatting native values
//!
//! ```rust
//! use indexmap::IndexMap;
//! use serde_pyrepr::format;
//!
//! assert_eq!(format(&vec![1, 2, 3]), "[1, 2, 3]");
//! assert_eq!(format(&(1, "foo", true)), "(1, 'foo', true)");
//! assert_eq!(format(&vec!["it's"]), r"['it\'s']");
//!
//! let mut scores = IndexMap::new();
//! scores.insert("a", 1);
//! scores.insert("b", 2);
//! assert_eq!(format(&scores), "{'a': 1, 'b': 2}");
//! ```
//!
//! ### Serde round trip
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_pyrepr::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let user = User { id: 7, name: "Alice".to_string(), tags: vec!["admin".to_string()] };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "{'id': 7, 'name': 'Alice', 'tags': ['admin']}");
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ### Dynamic values with the value! macro
//!
//! ```rust
//! use serde_pyrepr::value;
//!
//! let data = value!({"name": "Alice", "scores": (90, 85), "tags": {"x", "y"}});
//! assert_eq!(data.to_string(), "{'name': 'Alice', 'scores': (90, 85), 'tags': {'x', 'y'}}");
//! ```
//!
//! ## Formatting vs. Serde
//!
//! [`format`] goes through [`Adapt`] and keeps every container kind exactly:
//! a `HashSet` is a set, a tuple is a tuple. [`to_string`] goes through
//! Serde, which has no notion of sets, so sets come out as sequences.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Formatting is infallible apart from the sink's own errors
//! - No panics in the public API
//!
//! ## Text format
//!
//! See the [`syntax`] module for the full description of the layout.
//!
//! ## Demos
//!
//! The `demos/` directory holds runnable programs:
//!
//! - **`simple.rs`** - formatting standard containers
//! - **`custom_adapter.rs`** - implementing [`Adapt`] for your own type
//! - **`custom_delimiters.rs`** - changing brackets, separators and quotes
//! - **`round_trip.rs`** - Serde types to text and back
//! - **`timing.rs`** - timing blocks and closures with [`timed`]
//!
//! Run any demo with: `cargo run --example <name>`

pub mod adapt;
pub mod de;
pub mod error;
pub mod escape;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod syntax;
pub mod timed;
pub mod value;

pub use adapt::Adapt;
pub use de::{Deserializer, Parser};
pub use error::{Error, Result};
pub use format::{Formatter, Repr};
pub use map::Map;
pub use options::{Brackets, ContainerKind, DelimiterConfig};
pub use ser::ValueSerializer;
pub use value::{Scalar, Value};

use serde::{Deserialize, Serialize};
use std::io;

/// Formats any [`Adapt`] value with the default layout.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::format;
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<_> = [3, 1, 2].into_iter().collect();
/// assert_eq!(format(&set), "{1, 2, 3}");
/// assert_eq!(format(&Vec::<i32>::new()), "[]");
/// ```
#[must_use]
pub fn format<T>(value: &T) -> String
where
    T: ?Sized + Adapt,
{
    format_value(&value.adapt(), &DelimiterConfig::DEFAULT)
}

/// Formats any [`Adapt`] value with a custom layout.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::{format_with_config, DelimiterConfig};
///
/// let config = DelimiterConfig::new().with_value_separator(";");
/// assert_eq!(format_with_config(&[1, 2, 3], &config), "[1;2;3]");
/// ```
#[must_use]
pub fn format_with_config<T>(value: &T, config: &DelimiterConfig) -> String
where
    T: ?Sized + Adapt,
{
    format_value(&value.adapt(), config)
}

/// Formats an already built [`Value`].
#[must_use]
pub fn format_value(value: &Value, config: &DelimiterConfig) -> String {
    Formatter::new(config).format(value)
}

/// Serialize any `T: Serialize` to a string.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// enum Shape { Dot, Circle { r: u32 } }
///
/// assert_eq!(to_string(&Shape::Dot).unwrap(), "'Dot'");
/// assert_eq!(to_string(&Shape::Circle { r: 2 }).unwrap(), "{'Circle': {'r': 2}}");
/// ```
///
/// # Errors
///
/// Returns an error if the value's `Serialize` impl reports one.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_config(value, &DelimiterConfig::DEFAULT)
}

/// Serialize any `T: Serialize` to a string with a custom layout.
///
/// # Errors
///
/// Returns an error if the value's `Serialize` impl reports one.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_config<T>(value: &T, config: &DelimiterConfig) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(format_value(&to_value(value)?, config))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_mapping());
/// ```
///
/// # Errors
///
/// Returns an error if the value's `Serialize` impl reports one.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Serialize any `T: Serialize` to a writer.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2]).unwrap();
/// assert_eq!(buffer, b"[1, 2]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_config(writer, value, &DelimiterConfig::DEFAULT)
}

/// Serialize any `T: Serialize` to a writer with a custom layout.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_config<W, T>(mut writer: W, value: &T, config: &DelimiterConfig) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_config(value, config)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parses text written with the default layout into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::{parse, Value};
///
/// let value = parse("[1, 'two', (3)]").unwrap();
/// assert_eq!(value.elements().map(<[Value]>::len), Some(3));
/// ```
///
/// # Errors
///
/// Returns a positioned syntax error if the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Value> {
    Parser::new(text).parse()
}

/// Parses text written with a custom layout into a [`Value`].
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] for a configuration that cannot be read
/// back unambiguously, or a positioned syntax error if the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_config(text: &str, config: &DelimiterConfig) -> Result<Value> {
    Parser::with_config(text, config).parse()
}

/// Deserialize an instance of type `T` from a string.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{'x': 1, 'y': 2}").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a positioned syntax error for malformed text and
/// [`Error::TypeMismatch`] when the text has the wrong shape for `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str(s);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from a string with a custom layout.
///
/// # Errors
///
/// As [`from_str`], plus [`Error::InvalidConfig`] for an ambiguous configuration.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_config<'a, T>(s: &'a str, config: &'a DelimiterConfig) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str_with_config(s, config);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::from_reader;
/// use std::io::Cursor;
///
/// let numbers: Vec<u8> = from_reader(Cursor::new(b"[1, 2, 3]")).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the text is malformed,
/// or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, the text is malformed,
/// or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
