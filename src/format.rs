//! Rendering of [`Value`] trees into text.
//!
//! The [`Formatter`] walks a value depth-first and writes into any
//! [`fmt::Write`] sink. Every container is written as
//! `open element sep element ... close`, mapping entries as
//! `key kv-sep value`, string scalars escaped between two string delimiters
//! and raw scalars verbatim. The same [`DelimiterConfig`] applies at every depth.
//!
//! ```rust
//! use serde_pyrepr::{DelimiterConfig, Formatter, Value};
//!
//! let value = Value::Sequence(vec![Value::from(1), Value::from("it's")]);
//! let config = DelimiterConfig::new();
//!
//! let mut out = String::new();
//! Formatter::new(&config).write(&mut out, &value).unwrap();
//! assert_eq!(out, r"[1, 'it\'s']");
//! ```

use crate::escape::escape;
use crate::{DelimiterConfig, Value};
use log::trace;
use std::fmt;

/// Renders values with a fixed configuration.
#[derive(Clone, Copy, Debug)]
pub struct Formatter<'c> {
    config: &'c DelimiterConfig,
}

impl<'c> Formatter<'c> {
    pub fn new(config: &'c DelimiterConfig) -> Self {
        Formatter { config }
    }

    /// Writes `value` into `out`.
    ///
    /// # Errors
    ///
    /// Only the sink's own errors are propagated; rendering itself cannot fail.
    pub fn write<W: fmt::Write + ?Sized>(&self, out: &mut W, value: &Value) -> fmt::Result {
        self.write_value(out, value, 0)
    }

    /// Renders `value` into a new `String`.
    #[must_use]
    pub fn format(&self, value: &Value) -> String {
        let mut out = String::with_capacity(64);
        // Writing into a String cannot fail.
        let _ = self.write_value(&mut out, value, 0);
        out
    }

    fn write_value<W: fmt::Write + ?Sized>(
        &self,
        out: &mut W,
        value: &Value,
        depth: usize,
    ) -> fmt::Result {
        match value {
            Value::Scalar(scalar) if scalar.is_string() => {
                let delimiter = self.config.string_delimiter();
                out.write_char(delimiter)?;
                out.write_str(&escape(scalar.text(), delimiter))?;
                out.write_char(delimiter)
            }
            Value::Scalar(scalar) => out.write_str(scalar.text()),
            Value::Sequence(elements) | Value::Set(elements) | Value::Tuple(elements) => {
                let brackets = self.brackets_of(value);
                trace!(
                    "Formatting {} of {} elements at depth {}",
                    value.kind_name(),
                    elements.len(),
                    depth
                );

                out.write_str(brackets.open())?;
                let mut first = true;
                for element in elements {
                    if !first {
                        out.write_str(self.config.value_separator())?;
                    }
                    first = false;
                    self.write_value(out, element, depth + 1)?;
                }
                out.write_str(brackets.close())
            }
            Value::Mapping(map) => {
                let brackets = self.brackets_of(value);
                trace!(
                    "Formatting mapping of {} entries at depth {}",
                    map.len(),
                    depth
                );

                out.write_str(brackets.open())?;
                let mut first = true;
                for (key, entry) in map.iter() {
                    if !first {
                        out.write_str(self.config.value_separator())?;
                    }
                    first = false;
                    self.write_value(out, key, depth + 1)?;
                    out.write_str(self.config.key_value_separator())?;
                    self.write_value(out, entry, depth + 1)?;
                }
                out.write_str(brackets.close())
            }
        }
    }

    fn brackets_of(&self, value: &Value) -> &'c crate::Brackets {
        let kind = value
            .container_kind()
            .unwrap_or(crate::ContainerKind::Tuple);
        self.config.brackets(kind)
    }
}

/// A [`fmt::Display`] adapter rendering a value with a specific configuration.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::{DelimiterConfig, Value};
///
/// let config = DelimiterConfig::new().with_string_delimiter('"');
/// let value = Value::Sequence(vec![Value::from("a")]);
/// assert_eq!(format!("{}", value.display_with(&config)), "[\"a\"]");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Repr<'a> {
    value: &'a Value,
    config: &'a DelimiterConfig,
}

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Formatter::new(self.config).write(f, self.value)
    }
}

impl Value {
    /// Returns a [`Repr`] that displays this value using `config`.
    #[must_use]
    pub fn display_with<'a>(&'a self, config: &'a DelimiterConfig) -> Repr<'a> {
        Repr {
            value: self,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContainerKind, Map};

    fn render(value: &Value) -> String {
        Formatter::new(&DelimiterConfig::DEFAULT).format(value)
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(render(&Value::Sequence(vec![])), "[]");
        assert_eq!(render(&Value::Mapping(Map::new())), "{}");
        assert_eq!(render(&Value::Set(vec![])), "{}");
        assert_eq!(render(&Value::unit()), "()");
    }

    #[test]
    fn test_mapping_entries() {
        let mut map = Map::new();
        map.insert(Value::from("a"), Value::from(1));
        map.insert(Value::from("b"), Value::from(2));
        assert_eq!(render(&Value::Mapping(map)), "{'a': 1, 'b': 2}");
    }

    #[test]
    fn test_nested_uses_same_config() {
        let config = DelimiterConfig::new()
            .with_value_separator(";")
            .with_brackets(ContainerKind::Tuple, "<", ">");
        let value = Value::Sequence(vec![
            Value::Tuple(vec![Value::from(1), Value::from(2)]),
            Value::Sequence(vec![Value::from("x")]),
        ]);
        assert_eq!(
            Formatter::new(&config).format(&value),
            "[<1;2>;['x']]"
        );
    }

    #[test]
    fn test_raw_scalars_are_verbatim() {
        let value = Value::Sequence(vec![Value::raw("a'b\\c"), Value::string("a'b\\c")]);
        assert_eq!(render(&value), r"[a'b\c, 'a\'b\\c']");
    }

    #[test]
    fn test_write_into_display() {
        let value = Value::Tuple(vec![Value::from(1), Value::from("foo"), Value::from(true)]);
        assert_eq!(format!("{}", value), "(1, 'foo', true)");
        assert_eq!(value.to_string(), render(&value));
    }
}
