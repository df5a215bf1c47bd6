//! Parsing and Serde deserialization.
//!
//! This module provides the [`Parser`], which reads formatted text back into
//! a [`Value`], and the [`Deserializer`], which drives Serde visitors from
//! the parsed value.
//!
//! ## Overview
//!
//! - **Configuration-aware**: brackets, separators and the string delimiter
//!   all come from the [`DelimiterConfig`] the text was written with
//! - **Whitespace-tolerant**: whitespace between tokens is skipped and
//!   separators are matched by their trimmed text, so `[1,2]` and
//!   `[1 , 2]` both parse
//! - **Error reporting**: every syntax error carries a line and column
//!
//! Sets and mappings share `{` `}` in the default layout. The first element
//! decides: if a key-value separator follows it, the container is a mapping,
//! otherwise a set. `{}` is an empty mapping.
//!
//! Raw scalars run up to the next value separator or close bracket (and, in
//! key position, the key-value separator), so raw text containing those
//! characters does not read back as a single scalar.
//!
//! ## Usage
//!
//! ```rust
//! use serde_pyrepr::{from_str, parse, Value};
//! use serde::Deserialize;
//!
//! let value = parse("{'a': [1, 2], 'b': (true, 'x')}").unwrap();
//! assert!(value.is_mapping());
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Data { x: i32, y: i32 }
//!
//! let data: Data = from_str("{'x': 1, 'y': 2}").unwrap();
//! assert_eq!(data, Data { x: 1, y: 2 });
//! ```

use crate::escape::unescape_at;
use crate::options::ContainerKind;
use crate::{DelimiterConfig, Error, Map, Result, Value};
use log::trace;
use serde::de;

/// Deepest container nesting the parser accepts.
pub const MAX_DEPTH: usize = 128;

static DEFAULT_CONFIG: DelimiterConfig = DelimiterConfig::DEFAULT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Opener {
    Kind(ContainerKind),
    // Set and mapping share this bracket; the first element decides
    Braced,
}

/// Reads formatted text into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::{DelimiterConfig, Parser, Value};
///
/// let config = DelimiterConfig::new().with_string_delimiter('"');
/// let value = Parser::with_config("[\"a\", 1]", &config).parse().unwrap();
/// assert_eq!(value, Value::Sequence(vec![Value::from("a"), Value::from(1)]));
/// ```
pub struct Parser<'a> {
    input: &'a str,
    config: &'a DelimiterConfig,
    position: usize,
    line: usize,
    column: usize,
    depth: usize,
    value_separator: &'a str,
    key_value_separator: &'a str,
    openers: Vec<(&'a str, Opener)>,
}

impl<'a> Parser<'a> {
    /// Creates a parser for text written with [`DelimiterConfig::DEFAULT`].
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, &DEFAULT_CONFIG)
    }

    #[must_use]
    pub fn with_config(input: &'a str, config: &'a DelimiterConfig) -> Self {
        let mut openers: Vec<(&'a str, Opener)> = Vec::with_capacity(4);
        for kind in ContainerKind::ALL {
            let open = config.brackets(kind).open();
            let opener = match kind {
                ContainerKind::Set | ContainerKind::Mapping if config.braces_shared() => {
                    Opener::Braced
                }
                _ => Opener::Kind(kind),
            };
            if !openers.iter().any(|(o, _)| *o == open) {
                openers.push((open, opener));
            }
        }
        // Longest first, so "set(" wins over "("
        openers.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Parser {
            input,
            config,
            position: 0,
            line: 1,
            column: 1,
            depth: 0,
            value_separator: config.value_separator().trim(),
            key_value_separator: config.key_value_separator().trim(),
            openers,
        }
    }

    /// Parses the whole input as exactly one value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration cannot be parsed
    /// unambiguously, a positioned syntax error if the text is malformed, and
    /// [`Error::UnexpectedToken`] if anything but whitespace follows the value.
    pub fn parse(mut self) -> Result<Value> {
        self.config.validate()?;

        self.skip_whitespace();
        let value = self.parse_value(false)?;
        self.skip_whitespace();
        if !self.at_end() {
            return Err(self.unexpected("end of input"));
        }
        Ok(value)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn starts_with(&self, token: &str) -> bool {
        !token.is_empty() && self.rest().starts_with(token)
    }

    /// Consumes `token` if the input continues with it.
    fn eat(&mut self, token: &str) -> bool {
        if !self.starts_with(token) {
            return false;
        }
        for _ in token.chars() {
            self.next_char();
        }
        true
    }

    fn starts_with_close(&self) -> bool {
        ContainerKind::ALL
            .iter()
            .any(|kind| self.starts_with(self.config.brackets(*kind).close()))
    }

    fn found(&self) -> String {
        match self.peek_char() {
            Some(ch) => ch.to_string(),
            None => "end of input".to_string(),
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        Error::unexpected_token(self.line, self.column, expected, &self.found())
    }

    fn parse_value(&mut self, key_position: bool) -> Result<Value> {
        if self.at_end() {
            return Err(Error::unexpected_eof(self.line, self.column, "a value"));
        }

        if self.peek_char() == Some(self.config.string_delimiter()) {
            return self.parse_string();
        }

        let opener = self
            .openers
            .iter()
            .find(|(open, _)| self.starts_with(open))
            .copied();
        if let Some((open, opener)) = opener {
            return self.parse_container(open, opener);
        }

        if self.starts_with_close()
            || self.starts_with(self.value_separator)
            || self.starts_with(self.key_value_separator)
        {
            return Err(self.unexpected("a value"));
        }

        Ok(self.parse_raw(key_position))
    }

    fn parse_string(&mut self) -> Result<Value> {
        let delimiter = self.config.string_delimiter();
        let (line, col) = (self.line, self.column);
        self.next_char();

        let start = self.position;
        let (content_line, content_col) = (self.line, self.column);
        loop {
            match self.next_char() {
                None => return Err(Error::unterminated_string(line, col)),
                Some('\\') => {
                    if self.next_char().is_none() {
                        return Err(Error::unterminated_string(line, col));
                    }
                }
                Some(ch) if ch == delimiter => break,
                Some(_) => {}
            }
        }

        let end = self.position - delimiter.len_utf8();
        let text = unescape_at(&self.input[start..end], delimiter, content_line, content_col)?;
        Ok(Value::string(text.into_owned()))
    }

    fn parse_raw(&mut self, key_position: bool) -> Value {
        let start = self.position;
        while !self.at_end()
            && !self.starts_with(self.value_separator)
            && !self.starts_with_close()
            && !(key_position && self.starts_with(self.key_value_separator))
        {
            self.next_char();
        }
        Value::raw(self.input[start..self.position].trim_end())
    }

    fn parse_container(&mut self, open: &'a str, opener: Opener) -> Result<Value> {
        let opened_at = (self.line, self.column);
        if self.depth >= MAX_DEPTH {
            return Err(Error::depth_limit_exceeded(opened_at.0, opened_at.1, MAX_DEPTH));
        }
        trace!(
            "Parsing {:?} at line {}, column {}, depth {}",
            opener,
            opened_at.0,
            opened_at.1,
            self.depth
        );

        self.eat(open);
        self.depth += 1;
        let config = self.config;
        let result = match opener {
            Opener::Kind(ContainerKind::Mapping) => self
                .parse_entries(None, config.brackets(ContainerKind::Mapping).close(), opened_at)
                .map(Value::Mapping),
            Opener::Kind(kind) => {
                let elements =
                    self.parse_elements(None, config.brackets(kind).close(), opened_at)?;
                Ok(match kind {
                    ContainerKind::Set => Value::Set(elements),
                    ContainerKind::Tuple => Value::Tuple(elements),
                    _ => Value::Sequence(elements),
                })
            }
            Opener::Braced => self.parse_braced(opened_at),
        };
        self.depth -= 1;
        result
    }

    fn parse_braced(&mut self, opened_at: (usize, usize)) -> Result<Value> {
        let config = self.config;
        let mapping_close = config.brackets(ContainerKind::Mapping).close();
        let set_close = config.brackets(ContainerKind::Set).close();

        self.skip_whitespace();
        self.expect_more(mapping_close, opened_at)?;
        if self.eat(mapping_close) {
            return Ok(Value::Mapping(Map::new()));
        }
        if self.eat(set_close) {
            return Ok(Value::Set(Vec::new()));
        }
        self.reject_other_close(mapping_close, opened_at)?;

        let first = self.parse_value(true)?;
        self.skip_whitespace();
        self.expect_more(mapping_close, opened_at)?;
        if self.starts_with(self.key_value_separator) {
            self.parse_entries(Some(first), mapping_close, opened_at)
                .map(Value::Mapping)
        } else {
            self.parse_elements(Some(first), set_close, opened_at)
                .map(Value::Set)
        }
    }

    fn expect_more(&self, close: &str, opened_at: (usize, usize)) -> Result<()> {
        if self.at_end() {
            Err(Error::unterminated_container(opened_at.0, opened_at.1, close))
        } else {
            Ok(())
        }
    }

    /// Fails if the input continues with the close bracket of another kind.
    /// Call after trying to eat `close` itself.
    fn reject_other_close(&self, close: &str, opened_at: (usize, usize)) -> Result<()> {
        if self.starts_with_close() {
            Err(Error::unterminated_container(opened_at.0, opened_at.1, close))
        } else {
            Ok(())
        }
    }

    /// Handles what follows an element: `Ok(true)` once the container closed,
    /// `Ok(false)` after a value separator with another element to come.
    fn end_of_element(&mut self, close: &str, opened_at: (usize, usize)) -> Result<bool> {
        self.skip_whitespace();
        self.expect_more(close, opened_at)?;
        if self.eat(close) {
            return Ok(true);
        }
        self.reject_other_close(close, opened_at)?;
        if !self.eat(self.value_separator) {
            return Err(self.unexpected(&format!(
                "{:?} or {:?}",
                self.value_separator, close
            )));
        }

        self.skip_whitespace();
        self.expect_more(close, opened_at)?;
        if self.starts_with(close) {
            return Err(Error::trailing_separator(self.line, self.column));
        }
        self.reject_other_close(close, opened_at)?;
        Ok(false)
    }

    fn parse_elements(
        &mut self,
        first: Option<Value>,
        close: &str,
        opened_at: (usize, usize),
    ) -> Result<Vec<Value>> {
        let mut elements = Vec::new();
        match first {
            Some(value) => elements.push(value),
            None => {
                self.skip_whitespace();
                self.expect_more(close, opened_at)?;
                if self.eat(close) {
                    return Ok(elements);
                }
                self.reject_other_close(close, opened_at)?;
                elements.push(self.parse_value(false)?);
            }
        }

        while !self.end_of_element(close, opened_at)? {
            elements.push(self.parse_value(false)?);
        }
        Ok(elements)
    }

    fn parse_entries(
        &mut self,
        first_key: Option<Value>,
        close: &str,
        opened_at: (usize, usize),
    ) -> Result<Map> {
        let mut map = Map::new();
        let mut pending = first_key;
        if pending.is_none() {
            self.skip_whitespace();
            self.expect_more(close, opened_at)?;
            if self.eat(close) {
                return Ok(map);
            }
            self.reject_other_close(close, opened_at)?;
        }

        loop {
            let key = match pending.take() {
                Some(key) => key,
                None => self.parse_value(true)?,
            };

            self.skip_whitespace();
            self.expect_more(close, opened_at)?;
            if !self.eat(self.key_value_separator) {
                return Err(self.unexpected(&format!("{:?}", self.key_value_separator)));
            }
            self.skip_whitespace();
            self.expect_more(close, opened_at)?;
            let value = self.parse_value(false)?;
            map.insert(key, value);

            if self.end_of_element(close, opened_at)? {
                return Ok(map);
            }
        }
    }
}

/// Serde deserializer over formatted text.
///
/// The whole input is parsed into a [`Value`] first; the requested Rust type
/// then decides how that value is read. Shape mismatches are reported as
/// [`Error::TypeMismatch`].
pub struct Deserializer<'de> {
    parser: Option<Parser<'de>>,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Deserializer {
            parser: Some(Parser::new(input)),
        }
    }

    pub fn from_str_with_config(input: &'de str, config: &'de DelimiterConfig) -> Self {
        Deserializer {
            parser: Some(Parser::with_config(input, config)),
        }
    }

    fn take_value(&mut self) -> Result<ValueDeserializer> {
        let parser = self
            .parser
            .take()
            .ok_or_else(|| Error::custom("input already consumed"))?;
        Ok(ValueDeserializer::new(parser.parse()?))
    }
}

macro_rules! forward_to_value {
    ($($method:ident)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                de::Deserializer::$method(self.take_value()?, visitor)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    forward_to_value! {
        deserialize_any deserialize_bool
        deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64 deserialize_i128
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64 deserialize_u128
        deserialize_f32 deserialize_f64 deserialize_char deserialize_str deserialize_string
        deserialize_bytes deserialize_byte_buf deserialize_option deserialize_unit
        deserialize_seq deserialize_map deserialize_identifier deserialize_ignored_any
    }

    fn deserialize_unit_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_unit_struct(self.take_value()?, name, visitor)
    }

    fn deserialize_newtype_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_newtype_struct(self.take_value()?, name, visitor)
    }

    fn deserialize_tuple<V>(self, len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_tuple(self.take_value()?, len, visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_tuple_struct(self.take_value()?, name, len, visitor)
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_struct(self.take_value()?, name, fields, visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_enum(self.take_value()?, name, variants, visitor)
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: std::vec::IntoIter<(Value, Value)>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: Map) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: Value,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(self.variant))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            None => Ok(()),
            Some(value) if value.is_unit() => Ok(()),
            Some(other) => Err(Error::type_mismatch("unit variant", other.kind_name())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::type_mismatch("newtype variant", "unit variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Tuple(elements)) | Some(Value::Sequence(elements)) => {
                visitor.visit_seq(SeqDeserializer::new(elements))
            }
            Some(other) => Err(Error::type_mismatch("tuple variant", other.kind_name())),
            None => Err(Error::type_mismatch("tuple variant", "unit variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Mapping(map)) => visitor.visit_map(MapDeserializer::new(map)),
            Some(other) => Err(Error::type_mismatch("struct variant", other.kind_name())),
            None => Err(Error::type_mismatch("struct variant", "unit variant")),
        }
    }
}

/// Drives a visitor from an already parsed [`Value`].
pub(crate) struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub(crate) fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }

    fn mismatch(&self, expected: &str) -> Error {
        match &self.value {
            Value::Scalar(s) if !s.is_string() => {
                Error::type_mismatch(expected, &format!("scalar `{}`", s.text()))
            }
            other => Error::type_mismatch(expected, other.kind_name()),
        }
    }

    /// Parses a raw scalar with `FromStr`.
    fn parse_raw<T: std::str::FromStr>(&self, expected: &str) -> Result<T> {
        match &self.value {
            Value::Scalar(s) if !s.is_string() => {
                s.text().parse().map_err(|_| self.mismatch(expected))
            }
            _ => Err(self.mismatch(expected)),
        }
    }
}

macro_rules! deserialize_from_str {
    ($($method:ident => $visit:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                let parsed = self.parse_raw::<$ty>(stringify!($ty))?;
                visitor.$visit(parsed)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Scalar(s) if s.is_string() => visitor.visit_string(s.into_text()),
            Value::Scalar(s) => {
                let text = s.into_text();
                if let Ok(b) = text.parse::<bool>() {
                    visitor.visit_bool(b)
                } else if let Ok(i) = text.parse::<i64>() {
                    visitor.visit_i64(i)
                } else if let Ok(u) = text.parse::<u64>() {
                    visitor.visit_u64(u)
                } else if let Ok(f) = text.parse::<f64>() {
                    visitor.visit_f64(f)
                } else {
                    visitor.visit_string(text)
                }
            }
            Value::Tuple(elements) if elements.is_empty() => visitor.visit_unit(),
            Value::Sequence(elements) | Value::Set(elements) | Value::Tuple(elements) => {
                visitor.visit_seq(SeqDeserializer::new(elements))
            }
            Value::Mapping(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value.as_bool() {
            Some(b) => visitor.visit_bool(b),
            None => Err(self.mismatch("bool")),
        }
    }

    deserialize_from_str! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
        deserialize_f32 => visit_f32: f32,
        deserialize_f64 => visit_f64: f64,
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let single = self.value.as_text().and_then(|text| {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(ch),
                _ => None,
            }
        });
        match single {
            Some(ch) => visitor.visit_char(ch),
            None => Err(self.mismatch("char")),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Scalar(s) => visitor.visit_string(s.into_text()),
            other => Err(Error::type_mismatch("string", other.kind_name())),
        }
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.value.is_unit() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.value.is_unit() {
            visitor.visit_unit()
        } else {
            Err(self.mismatch("unit"))
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Sequence(elements) | Value::Set(elements) => {
                visitor.visit_seq(SeqDeserializer::new(elements))
            }
            other => Err(Error::type_mismatch("sequence", other.kind_name())),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Tuple(elements) | Value::Sequence(elements) => {
                visitor.visit_seq(SeqDeserializer::new(elements))
            }
            other => Err(Error::type_mismatch("tuple", other.kind_name())),
        }
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_tuple(len, visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Mapping(map) => visitor.visit_map(MapDeserializer::new(map)),
            other => Err(Error::type_mismatch("mapping", other.kind_name())),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            variant @ Value::Scalar(_) => visitor.visit_enum(EnumDeserializer {
                variant,
                value: None,
            }),
            Value::Mapping(map) if map.len() == 1 => {
                let mut entries = map.into_iter();
                match entries.next() {
                    Some((variant, value)) => visitor.visit_enum(EnumDeserializer {
                        variant,
                        value: Some(value),
                    }),
                    None => Err(Error::type_mismatch("enum", "mapping")),
                }
            }
            other => Err(Error::type_mismatch("enum", other.kind_name())),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(elements: Vec<Value>) -> Value {
        Value::Sequence(elements)
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(Parser::new("42").parse().unwrap(), Value::raw("42"));
        assert_eq!(Parser::new("  'hi'  ").parse().unwrap(), Value::string("hi"));
        assert_eq!(Parser::new(r"'it\'s'").parse().unwrap(), Value::string("it's"));
        assert_eq!(Parser::new("()").parse().unwrap(), Value::unit());
    }

    #[test]
    fn test_parse_nested() {
        let value = Parser::new("[1, (2, 'x'), [], {}]").parse().unwrap();
        assert_eq!(
            value,
            seq(vec![
                Value::from(1),
                Value::Tuple(vec![Value::from(2), Value::from("x")]),
                seq(vec![]),
                Value::Mapping(Map::new()),
            ])
        );
    }

    #[test]
    fn test_braces_decided_by_first_element() {
        assert!(Parser::new("{1, 2}").parse().unwrap().is_set());
        assert!(Parser::new("{1: 2}").parse().unwrap().is_mapping());
        assert!(Parser::new("{}").parse().unwrap().is_mapping());
    }

    #[test]
    fn test_separators_matched_trimmed() {
        let expected = seq(vec![Value::from(1), Value::from(2)]);
        assert_eq!(Parser::new("[1,2]").parse().unwrap(), expected);
        assert_eq!(Parser::new("[ 1 ,\n 2 ]").parse().unwrap(), expected);
    }

    #[test]
    fn test_raw_value_may_contain_key_separator() {
        let value = Parser::new("{'at': 10:30:00}").parse().unwrap();
        let map = value.as_mapping().unwrap();
        assert_eq!(map.get(&Value::from("at")), Some(&Value::raw("10:30:00")));
    }

    #[test]
    fn test_longest_open_bracket_wins() {
        let config = DelimiterConfig::new().with_brackets(ContainerKind::Set, "set(", ")");
        let value = Parser::with_config("set(1, 2)", &config).parse().unwrap();
        assert_eq!(value, Value::Set(vec![Value::from(1), Value::from(2)]));
        let tuple = Parser::with_config("(1, 2)", &config).parse().unwrap();
        assert!(tuple.is_tuple());
    }

    #[test]
    fn test_errors_are_positioned() {
        assert!(matches!(
            Parser::new("[1, 2").parse(),
            Err(Error::UnterminatedContainer { line: 1, col: 1, .. })
        ));
        assert!(matches!(
            Parser::new("[1, 2, ]").parse(),
            Err(Error::TrailingSeparator { line: 1, col: 8 })
        ));
        assert!(matches!(
            Parser::new("['a\\n']").parse(),
            Err(Error::MalformedEscape { line: 1, col: 4, .. })
        ));
        assert!(matches!(
            Parser::new("'abc").parse(),
            Err(Error::UnterminatedString { line: 1, col: 1 })
        ));
        assert!(matches!(
            Parser::new("[(1) 2]").parse(),
            Err(Error::UnexpectedToken { line: 1, col: 6, .. })
        ));
        assert!(matches!(
            Parser::new("{'a' 1}").parse(),
            Err(Error::UnexpectedToken { .. })
        ));
        assert!(matches!(
            Parser::new("[1] x").parse(),
            Err(Error::UnexpectedToken { line: 1, col: 5, .. })
        ));
        assert!(matches!(Parser::new("").parse(), Err(Error::UnexpectedEof { .. })));
    }

    #[test]
    fn test_mismatched_close_reports_opener() {
        match Parser::new("[1, 2)").parse() {
            Err(Error::UnterminatedContainer { line, col, expected }) => {
                assert_eq!((line, col), (1, 1));
                assert_eq!(expected, "]");
            }
            other => panic!("expected unterminated container, got {:?}", other),
        }
        assert!(matches!(
            Parser::new("(1, ]").parse(),
            Err(Error::UnterminatedContainer { line: 1, col: 1, .. })
        ));
        assert!(matches!(
            Parser::new("[)").parse(),
            Err(Error::UnterminatedContainer { line: 1, col: 1, .. })
        ));
        assert!(matches!(
            Parser::new("{]").parse(),
            Err(Error::UnterminatedContainer { line: 1, col: 1, .. })
        ));
        assert!(matches!(
            Parser::new("{'a': 1)").parse(),
            Err(Error::UnterminatedContainer { line: 1, col: 1, .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let deep = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        assert!(Parser::new(&deep).parse().is_ok());

        let deeper = format!("{}{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
        assert!(matches!(
            Parser::new(&deeper).parse(),
            Err(Error::DepthLimitExceeded { limit: MAX_DEPTH, .. })
        ));
    }

    #[test]
    fn test_invalid_config_refused() {
        let config = DelimiterConfig::new().with_string_delimiter('\\');
        assert!(matches!(
            Parser::with_config("[]", &config).parse(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_deserializer_type_mismatch() {
        let mut de = Deserializer::from_str("{'a': 1}");
        let result: Result<Vec<i32>> = serde::Deserialize::deserialize(&mut de);
        match result {
            Err(Error::TypeMismatch { expected, found }) => {
                assert_eq!(expected, "sequence");
                assert_eq!(found, "mapping");
            }
            other => panic!("expected type mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_deserializer_numbers_from_raw() {
        let mut de = Deserializer::from_str("(1, -2, 2.5, true)");
        let tuple: (u8, i64, f64, bool) = serde::Deserialize::deserialize(&mut de).unwrap();
        assert_eq!(tuple, (1, -2, 2.5, true));

        let mut overflow = Deserializer::from_str("300");
        let result: Result<u8> = serde::Deserialize::deserialize(&mut overflow);
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    }
}
