//! Dynamic value representation.
//!
//! This module provides the [`Value`] enum, the tagged union of everything the
//! formatter can render, and [`Scalar`], its leaf.
//!
//! ## Core Types
//!
//! - [`Value`]: a scalar, sequence, set, mapping or tuple
//! - [`Scalar`]: leaf text plus an explicit flag saying whether it is a string
//!
//! The string flag is decided when the value is built, not when it is
//! rendered: string scalars are escaped and delimited, every other scalar
//! ("raw") is written verbatim.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_pyrepr::{value, Value};
//!
//! let text = Value::from("hello");
//! let number = Value::from(42);
//! let list = Value::Sequence(vec![Value::from(1), Value::from(2)]);
//!
//! let nested = value!({"name": "Alice", "tags": ["a", "b"]});
//! assert!(nested.is_mapping());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use serde_pyrepr::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from(42);
//! assert_eq!(value.as_i64(), Some(42));
//!
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::options::ContainerKind;
use crate::Map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of anything that can be rendered.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::Value;
///
/// let tuple = Value::Tuple(vec![Value::from(1), Value::from("foo"), Value::from(true)]);
/// assert_eq!(tuple.to_string(), "(1, 'foo', true)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Vec<Value>),
    Set(Vec<Value>),
    Mapping(Map),
    Tuple(Vec<Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::unit()
    }
}

/// A leaf value with a direct text representation.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::Scalar;
///
/// let name = Scalar::string("Alice");
/// let count = Scalar::raw("3");
///
/// assert!(name.is_string());
/// assert!(!count.is_string());
/// assert_eq!(count.text(), "3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scalar {
    text: String,
    is_string: bool,
}

impl Scalar {
    /// A string scalar: escaped and wrapped in the string delimiter when rendered.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Scalar {
            text: text.into(),
            is_string: true,
        }
    }

    /// A raw scalar: rendered verbatim.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Scalar {
            text: text.into(),
            is_string: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        self.is_string
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Value {
    /// A string scalar value.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Value::Scalar(Scalar::string(text))
    }

    /// A raw scalar value.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Value::Scalar(Scalar::raw(text))
    }

    /// The empty tuple, which stands in for `()` and `None`.
    #[must_use]
    pub const fn unit() -> Self {
        Value::Tuple(Vec::new())
    }

    /// Returns `true` if the value is a scalar of either flavour.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns `true` if the value is a string scalar.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::Scalar(s) if s.is_string)
    }

    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }

    /// Returns `true` for the empty tuple.
    #[inline]
    #[must_use]
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Tuple(elements) if elements.is_empty())
    }

    /// The container kind, or `None` for scalars.
    #[must_use]
    pub const fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            Value::Scalar(_) => None,
            Value::Sequence(_) => Some(ContainerKind::Sequence),
            Value::Set(_) => Some(ContainerKind::Set),
            Value::Mapping(_) => Some(ContainerKind::Mapping),
            Value::Tuple(_) => Some(ContainerKind::Tuple),
        }
    }

    /// Short description of the value's shape, used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pyrepr::Value;
    ///
    /// assert_eq!(Value::from("x").kind_name(), "string");
    /// assert_eq!(Value::from(1).kind_name(), "scalar");
    /// assert_eq!(Value::unit().kind_name(), "unit");
    /// ```
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Scalar(s) if s.is_string => "string",
            Value::Scalar(_) => "scalar",
            Value::Tuple(elements) if elements.is_empty() => "unit",
            other => other.container_kind().map_or("scalar", ContainerKind::name),
        }
    }

    /// If the value is a string scalar, returns its text. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pyrepr::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) if s.is_string => Some(&s.text),
            _ => None,
        }
    }

    /// If the value is any scalar, returns its text. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(&s.text),
            _ => None,
        }
    }

    /// Parses a raw scalar as `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pyrepr::Value;
    ///
    /// assert_eq!(Value::from(-7).as_i64(), Some(-7));
    /// assert_eq!(Value::from("7").as_i64(), None); // strings are not numbers
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.raw_text().and_then(|t| t.parse().ok())
    }

    /// Parses a raw scalar as `u64`.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.raw_text().and_then(|t| t.parse().ok())
    }

    /// Parses a raw scalar as `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.raw_text().and_then(|t| t.parse().ok())
    }

    /// Reads a raw `true`/`false` scalar.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.raw_text() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_set(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Set(elements) => Some(elements),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_tuple(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Map> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// The elements of a sequence, set or tuple.
    #[must_use]
    pub fn elements(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(elements) | Value::Set(elements) | Value::Tuple(elements) => {
                Some(elements)
            }
            _ => None,
        }
    }

    fn raw_text(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) if !s.is_string => Some(&s.text),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Formatter::new(&crate::DelimiterConfig::DEFAULT).write(f, self)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Scalar(s) if s.is_string => serializer.serialize_str(&s.text),
            Value::Scalar(s) => {
                if let Some(b) = self.as_bool() {
                    serializer.serialize_bool(b)
                } else if let Ok(i) = s.text.parse::<i64>() {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = s.text.parse::<u64>() {
                    serializer.serialize_u64(u)
                } else if let Ok(f) = s.text.parse::<f64>() {
                    serializer.serialize_f64(f)
                } else {
                    serializer.serialize_str(&s.text)
                }
            }
            Value::Sequence(elements) | Value::Set(elements) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Tuple(elements) if elements.is_empty() => serializer.serialize_unit(),
            Value::Tuple(elements) => {
                use serde::ser::SerializeTuple;
                let mut tuple = serializer.serialize_tuple(elements.len())?;
                for element in elements {
                    tuple.serialize_element(element)?;
                }
                tuple.end()
            }
            Value::Mapping(map) => {
                use serde::ser::SerializeMap;
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    entries.serialize_entry(k, v)?;
                }
                entries.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_char<E>(self, value: char) -> Result<Value, E> {
                Ok(Value::string(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Value, E> {
                Ok(Value::string(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Value, E> {
                Ok(Value::string(value))
            }

            fn visit_unit<E>(self) -> Result<Value, E> {
                Ok(Value::unit())
            }

            fn visit_none<E>(self) -> Result<Value, E> {
                Ok(Value::unit())
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(Value::Sequence(elements))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = Map::new();
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(Value::Mapping(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::type_mismatch("i64", value.kind_name()))
    }
}

impl TryFrom<Value> for u64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_u64()
            .ok_or_else(|| crate::Error::type_mismatch("u64", value.kind_name()))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::type_mismatch("f64", value.kind_name()))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| crate::Error::type_mismatch("bool", value.kind_name()))
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Scalar(s) if s.is_string => Ok(s.text),
            other => Err(crate::Error::type_mismatch("string", other.kind_name())),
        }
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::raw(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::string(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Mapping(value)
    }
}
