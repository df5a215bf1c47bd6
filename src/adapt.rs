//! Adapting native Rust types into [`Value`]s.
//!
//! [`Adapt`] is how a type tells the formatter what it looks like. The crate
//! implements it for the standard containers, strings, primitives, tuples up
//! to twelve elements, `indexmap` collections, `num-bigint` integers and
//! `chrono` dates, times and durations. Implement it for your own types to
//! change how they are decorated; the formatter itself never needs to change.
//!
//! | Source shape | Value |
//! |--------------|-------|
//! | `Vec`, `VecDeque`, `LinkedList`, slices, arrays | [`Value::Sequence`] |
//! | `HashSet`, `BTreeSet`, `IndexSet` | [`Value::Set`] |
//! | `HashMap`, `BTreeMap`, `IndexMap` | [`Value::Mapping`] |
//! | tuples | [`Value::Tuple`] |
//! | `str`, `String`, `char` | string [`Scalar`] |
//! | numbers, `bool`, dates, durations, big integers | raw [`Scalar`] |
//! | `Option<T>` | `T`, or the empty tuple for `None` |
//!
//! ```rust
//! use serde_pyrepr::{format, Adapt, Value};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Adapt for Point {
//!     fn adapt(&self) -> Value {
//!         Value::Tuple(vec![self.x.adapt(), self.y.adapt()])
//!     }
//! }
//!
//! assert_eq!(format(&vec![Point { x: 1, y: 2 }]), "[(1, 2)]");
//! ```

use crate::timed::human_duration;
use crate::{Map, Scalar, Value};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use indexmap::{IndexMap, IndexSet};
use num_bigint::{BigInt, BigUint};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Describes how a type is rendered.
pub trait Adapt {
    /// Builds the [`Value`] the formatter will walk.
    fn adapt(&self) -> Value;
}

impl Adapt for Value {
    fn adapt(&self) -> Value {
        self.clone()
    }
}

impl Adapt for Scalar {
    fn adapt(&self) -> Value {
        Value::Scalar(self.clone())
    }
}

impl Adapt for Map {
    fn adapt(&self) -> Value {
        Value::Mapping(self.clone())
    }
}

// Pass-through wrappers

impl<T: Adapt + ?Sized> Adapt for &T {
    fn adapt(&self) -> Value {
        (**self).adapt()
    }
}

impl<T: Adapt + ?Sized> Adapt for &mut T {
    fn adapt(&self) -> Value {
        (**self).adapt()
    }
}

impl<T: Adapt + ?Sized> Adapt for Box<T> {
    fn adapt(&self) -> Value {
        (**self).adapt()
    }
}

impl<T: Adapt + ?Sized> Adapt for Rc<T> {
    fn adapt(&self) -> Value {
        (**self).adapt()
    }
}

impl<T: Adapt + ?Sized> Adapt for Arc<T> {
    fn adapt(&self) -> Value {
        (**self).adapt()
    }
}

impl<T: Adapt> Adapt for Option<T> {
    fn adapt(&self) -> Value {
        match self {
            Some(inner) => inner.adapt(),
            None => Value::unit(),
        }
    }
}

// Strings

impl Adapt for str {
    fn adapt(&self) -> Value {
        Value::string(self)
    }
}

impl Adapt for String {
    fn adapt(&self) -> Value {
        Value::string(self.as_str())
    }
}

impl Adapt for Cow<'_, str> {
    fn adapt(&self) -> Value {
        Value::string(self.as_ref())
    }
}

impl Adapt for char {
    fn adapt(&self) -> Value {
        Value::string(*self)
    }
}

// Everything rendered through its own Display

macro_rules! adapt_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Adapt for $ty {
                fn adapt(&self) -> Value {
                    Value::raw(self.to_string())
                }
            }
        )*
    };
}

adapt_display!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    BigInt, BigUint, NaiveDate, NaiveTime, NaiveDateTime,
);

impl<Tz> Adapt for chrono::DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn adapt(&self) -> Value {
        Value::raw(self.to_rfc3339())
    }
}

impl Adapt for Duration {
    fn adapt(&self) -> Value {
        Value::raw(human_duration(*self))
    }
}

impl Adapt for chrono::Duration {
    fn adapt(&self) -> Value {
        match self.to_std() {
            Ok(duration) => Value::raw(human_duration(duration)),
            Err(_) => Value::raw(format!(
                "-{}",
                human_duration((-*self).to_std().unwrap_or_default())
            )),
        }
    }
}

// Ordered sequences

impl<T: Adapt> Adapt for [T] {
    fn adapt(&self) -> Value {
        Value::Sequence(self.iter().map(Adapt::adapt).collect())
    }
}

impl<T: Adapt, const N: usize> Adapt for [T; N] {
    fn adapt(&self) -> Value {
        self.as_slice().adapt()
    }
}

impl<T: Adapt> Adapt for Vec<T> {
    fn adapt(&self) -> Value {
        self.as_slice().adapt()
    }
}

impl<T: Adapt> Adapt for VecDeque<T> {
    fn adapt(&self) -> Value {
        Value::Sequence(self.iter().map(Adapt::adapt).collect())
    }
}

impl<T: Adapt> Adapt for LinkedList<T> {
    fn adapt(&self) -> Value {
        Value::Sequence(self.iter().map(Adapt::adapt).collect())
    }
}

// Sets: rendered in whatever order the container iterates

impl<T: Adapt, S> Adapt for HashSet<T, S> {
    fn adapt(&self) -> Value {
        Value::Set(self.iter().map(Adapt::adapt).collect())
    }
}

impl<T: Adapt> Adapt for BTreeSet<T> {
    fn adapt(&self) -> Value {
        Value::Set(self.iter().map(Adapt::adapt).collect())
    }
}

impl<T: Adapt, S> Adapt for IndexSet<T, S> {
    fn adapt(&self) -> Value {
        Value::Set(self.iter().map(Adapt::adapt).collect())
    }
}

// Mappings

fn adapt_entries<'a, K, V, I>(entries: I) -> Value
where
    K: Adapt + 'a,
    V: Adapt + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    Value::Mapping(entries.map(|(k, v)| (k.adapt(), v.adapt())).collect())
}

impl<K: Adapt, V: Adapt, S> Adapt for HashMap<K, V, S> {
    fn adapt(&self) -> Value {
        adapt_entries(self.iter())
    }
}

impl<K: Adapt, V: Adapt> Adapt for BTreeMap<K, V> {
    fn adapt(&self) -> Value {
        adapt_entries(self.iter())
    }
}

impl<K: Adapt, V: Adapt, S> Adapt for IndexMap<K, V, S> {
    fn adapt(&self) -> Value {
        adapt_entries(self.iter())
    }
}

// Tuples

impl Adapt for () {
    fn adapt(&self) -> Value {
        Value::unit()
    }
}

macro_rules! adapt_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: Adapt),+> Adapt for ($($name,)+) {
            fn adapt(&self) -> Value {
                Value::Tuple(vec![$(self.$idx.adapt()),+])
            }
        }
    };
}

adapt_tuple!(A.0);
adapt_tuple!(A.0, B.1);
adapt_tuple!(A.0, B.1, C.2);
adapt_tuple!(A.0, B.1, C.2, D.3);
adapt_tuple!(A.0, B.1, C.2, D.3, E.4);
adapt_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
adapt_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
adapt_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
adapt_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
adapt_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
adapt_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
adapt_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_sequences_keep_order() {
        let deque: VecDeque<i32> = vec![3, 1, 2].into();
        assert_eq!(
            deque.adapt(),
            Value::Sequence(vec![Value::from(3), Value::from(1), Value::from(2)])
        );
        assert_eq!([1u8, 2].adapt(), vec![1u8, 2].adapt());
    }

    #[test]
    fn test_sets_and_maps() {
        let set: BTreeSet<&str> = ["b", "a"].into_iter().collect();
        assert_eq!(
            set.adapt(),
            Value::Set(vec![Value::from("a"), Value::from("b")])
        );

        let mut map = IndexMap::new();
        map.insert("z", 1);
        map.insert("a", 2);
        let keys: Vec<_> = match map.adapt() {
            Value::Mapping(m) => m.keys().filter_map(|k| k.as_str().map(String::from)).collect(),
            other => panic!("expected mapping, got {:?}", other),
        };
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_string_flag_decided_by_type() {
        assert!("x".adapt().is_string());
        assert!('x'.adapt().is_string());
        assert!(String::from("x").adapt().is_string());
        assert!(!1i32.adapt().is_string());
        assert!(!true.adapt().is_string());
    }

    #[test]
    fn test_option_and_unit() {
        assert_eq!(None::<i32>.adapt(), Value::unit());
        assert_eq!(Some(5i32).adapt(), Value::from(5));
        assert_eq!(().adapt(), Value::unit());
    }

    #[test]
    fn test_tuples() {
        assert_eq!(
            (1i32, "foo", true).adapt(),
            Value::Tuple(vec![Value::from(1), Value::from("foo"), Value::from(true)])
        );
        assert_eq!((7i32,).adapt(), Value::Tuple(vec![Value::from(7)]));
    }

    #[test]
    fn test_natural_stringification() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(big.adapt(), Value::raw("123456789012345678901234567890"));

        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(date.adapt(), Value::raw("2024-01-15"));

        let stamp = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(stamp.adapt(), Value::raw("2024-01-15T10:30:00+00:00"));
    }

    #[test]
    fn test_durations() {
        assert_eq!(Duration::from_millis(42).adapt(), Value::raw("42ms"));
        assert_eq!(chrono::Duration::milliseconds(-42).adapt(), Value::raw("-42ms"));
    }
}
