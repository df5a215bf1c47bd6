//! Property-based tests for the formatting and parsing guarantees
//!
//! These complement the example-based tests by checking escape reversibility,
//! separator counts and the format/parse round trip over generated values.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_pyrepr::escape::{escape, unescape};
use serde_pyrepr::{format, from_str, parse, to_string, Map, Value};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z0-9_.-]{1,8}".prop_map(Value::raw),
        any::<String>().prop_map(Value::string),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Tuple),
            prop::collection::vec(inner.clone(), 1..4).prop_map(Value::Set),
            prop::collection::vec((inner.clone(), inner), 0..4)
                .prop_map(|entries| Value::Mapping(entries.into_iter().collect::<Map>())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_unescape_reverses_escape(text in any::<String>(), delimiter in prop::sample::select(vec!['\'', '"', '|'])) {
        let escaped = escape(&text, delimiter);
        prop_assert_eq!(unescape(&escaped, delimiter).unwrap(), text.as_str());
    }

    #[test]
    fn prop_escape_matches_ordered_replacement(text in ".*") {
        let ordered = text.replace('\\', "\\\\").replace('\'', "\\'");
        prop_assert_eq!(escape(&text, '\''), ordered);
    }

    #[test]
    fn prop_sequence_separator_count(items in prop::collection::vec(any::<u16>(), 0..20)) {
        let text = format(&items);
        prop_assert!(text.starts_with('['));
        prop_assert!(text.ends_with(']'));
        prop_assert_eq!(text.matches(", ").count(), items.len().saturating_sub(1));
    }

    #[test]
    fn prop_parse_inverts_format(value in arb_value()) {
        let text = format(&value);
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_string(s in any::<String>()) {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple_i32_string(t in (any::<i32>(), any::<String>())) {
        prop_assert!(roundtrip(&t));
    }
}
