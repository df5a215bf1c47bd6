/// Builds a [`Value`](crate::Value) from a literal-like shape.
///
/// - `[a, b]` is a sequence, `(a, b)` a tuple and `()` the unit value
/// - `{k: v, ...}` is a mapping, `{a, b}` a set, `{}` an empty mapping
/// - anything else goes through [`Adapt`](crate::Adapt), so strings stay
///   strings and numbers, bools and variables keep their natural form
///
/// Elements are single token trees. Bind negative numbers and other compound
/// expressions to a variable first.
///
/// ```rust
/// use serde_pyrepr::value;
///
/// let tags = vec!["a", "b"];
/// let v = value!({"name": "Alice", "point": (1, 2), "tags": tags, "seen": {3, 4}});
/// assert_eq!(
///     v.to_string(),
///     "{'name': 'Alice', 'point': (1, 2), 'tags': ['a', 'b'], 'seen': {3, 4}}"
/// );
/// ```
#[macro_export]
macro_rules! value {
    (()) => {
        $crate::Value::unit()
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::value!($elem)),+])
    };

    ({}) => {
        $crate::Value::Mapping($crate::Map::new())
    };

    ({ $($key:tt : $value:tt),+ $(,)? }) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert($crate::value!($key), $crate::value!($value));
        )+
        $crate::Value::Mapping(map)
    }};

    ({ $($elem:tt),+ $(,)? }) => {
        $crate::Value::Set(vec![$($crate::value!($elem)),+])
    };

    (( $($elem:tt),+ $(,)? )) => {
        $crate::Value::Tuple(vec![$($crate::value!($elem)),+])
    };

    ($e:expr) => {
        $crate::Adapt::adapt(&$e)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Value};

    #[test]
    fn test_value_macro_scalars() {
        assert_eq!(value!(42), Value::raw("42"));
        assert_eq!(value!(true), Value::raw("true"));
        assert_eq!(value!("hello"), Value::string("hello"));
        assert_eq!(value!(()), Value::unit());
    }

    #[test]
    fn test_value_macro_containers() {
        assert_eq!(value!([]), Value::Sequence(vec![]));
        assert_eq!(value!({}), Value::Mapping(Map::new()));
        assert_eq!(
            value!((1, "a")),
            Value::Tuple(vec![Value::from(1), Value::from("a")])
        );
        assert_eq!(
            value!({1, 2}),
            Value::Set(vec![Value::from(1), Value::from(2)])
        );
    }

    #[test]
    fn test_value_macro_mapping_keys_any_shape() {
        let v = value!({(1, 2): "pair", "k": [1]});
        let map = v.as_mapping().unwrap();
        assert_eq!(
            map.get(&value!((1, 2))),
            Some(&Value::string("pair"))
        );
        assert_eq!(map.len(), 2);
    }
}
