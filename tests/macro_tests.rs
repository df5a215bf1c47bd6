use serde_pyrepr::{value, Map, Value};
use std::collections::BTreeSet;

#[test]
fn test_value_macro_unit() {
    assert_eq!(value!(()), Value::unit());
    assert!(value!(()).is_unit());
}

#[test]
fn test_value_macro_numbers_are_raw() {
    assert_eq!(value!(42), Value::raw("42"));
    assert_eq!(value!(3.5), Value::raw("3.5"));
    assert_eq!(value!(-123), Value::raw("-123"));
    assert!(!value!(false).is_string());
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::string("hello world"));
    assert_eq!(value!(""), Value::string(""));
    assert_eq!(value!('c'), Value::string("c"));
}

#[test]
fn test_value_macro_sequences() {
    assert_eq!(value!([]), Value::Sequence(vec![]));
    assert_eq!(
        value!([1, "hello", true, ()]),
        Value::Sequence(vec![
            Value::from(1),
            Value::from("hello"),
            Value::from(true),
            Value::unit(),
        ])
    );
}

#[test]
fn test_value_macro_tuples() {
    assert_eq!(value!((1,)), Value::Tuple(vec![Value::from(1)]));
    assert_eq!(value!((1, 2)).to_string(), "(1, 2)");
}

#[test]
fn test_value_macro_mappings() {
    assert_eq!(value!({}), Value::Mapping(Map::new()));

    let user = value!({
        "name": "Alice",
        "age": 30,
    });
    match user {
        Value::Mapping(ref map) => {
            assert_eq!(map.len(), 2);
            assert_eq!(map.get(&Value::from("name")), Some(&Value::from("Alice")));
            assert_eq!(map.get(&Value::from("age")), Some(&Value::from(30)));
        }
        _ => panic!("Expected mapping"),
    }
    assert_eq!(user.to_string(), "{'name': 'Alice', 'age': 30}");
}

#[test]
fn test_value_macro_sets() {
    let set = value!({"a", "b"});
    assert!(set.is_set());
    assert_eq!(set.to_string(), "{'a', 'b'}");
}

#[test]
fn test_value_macro_nested() {
    let data = value!({
        "matrix": [[1, 2], [3, 4]],
        "point": (0, {"z": 1}),
        "empty": []
    });
    assert_eq!(
        data.to_string(),
        "{'matrix': [[1, 2], [3, 4]], 'point': (0, {'z': 1}), 'empty': []}"
    );
}

#[test]
fn test_value_macro_variables() {
    let names: BTreeSet<&str> = ["b", "a"].into_iter().collect();
    let offset = -5;
    let data = value!({"names": names, "offset": offset});
    assert_eq!(data.to_string(), "{'names': {'a', 'b'}, 'offset': -5}");
}
