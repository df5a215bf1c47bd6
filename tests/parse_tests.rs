use serde_pyrepr::{
    format, from_str, parse, parse_with_config, value, ContainerKind, DelimiterConfig, Error, Map,
    Value,
};
use std::collections::BTreeMap;

#[test]
fn test_parse_formatted_output() {
    let original = value!({"a": [1, 2], "b": ("x", true), "c": {3, 4}, "d": ()});
    let text = format(&original);
    assert_eq!(parse(&text).unwrap(), original);
}

#[test]
fn test_parse_preserves_scalar_flavour() {
    let value = parse("['1', 1]").unwrap();
    assert_eq!(value, Value::Sequence(vec![Value::string("1"), Value::raw("1")]));
}

#[test]
fn test_parse_strings_with_structure_inside() {
    let value = parse(r"{'a, b': 'x: [y]', 'quote\'s': '\\'}").unwrap();
    let map = value.as_mapping().unwrap();
    assert_eq!(
        map.get(&Value::from("a, b")),
        Some(&Value::string("x: [y]"))
    );
    assert_eq!(map.get(&Value::from("quote's")), Some(&Value::string("\\")));
}

#[test]
fn test_parse_multiline_input() {
    let text = "{\n    'a': [\n        1,\n        2\n    ],\n    'b': ()\n}";
    let value = parse(text).unwrap();
    assert_eq!(value, value!({"a": [1, 2], "b": ()}));
}

#[test]
fn test_parse_mapping_with_duplicate_keys() {
    let value = parse("{1: 'a', 1: 'b'}").unwrap();
    let map = value.as_mapping().unwrap();
    let all: Vec<_> = map.get_all(&Value::from(1)).filter_map(Value::as_str).collect();
    assert_eq!(all, vec!["a", "b"]);
}

#[test]
fn test_parse_container_keys() {
    let value = parse("{(1, 2): 'pair'}").unwrap();
    let mut expected = Map::new();
    expected.insert(value!((1, 2)), Value::from("pair"));
    assert_eq!(value, Value::Mapping(expected));
}

#[test]
fn test_unterminated_container() {
    match parse("{'a': [1, 2}") {
        Err(Error::UnterminatedContainer { line, col, expected }) => {
            assert_eq!((line, col), (1, 7));
            assert_eq!(expected, "]");
        }
        other => panic!("expected unterminated container, got {:?}", other),
    }

    match parse("[1, 2)") {
        Err(Error::UnterminatedContainer { line, col, expected }) => {
            assert_eq!((line, col), (1, 1));
            assert_eq!(expected, "]");
        }
        other => panic!("expected unterminated container, got {:?}", other),
    }

    match parse("[\n  [1, 2],\n  [3") {
        Err(Error::UnterminatedContainer { line, col, expected }) => {
            assert_eq!((line, col), (3, 3));
            assert_eq!(expected, "]");
        }
        other => panic!("expected unterminated container, got {:?}", other),
    }
}

#[test]
fn test_malformed_escape_position() {
    match parse("[\n'ok', 'bad\\x']") {
        Err(Error::MalformedEscape { line, col, sequence }) => {
            assert_eq!((line, col), (2, 11));
            assert_eq!(sequence, "\\x");
        }
        other => panic!("expected malformed escape, got {:?}", other),
    }
}

#[test]
fn test_trailing_separator_rejected() {
    assert!(matches!(parse("[1, 2,]"), Err(Error::TrailingSeparator { .. })));
    assert!(matches!(parse("{'a': 1, }"), Err(Error::TrailingSeparator { .. })));
    assert!(matches!(parse("(1,)"), Err(Error::TrailingSeparator { .. })));
}

#[test]
fn test_unexpected_tokens() {
    assert!(matches!(parse("[, 1]"), Err(Error::UnexpectedToken { .. })));
    assert!(matches!(parse("]"), Err(Error::UnexpectedToken { .. })));
    assert!(matches!(parse("{'a' 'b'}"), Err(Error::UnexpectedToken { .. })));
    assert!(matches!(parse("[1] [2]"), Err(Error::UnexpectedToken { .. })));
    assert!(matches!(parse("   "), Err(Error::UnexpectedEof { .. })));
}

#[test]
fn test_custom_config_parse() {
    let config = DelimiterConfig::new()
        .with_brackets(ContainerKind::Set, "set(", ")")
        .with_value_separator("; ")
        .with_string_delimiter('"');

    let value = parse_with_config(r#"[set(1; 2); ("it's"; {"k": "v"})]"#, &config).unwrap();
    assert_eq!(
        value,
        Value::Sequence(vec![
            Value::Set(vec![Value::from(1), Value::from(2)]),
            value!(("it's", {"k": "v"})),
        ])
    );
}

#[test]
fn test_ambiguous_config_rejected() {
    let config = DelimiterConfig::new().with_key_value_separator(",");
    assert!(matches!(
        parse_with_config("[1]", &config),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_deserialize_type_mismatch() {
    let result: Result<Vec<i32>, Error> = from_str("{'a': 1}");
    match result {
        Err(Error::TypeMismatch { expected, found }) => {
            assert_eq!(expected, "sequence");
            assert_eq!(found, "mapping");
        }
        other => panic!("expected type mismatch, got {:?}", other),
    }

    let result: Result<BTreeMap<String, bool>, Error> = from_str("{'a': 1}");
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));

    let result: Result<String, Error> = from_str("[1]");
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_deserialize_sets_and_tuples() {
    let numbers: Vec<u32> = from_str("{3, 1, 2}").unwrap();
    assert_eq!(numbers, vec![3, 1, 2]);

    let pair: (String, i64) = from_str("['k', -9]").unwrap();
    assert_eq!(pair, ("k".to_string(), -9));

    let none: Option<u8> = from_str("()").unwrap();
    assert_eq!(none, None);
}
