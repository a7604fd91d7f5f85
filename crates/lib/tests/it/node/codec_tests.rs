use dotconf::node::{List, Map, Node};

use crate::helpers::*;

#[test]
fn test_parse_keeps_document_order() {
    let parsed = node(r#"{"zeta": 1, "alpha": 2, "mid": {"y": 0, "x": 1}}"#);
    let map = parsed.as_map().unwrap();

    assert_eq!(map.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
    assert_eq!(
        parsed.to_text(0).unwrap(),
        r#"{"zeta":1,"alpha":2,"mid":{"y":0,"x":1}}"#
    );
}

#[test]
fn test_pretty_indent_widths() {
    let tree = Node::from(Map::single("a", vec![Node::from(1)]));

    assert_eq!(tree.to_text(0).unwrap(), r#"{"a":[1]}"#);
    assert_eq!(tree.to_text(1).unwrap(), "{\n \"a\": [\n  1\n ]\n}");
    assert_eq!(tree.to_text(4).unwrap(), "{\n    \"a\": [\n        1\n    ]\n}");
}

#[test]
fn test_scalars_and_null_round_trip_through_text() {
    for text in ["null", "true", "0", "\"plain\"", "[]", "{}"] {
        assert_eq!(node(text).to_text(0).unwrap(), text);
    }
}

#[test]
fn test_invalid_text_is_parse_error() {
    let err = Node::parse("{\"a\": ").unwrap_err();
    assert!(err.is_parse_error());

    let err: dotconf::Error = "not json".parse::<Node>().unwrap_err().into();
    assert!(err.is_parse_error());
    assert_eq!(err.module(), "node");
}

#[test]
fn test_display_is_compact_text() {
    let tree = sample_tree();
    assert_eq!(
        tree.to_string(),
        r#"{"server":{"host":"localhost","ports":[80,443]},"debug":false}"#
    );
}

#[test]
fn test_serde_value_interop() {
    let value = serde_json::json!({"list": [1, "two", null], "flag": true});
    let tree: Node = serde_json::from_value(value.clone()).unwrap();

    let expected: List = [Node::from(1), Node::from("two"), Node::Null]
        .into_iter()
        .collect();
    assert_eq!(tree.as_map().unwrap().get("list"), &Node::from(expected));
    assert_eq!(serde_json::to_value(&tree).unwrap(), value);
}
