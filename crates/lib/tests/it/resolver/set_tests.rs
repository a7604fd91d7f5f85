use dotconf::{
    Configuration, Node, Path,
    node::Map,
    resolver::{Assignment, assign},
};

use crate::helpers::*;

#[test]
fn test_round_trip_on_fresh_paths() {
    let mut config = config_with("null");
    let writes = [
        ("a", node("1")),
        ("b.c", node(r#""text""#)),
        ("b.d.e", node("[1, 2]")),
        ("b.d.e.1", node("true")),
        ("f.0", node("{}")),
    ];

    for (path, value) in &writes {
        config.set(*path, value.clone()).unwrap();
        assert_eq!(config.get(*path), value, "after setting {path}");
    }
    assert_eq!(
        config.content(),
        &node(r#"{"a": 1, "b": {"c": "text", "d": {"e": [1, true]}}, "f": {"0": {}}}"#)
    );
}

#[test]
fn test_map_auto_creation() {
    let mut config = config_with("null");
    config.set("a.b", 5).unwrap();

    assert_eq!(config.get("a"), &Node::from(Map::single("b", 5)));
    assert_eq!(config.get("a.b"), &Node::Int(5));
}

#[test]
fn test_list_bound_enforcement() {
    let mut config = Configuration::in_memory("test.json");
    config.set_content(null_list(2));

    let err = config.set("5", "x").unwrap_err();
    assert!(err.is_bounds_error());
    assert!(!err.is_fatal());

    config.set("5.y", "x").unwrap();
    assert_eq!(config.content(), &null_list(2));
}

#[test]
fn test_first_step_skip_is_reported_by_assign() {
    let mut root = null_list(2);
    let outcome = assign(&mut root, Path::new("2.y"), Node::from(1)).unwrap();

    assert_eq!(outcome, Assignment::Skipped);
    assert!(!outcome.is_applied());
    assert_eq!(root, null_list(2));
}

#[test]
fn test_leaf_displacement_at_root() {
    let mut config = config_with(r#""hello""#);
    config.set("x.y", 1).unwrap();

    assert_eq!(config.content(), &node(r#"{"x": {"y": 1}}"#));
}

#[test]
fn test_single_segment_replaces_non_map_root() {
    for root in ["null", "3", r#""s""#, "[1, 2]"] {
        let mut config = config_with(root);
        config.set("key", "v").unwrap();
        assert_eq!(config.content(), &node(r#"{"key": "v"}"#), "root {root}");
    }
}

#[test]
fn test_single_segment_updates_list_root() {
    let mut config = config_with("[1, 2, 3]");
    config.set("1", "two").unwrap();

    assert_eq!(config.content(), &node(r#"[1, "two", 3]"#));
}

#[test]
fn test_empty_path_replaces_root() {
    for root in ["null", "[1]", r#"{"a": {"b": 2}}"#, "false"] {
        let mut config = config_with(root);
        config.set("", node(r#"{"z": 1}"#)).unwrap();

        assert_eq!(config.content(), &node(r#"{"z": 1}"#));
        assert_eq!(config.get(""), &node(r#"{"z": 1}"#));
    }
}

#[test]
fn test_set_is_idempotent() {
    let paths = ["a", "a.b", "list.1.x", "list.9.y", "0", "s.t.u.v", ""];
    for path in paths {
        let mut once = config_with(r#"{"list": [1, 2], "a": "leaf", "s": 1}"#);
        once.set(path, "v").unwrap();

        let mut twice = once.clone();
        twice.set(path, "v").unwrap();

        assert_eq!(once.content(), twice.content(), "path {path}");
    }
}

#[test]
fn test_intermediate_leaf_is_replaced() {
    let mut config = config_with(r#"{"a": {"b": 7, "keep": true}}"#);
    config.set("a.b.c.d", "deep").unwrap();

    assert_eq!(
        config.content(),
        &node(r#"{"a": {"b": {"c": {"d": "deep"}}, "keep": true}}"#)
    );
}

#[test]
fn test_intermediate_leaf_inside_list_is_replaced() {
    let mut config = config_with(r#"{"items": [1, {"name": "b"}]}"#);
    config.set("items.0.name", "a").unwrap();

    assert_eq!(
        config.content(),
        &node(r#"{"items": [{"name": "a"}, {"name": "b"}]}"#)
    );
}

#[test]
fn test_write_through_nested_lists() {
    let mut config = config_with(r#"{"grid": [[0, 0], [0, 0]]}"#);
    config.set("grid.1.0", 5).unwrap();

    assert_eq!(config.content(), &node(r#"{"grid": [[0, 0], [5, 0]]}"#));
}

#[test]
fn test_list_root_first_step_in_bounds() {
    let mut config = config_with(r#"[{"a": 1}, 2]"#);
    config.set("0.b", 2).unwrap();
    config.set("1.c", 3).unwrap();

    assert_eq!(config.content(), &node(r#"[{"a": 1, "b": 2}, {"c": 3}]"#));
}

#[test]
fn test_non_numeric_first_segment_on_list_root_replaces_it() {
    let mut config = config_with("[1, 2]");
    config.set("name.first", "x").unwrap();

    assert_eq!(config.content(), &node(r#"{"name": {"first": "x"}}"#));
}

#[test]
fn test_nested_list_cannot_grow() {
    let mut config = config_with(r#"{"ports": [80]}"#);

    let err = config.set("ports.1", 443).unwrap_err();
    assert!(err.is_bounds_error());
    assert_eq!(config.content(), &node(r#"{"ports": [80]}"#));
    assert!(config.get("ports.1").is_null());
}

#[test]
fn test_write_through_missing_nested_slot_keeps_list() {
    let mut config = config_with(r#"{"a": [1, 2, 3]}"#);

    config.set("a.5.b", 9).unwrap();
    config.set("a.3.b.c", 9).unwrap();
    assert_eq!(config.content(), &node(r#"{"a": [1, 2, 3]}"#));

    let mut root = config.into_content();
    let outcome = assign(&mut root, Path::new("a.5.b"), Node::from(9)).unwrap();
    assert_eq!(outcome, Assignment::Skipped);
}

#[test]
fn test_missing_slot_in_list_of_lists_is_skipped() {
    let mut config = config_with(r#"{"grid": [[0, 0]]}"#);
    config.set("grid.0.4.x", 1).unwrap();
    config.set("grid.2.0", 1).unwrap();

    assert_eq!(config.content(), &node(r#"{"grid": [[0, 0]]}"#));
}

#[test]
fn test_non_numeric_segment_on_nested_list_replaces_it() {
    let mut config = config_with(r#"{"ports": [80]}"#);
    config.set("ports.http", 80).unwrap();

    assert_eq!(config.content(), &node(r#"{"ports": {"http": 80}}"#));
}

#[test]
fn test_new_keys_keep_insertion_order() {
    let mut config = config_with(r#"{"b": 1}"#);
    config.set("a", 2).unwrap();
    config.set("b", 3).unwrap();

    let keys: Vec<_> = config.content().as_map().unwrap().keys().collect();
    assert_eq!(keys, ["b", "a"]);
}

#[test]
fn test_null_is_a_legal_value() {
    let mut config = config_with(r#"{"a": {"b": 1}}"#);
    config.set("a.b", Node::Null).unwrap();

    assert_eq!(config.content(), &node(r#"{"a": {"b": null}}"#));
    assert!(config.get("a.b").is_null());
}

#[test]
fn test_shorter_prefix_replaces_subtree() {
    let mut config = config_with("null");
    config.set("a.b.c", 1).unwrap();
    config.set("a.b", 2).unwrap();

    assert!(config.get("a.b.c").is_null());
    assert_eq!(config.get("a.b"), &Node::Int(2));
}
