use dotconf::{Node, Path, resolver::resolve};

use crate::helpers::*;

#[test]
fn test_read_miss_on_null_root() {
    let config = config_with("null");
    assert!(config.get("a.b.c").is_null());
    assert!(config.get("a").is_null());
}

#[test]
fn test_empty_path_returns_root() {
    let config = config_with(r#"{"z": 1}"#);
    assert_eq!(config.get(""), config.content());
    assert_eq!(config.get(""), &node(r#"{"z": 1}"#));
}

#[test]
fn test_walk_through_maps_and_lists() {
    let tree = sample_tree();

    assert_eq!(resolve(&tree, Path::new("server.host")), "localhost");
    assert_eq!(resolve(&tree, Path::new("server.ports.0")), &Node::Int(80));
    assert_eq!(resolve(&tree, Path::new("server.ports.1")), &Node::Int(443));
    assert_eq!(resolve(&tree, Path::new("debug")), &Node::Bool(false));
}

#[test]
fn test_short_circuits_on_unfollowable_segment() {
    let tree = sample_tree();

    // out of bounds
    assert!(resolve(&tree, Path::new("server.ports.2")).is_null());
    // non-numeric on a list
    assert!(resolve(&tree, Path::new("server.ports.first")).is_null());
    // descending into a scalar
    assert!(resolve(&tree, Path::new("server.host.name")).is_null());
    // everything after the failure is ignored
    assert!(resolve(&tree, Path::new("server.ports.9.a.b.c")).is_null());
}

#[test]
fn test_numeric_segment_is_a_key_on_maps() {
    let config = config_with(r#"{"ports": {"0": "zero", "1": "one"}, "list": ["a"]}"#);

    assert_eq!(config.get("ports.1"), "one");
    assert_eq!(config.get("list.0"), "a");
    assert!(config.get("list.00x").is_null());
}

#[test]
fn test_leading_zeros_index_lists() {
    let config = config_with(r#"["a", "b"]"#);
    assert_eq!(config.get("01"), "b");
}

#[test]
fn test_empty_segment_is_an_empty_key() {
    let config = config_with(r#"{"a": {"": {"b": 1}}}"#);
    assert_eq!(config.get("a..b"), &Node::Int(1));
}

#[test]
fn test_reads_do_not_mutate() {
    let config = config_with(r#"{"a": {}}"#);
    let before = config.content().clone();

    assert!(config.get("a.b.c").is_null());
    assert!(config.get("x").is_null());
    assert_eq!(config.content(), &before);
}
