//! Shared fixtures for the integration tests.

use std::path::PathBuf;

use dotconf::{
    Configuration, Node,
    node::{List, Map},
};
use tempfile::TempDir;

/// Parse a JSON literal into a node, panicking on invalid input
pub fn node(text: &str) -> Node {
    Node::parse(text).unwrap_or_else(|e| panic!("invalid test literal {text}: {e}"))
}

/// An in-memory configuration whose root is the given JSON literal
pub fn config_with(text: &str) -> Configuration {
    let mut config = Configuration::in_memory("test.json");
    config.set_content(node(text));
    config
}

/// A list of `Null`s of the given length
pub fn null_list(len: usize) -> Node {
    Node::from((0..len).map(|_| Node::Null).collect::<List>())
}

/// A small but representative tree:
///
/// ```json
/// {"server": {"host": "localhost", "ports": [80, 443]}, "debug": false}
/// ```
pub fn sample_tree() -> Node {
    let mut server = Map::new();
    server.insert("host", "localhost");
    server.insert("ports", [80, 443].into_iter().collect::<List>());

    let mut root = Map::new();
    root.insert("server", server);
    root.insert("debug", false);
    Node::from(root)
}

/// A temporary directory plus a file path inside it that does not exist yet
pub fn temp_config_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("config.json");
    (dir, file)
}

/// Create a file at a fresh temp path holding `text`
pub fn temp_config_file(text: &str) -> (TempDir, PathBuf) {
    let (dir, file) = temp_config_path();
    std::fs::write(&file, text).expect("Failed to write config file");
    (dir, file)
}
