use std::fs;

use dotconf::{Configuration, Node, configuration::DEFAULT_INDENT};

use crate::helpers::*;

fn created_config() -> (tempfile::TempDir, Configuration) {
    let (dir, file) = temp_config_path();
    let config = Configuration::open(&file).unwrap();
    (dir, config)
}

#[test]
fn test_save_compact() {
    let (_dir, mut config) = created_config();
    config.set("a.b", 1).unwrap();
    config.save(0).unwrap();

    assert_eq!(fs::read_to_string(config.file()).unwrap(), r#"{"a":{"b":1}}"#);
}

#[test]
fn test_save_default_indent() {
    let (_dir, mut config) = created_config();
    config.set("list", vec![Node::from(1), Node::from(2)]).unwrap();
    config.save(DEFAULT_INDENT).unwrap();

    assert_eq!(
        fs::read_to_string(config.file()).unwrap(),
        "{\n    \"list\": [\n        1,\n        2\n    ]\n}"
    );
}

#[test]
fn test_save_then_load_round_trip() {
    let (_dir, mut config) = created_config();
    config.set_content(sample_tree());
    config.set("server.ports.0", 8080).unwrap();
    config.set("server.tls.enabled", true).unwrap();

    for indent in [0, 2, DEFAULT_INDENT] {
        config.save(indent).unwrap();
        let reloaded = Configuration::load(config.file()).unwrap();
        assert_eq!(reloaded, config, "indent {indent}");
    }
}

#[test]
fn test_save_does_not_change_content() {
    let (_dir, mut config) = created_config();
    config.set("x", "y").unwrap();
    let before = config.content().clone();

    config.save(3).unwrap();
    assert_eq!(config.content(), &before);
}

#[test]
fn test_save_preserves_key_order() {
    let (_dir, mut config) = created_config();
    config.set("zeta", 1).unwrap();
    config.set("alpha", 2).unwrap();
    config.save(0).unwrap();

    assert_eq!(
        fs::read_to_string(config.file()).unwrap(),
        r#"{"zeta":1,"alpha":2}"#
    );
}

#[test]
fn test_save_requires_regular_file() {
    let (_dir, file) = temp_config_path();
    let mut config = Configuration::in_memory(&file);
    config.set("a", 1).unwrap();

    let err = config.save(0).unwrap_err();
    assert!(err.is_not_found());
    assert!(!file.exists());

    fs::create_dir(&file).unwrap();
    let err = config.save(0).unwrap_err();
    assert!(err.is_state_error());
    assert!(!err.is_not_found());

    fs::remove_dir(&file).unwrap();
    Configuration::create(&file, false).unwrap();
    config.save(0).unwrap();
    assert_eq!(Configuration::load(&file).unwrap().get("a"), &Node::Int(1));
}
