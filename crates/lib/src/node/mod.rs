//! Dynamic tree model for configuration content.
//!
//! A configuration is a tree of untyped [`Node`]s. Leaves are either
//! [`Node::Null`] or an opaque scalar (boolean, integer, float or text);
//! branches are ordered [`List`]s and ordered string-keyed [`Map`]s.
//!
//! # Node Kinds
//!
//! - [`Node::Null`] - absence of a value; also what a missed lookup yields
//! - [`Node::Bool`], [`Node::Int`], [`Node::Float`], [`Node::Text`] - scalars
//! - [`Node::List`] - ordered, 0-indexed sequence
//! - [`Node::Map`] - ordered mapping, keys unique, insertion order preserved
//!
//! # Direct Comparisons
//!
//! `Node` implements `PartialEq` with primitive types for ergonomic comparisons:
//!
//! ```
//! # use dotconf::node::Node;
//! let text = Node::from("hello");
//! let number = Node::from(42);
//!
//! assert!(text == "hello");
//! assert!(number == 42);
//! assert!(!(text == 42));
//! ```

use std::fmt;

pub mod codec;
pub mod errors;
pub mod list;
pub mod map;

pub use errors::NodeError;
pub use list::List;
pub use map::Map;

use crate::path::PathBuf;

/// Shared `Null` handed out by lookups that miss.
pub(crate) static NULL: Node = Node::Null;

/// A node in a configuration tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    // Leaf values
    /// Absence of a value
    #[default]
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating point scalar
    Float(f64),
    /// Text scalar
    Text(String),

    // Branch values
    /// Ordered sequence of nodes
    List(List),
    /// Ordered string-keyed mapping of nodes
    Map(Map),
}

impl Node {
    /// Returns true if this is [`Node::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns true if this is a boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    /// Returns true if this is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Node::Int(_))
    }

    /// Returns true if this is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Node::Float(_))
    }

    /// Returns true if this is text
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Returns true if this is an opaque scalar (not null, not a container)
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Node::Bool(_) | Node::Int(_) | Node::Float(_) | Node::Text(_)
        )
    }

    /// Returns true if this is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Returns true if this is a map
    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    /// Returns true if this node can hold children
    pub fn is_container(&self) -> bool {
        matches!(self, Node::List(_) | Node::Map(_))
    }

    /// Returns the kind name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Int(_) => "int",
            Node::Float(_) => "float",
            Node::Text(_) => "text",
            Node::List(_) => "list",
            Node::Map(_) => "map",
        }
    }

    /// Attempts to read a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to read an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to read a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Node::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to read text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view this node as a list
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to view this node as a mutable list
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to view this node as a map
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to view this node as a mutable map
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns every leaf below this node together with its dotted path.
    ///
    /// The walk is depth-first in document order. List elements are
    /// addressed by index. Empty containers are reported as leaves so that
    /// every part of the tree shows up. A non-container node yields itself
    /// at the root path.
    ///
    /// ```
    /// # use dotconf::node::{List, Map, Node};
    /// let mut server = Map::new();
    /// server.insert("ports", [80, 443].into_iter().collect::<List>());
    /// let root = Node::from(Map::single("server", server));
    ///
    /// let paths: Vec<String> = root
    ///     .leaf_paths()
    ///     .into_iter()
    ///     .map(|(path, _)| path.to_string())
    ///     .collect();
    /// assert_eq!(paths, ["server.ports.0", "server.ports.1"]);
    /// ```
    pub fn leaf_paths(&self) -> Vec<(PathBuf, &Node)> {
        let mut out = Vec::new();
        collect_leaves(self, PathBuf::new(), &mut out);
        out
    }
}

fn collect_leaves<'a>(node: &'a Node, prefix: PathBuf, out: &mut Vec<(PathBuf, &'a Node)>) {
    match node {
        Node::Map(map) if !map.is_empty() => {
            for (key, child) in map {
                collect_leaves(child, prefix.clone().push(key), out);
            }
        }
        Node::List(list) if !list.is_empty() => {
            for (index, child) in list.iter().enumerate() {
                collect_leaves(child, prefix.clone().push(index.to_string()), out);
            }
        }
        _ => out.push((prefix, node)),
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text(0) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Int(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Int(value as i64)
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Int(value as i64)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<List> for Node {
    fn from(value: List) -> Self {
        Node::List(value)
    }
}

impl From<Map> for Node {
    fn from(value: Map) -> Self {
        Node::Map(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::List(List::from(value))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

fn mismatch(expected: &str, actual: &Node) -> NodeError {
    NodeError::TypeMismatch {
        expected: expected.to_string(),
        actual: actual.type_name().to_string(),
    }
}

// TryFrom implementations for typed reads
impl TryFrom<&Node> for bool {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl TryFrom<&Node> for i64 {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| mismatch("int", value))
    }
}

impl TryFrom<&Node> for f64 {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| mismatch("float", value))
    }
}

impl TryFrom<&Node> for String {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| mismatch("text", value))
    }
}

impl<'a> TryFrom<&'a Node> for &'a str {
    type Error = NodeError;

    fn try_from(value: &'a Node) -> Result<Self, Self::Error> {
        value.as_text().ok_or_else(|| mismatch("text", value))
    }
}

impl TryFrom<&Node> for List {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value.as_list().cloned().ok_or_else(|| mismatch("list", value))
    }
}

impl TryFrom<&Node> for Map {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value.as_map().cloned().ok_or_else(|| mismatch("map", value))
    }
}

// PartialEq implementations for comparing Node with other types
impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Node {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Node {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Node> for str {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for &str {
    fn eq(&self, other: &Node) -> bool {
        other == *self
    }
}

impl PartialEq<Node> for String {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for i64 {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for i32 {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for bool {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}
