//! Text form of configuration trees.
//!
//! Trees are persisted as JSON. [`Node`] implements `serde::Serialize` and
//! `serde::Deserialize` directly, so any serde format can carry a tree; the
//! helpers here pin down the text form used for configuration files:
//!
//! - [`Node::to_text`] renders compact text for indent `0` and pretty text
//!   with `indent` spaces per level otherwise
//! - [`Node::parse`] reads text back, keeping map entries in document order
//!
//! Integers that fit in an `i64` come back as [`Node::Int`]; every other
//! number comes back as [`Node::Float`]. JSON has no encoding for NaN or the
//! infinities, so non-finite floats are written as `null`.
//!
//! ```
//! # use dotconf::node::{Map, Node};
//! let node = Node::from(Map::single("port", 8080));
//!
//! assert_eq!(node.to_text(0)?, r#"{"port":8080}"#);
//! assert_eq!(node.to_text(2)?, "{\n  \"port\": 8080\n}");
//! assert_eq!(Node::parse(r#"{"port":8080}"#)?, node);
//! # Ok::<(), dotconf::node::NodeError>(())
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, SeqAccess, Visitor},
};
use serde_json::ser::PrettyFormatter;

use super::{List, Map, Node, NodeError};

impl Node {
    /// Renders this node as text.
    ///
    /// An `indent` of `0` produces compact single-line text; any other value
    /// pretty-prints with that many spaces per nesting level.
    pub fn to_text(&self, indent: usize) -> Result<String, NodeError> {
        let mut buf = Vec::with_capacity(128);
        let written = if indent == 0 {
            serde_json::to_writer(&mut buf, self)
        } else {
            let pad = vec![b' '; indent];
            let formatter = PrettyFormatter::with_indent(&pad);
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            self.serialize(&mut ser)
        };
        written.map_err(|e| NodeError::SerializationFailed {
            reason: e.to_string(),
        })?;

        String::from_utf8(buf).map_err(|e| NodeError::SerializationFailed {
            reason: e.to_string(),
        })
    }

    /// Parses text into a node.
    ///
    /// # Errors
    /// Returns [`NodeError::ParseFailed`] if `text` is not valid tree data.
    pub fn parse(text: &str) -> Result<Node, NodeError> {
        serde_json::from_str(text).map_err(|e| NodeError::ParseFailed {
            reason: e.to_string(),
        })
    }
}

impl FromStr for Node {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Node::parse(s)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Int(n) => serializer.serialize_i64(*n),
            Node::Float(n) if n.is_finite() => serializer.serialize_f64(*n),
            Node::Float(_) => serializer.serialize_unit(),
            Node::Text(s) => serializer.serialize_str(s),
            Node::List(list) => list.serialize(serializer),
            Node::Map(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self)
    }
}

impl Serialize for Map {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Node>::deserialize(deserializer).map(List::from)
    }
}

impl<'de> Deserialize<'de> for Map {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IndexMap::<String, Node>::deserialize(deserializer)
            .map(|entries| entries.into_iter().collect())
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, a boolean, a number, a string, a list or a map")
    }

    fn visit_unit<E>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        Node::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Node, E> {
        Ok(Node::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Node, E> {
        Ok(i64::try_from(v).map_or(Node::Float(v as f64), Node::Int))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Node, E> {
        Ok(Node::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Node, E> {
        Ok(Node::Text(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Node, E> {
        Ok(Node::Text(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Node>()? {
            items.push(item);
        }
        Ok(Node::List(List::from(items)))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Map::new();
        while let Some((key, value)) = access.next_entry::<String, Node>()? {
            map.insert(key, value);
        }
        Ok(Node::Map(map))
    }
}
