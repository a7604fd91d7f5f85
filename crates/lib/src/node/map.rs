//! Ordered string-keyed map type for configuration trees.

use indexmap::IndexMap;

use super::{NULL, Node};

/// Ordered mapping from string keys to [`Node`]s.
///
/// Keys are unique and keep their insertion order; overwriting an existing
/// key keeps its original position. A lookup of a missing key yields
/// [`Node::Null`] and never inserts.
///
/// # Examples
///
/// ```
/// use dotconf::node::{Map, Node};
///
/// let mut map = Map::new();
/// map.insert("host", "localhost");
/// map.insert("port", 8080);
///
/// assert_eq!(map.get("port"), &Node::Int(8080));
/// assert!(map.get("missing").is_null());
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["host", "port"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: IndexMap<String, Node>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates a map holding exactly one entry
    pub fn single(key: impl Into<String>, value: impl Into<Node>) -> Self {
        let mut map = Self::new();
        map.insert(key, value);
        map
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map contains `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Gets the value stored under `key`, or [`Node::Null`] if absent
    pub fn get(&self, key: &str) -> &Node {
        self.entries.get(key).unwrap_or(&NULL)
    }

    /// Gets a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    /// Inserts or overwrites `key`, returning the previous value if present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Option<Node> {
        self.entries.insert(key.into(), value.into())
    }

    /// Inserts or overwrites `key` and returns a mutable reference to the stored value
    pub fn insert_mut(&mut self, key: impl Into<String>, value: impl Into<Node>) -> &mut Node {
        let slot = self.entries.entry(key.into()).or_insert(Node::Null);
        *slot = value.into();
        slot
    }

    /// Removes `key`, preserving the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.entries.shift_remove(key)
    }

    /// Returns an iterator over the entries in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns an iterator over the values in insertion order
    pub fn values(&self) -> indexmap::map::Values<'_, String, Node> {
        self.entries.values()
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
