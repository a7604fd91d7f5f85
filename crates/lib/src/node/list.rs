//! Ordered list type for configuration trees.

use super::{Node, NodeError};

/// Ordered, 0-indexed sequence of [`Node`]s.
///
/// Path writes never change the length of a list: an index must already
/// exist to be read or updated through a path. Lists are grown explicitly
/// with [`List::push`] when building a tree by hand.
///
/// # Examples
///
/// ```
/// use dotconf::node::{List, Node};
///
/// let mut list = List::new();
/// list.push(1);
/// list.push("two");
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(1), Some(&Node::from("two")));
/// assert!(list.update(5, Node::Null).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Node>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if `index` addresses an existing element
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Gets the element at `index`
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    /// Gets a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.items.get_mut(index)
    }

    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Errors
    /// Returns [`NodeError::IndexOutOfBounds`] if `index` is not below
    /// [`List::len`]. The list is left unchanged.
    pub fn update(&mut self, index: usize, value: impl Into<Node>) -> Result<Node, NodeError> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value.into())),
            None => Err(NodeError::IndexOutOfBounds { index, len }),
        }
    }

    /// Appends an element and returns its index
    pub fn push(&mut self, value: impl Into<Node>) -> usize {
        self.items.push(value.into());
        self.items.len() - 1
    }

    /// Returns an iterator over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements in order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.items.iter_mut()
    }

    /// Returns the elements as a slice
    pub fn as_slice(&self) -> &[Node] {
        &self.items
    }
}

impl<T: Into<Node>> FromIterator<T> for List {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<Node>> for List {
    fn from(items: Vec<Node>) -> Self {
        Self { items }
    }
}

impl IntoIterator for List {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
