//! Path resolution and auto-vivifying path mutation.
//!
//! [`resolve`] walks a tree along a [`Path`] without touching it and never
//! fails: any segment that cannot be followed yields [`Node::Null`].
//!
//! [`assign`] walks the same way but rewrites the tree so that the path
//! exists afterwards:
//!
//! - missing map keys are created
//! - list indices are never created; a list slot must already exist, and a
//!   write through a missing slot is declined without touching the tree
//! - a leaf met part-way down the path is replaced by a fresh map, as is a
//!   list met with a non-numeric segment
//!
//! The walk keeps a mutable borrow of the *grandparent* container together
//! with the segment that leads from it to the *parent*. When the parent
//! cannot be descended into, it is replaced through the grandparent in one
//! step, without walking again from the root.
//!
//! ```
//! use dotconf::node::Node;
//! use dotconf::path::Path;
//! use dotconf::resolver::{Assignment, assign, resolve};
//!
//! let mut root = Node::Null;
//! assign(&mut root, Path::new("server.port"), Node::from(8080))?;
//!
//! assert_eq!(resolve(&root, Path::new("server.port")), &Node::Int(8080));
//! assert!(resolve(&root, Path::new("server.host")).is_null());
//!
//! // A write through a list slot that does not exist is declined
//! let mut list = Node::from(vec![Node::Null]);
//! let outcome = assign(&mut list, Path::new("3.name"), Node::from("x"))?;
//! assert_eq!(outcome, Assignment::Skipped);
//! # Ok::<(), dotconf::configuration::ConfigError>(())
//! ```

use tracing::{debug, error};

use crate::{
    configuration::ConfigError,
    node::{Map, NULL, Node},
    path::{Path, Segment},
};

/// Outcome of a successful [`assign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// The tree now holds the value at the path.
    Applied,
    /// A segment before the last addressed a list slot that does not
    /// exist, so nothing was written.
    Skipped,
}

impl Assignment {
    /// Returns true if the tree was changed
    pub fn is_applied(&self) -> bool {
        matches!(self, Assignment::Applied)
    }
}

/// Returns the node at `path`, or [`Node::Null`] if the path cannot be followed.
///
/// Each segment is looked up according to the kind of the current node:
/// maps are indexed by key (a missing key yields `Null`), lists by an
/// in-bounds numeric segment. Anything else ends the walk with `Null`. The
/// root path returns `root` itself.
pub fn resolve<'a>(root: &'a Node, path: &Path) -> &'a Node {
    let mut current = root;
    for segment in path.segments() {
        current = match current {
            Node::Map(map) => map.get(segment.as_str()),
            Node::List(list) => match segment.list_index().and_then(|index| list.get(index)) {
                Some(child) => child,
                None => return &NULL,
            },
            _ => return &NULL,
        };
    }
    current
}

/// Writes `value` at `path`, reshaping the tree as needed.
///
/// On [`Assignment::Applied`], `resolve(root, path)` returns `value`.
///
/// - The root path replaces the whole tree.
/// - A single segment updates a list slot (the root must be a list and the
///   segment numeric), upserts a map key (the root is a map), or otherwise
///   replaces the root with a one-entry map.
/// - Longer paths descend through existing maps and in-bounds list slots,
///   creating map keys and replacing incompatible nodes with maps on the way.
///   A numeric segment before the last that indexes past the end of a list
///   returns [`Assignment::Skipped`] and leaves the tree unchanged.
///
/// # Errors
/// - [`ConfigError::IndexOutOfBounds`] if the *last* segment indexes past the
///   end of a list, whether that list is the root or deeper in the tree. The
///   tree is left unchanged.
/// - [`ConfigError::InvariantViolated`] if the walk reaches a state that the
///   algorithm rules out. This indicates a defect, not bad input.
pub fn assign(root: &mut Node, path: &Path, value: Node) -> Result<Assignment, ConfigError> {
    let segments: Vec<Segment<'_>> = path.segments().collect();
    let Some((&last, init)) = segments.split_last() else {
        debug!("Replacing configuration root");
        *root = value;
        return Ok(Assignment::Applied);
    };
    let Some((&first, middle)) = init.split_first() else {
        return assign_single(root, path, last, value);
    };

    match (first.list_index(), &mut *root) {
        (Some(index), Node::List(list)) => {
            if !list.contains_index(index) {
                debug!(
                    path = %path,
                    index,
                    len = list.len(),
                    "Skipping write through a list slot that does not exist"
                );
                return Ok(Assignment::Skipped);
            }
        }
        (_, Node::Map(_)) => {}
        (_, other) => {
            debug!(path = %path, replaced = other.type_name(), "Replacing root with a map");
            *other = Node::Map(Map::single(first.as_str(), Node::Null));
        }
    }

    let mut grandparent = root;
    let mut previous = first;

    for &key in middle {
        grandparent = match step(grandparent, previous, key) {
            Step::OutOfBounds { index, len } => {
                debug!(
                    path = %path,
                    segment = %key,
                    index,
                    len,
                    "Skipping write through a list slot that does not exist"
                );
                return Ok(Assignment::Skipped);
            }
            Step::Index(_) | Step::Key => child_mut(grandparent, previous, path)?,
            Step::Convert => {
                let container = Node::Map(Map::single(key.as_str(), Node::Null));
                replace_child(grandparent, previous, container, path)?
            }
        };
        previous = key;
    }

    match step(grandparent, previous, last) {
        Step::OutOfBounds { index, len } => {
            return Err(ConfigError::IndexOutOfBounds {
                path: path.as_str().to_string(),
                index,
                len,
            });
        }
        Step::Index(index) => {
            let slot = child_mut(grandparent, previous, path)?
                .as_list_mut()
                .and_then(|list| list.get_mut(index))
                .ok_or_else(|| invariant(path, "list slot disappeared during the walk"))?;
            *slot = value;
        }
        Step::Key => {
            child_mut(grandparent, previous, path)?
                .as_map_mut()
                .ok_or_else(|| invariant(path, "map disappeared during the walk"))?
                .insert(last.as_str(), value);
        }
        Step::Convert => {
            let container = Node::Map(Map::single(last.as_str(), value));
            replace_child(grandparent, previous, container, path)?;
        }
    }

    debug!(path = %path, "Set configuration value");
    Ok(Assignment::Applied)
}

fn assign_single(
    root: &mut Node,
    path: &Path,
    key: Segment<'_>,
    value: Node,
) -> Result<Assignment, ConfigError> {
    match (key.list_index(), root) {
        (Some(index), Node::List(list)) => {
            let len = list.len();
            list.update(index, value)
                .map_err(|_| ConfigError::IndexOutOfBounds {
                    path: path.as_str().to_string(),
                    index,
                    len,
                })?;
        }
        (_, Node::Map(map)) => {
            map.insert(key.as_str(), value);
        }
        (_, other) => {
            debug!(path = %path, replaced = other.type_name(), "Replacing root with a map");
            *other = Node::Map(Map::single(key.as_str(), value));
        }
    }
    Ok(Assignment::Applied)
}

/// How the walk continues from the parent (the child of the grandparent at
/// `previous`) with the next segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Parent is a list and the segment is an in-bounds index
    Index(usize),
    /// Parent is a list and the segment is an index past its end
    OutOfBounds { index: usize, len: usize },
    /// Parent is a map
    Key,
    /// Parent must be replaced by a map before the walk can continue
    Convert,
}

fn step(grandparent: &Node, previous: Segment<'_>, key: Segment<'_>) -> Step {
    let parent = match grandparent {
        Node::Map(map) => map.get(previous.as_str()),
        Node::List(list) => previous
            .list_index()
            .and_then(|index| list.get(index))
            .unwrap_or(&NULL),
        _ => &NULL,
    };
    match parent {
        Node::List(list) => match key.list_index() {
            Some(index) if list.contains_index(index) => Step::Index(index),
            Some(index) => Step::OutOfBounds {
                index,
                len: list.len(),
            },
            None => Step::Convert,
        },
        Node::Map(_) => Step::Key,
        _ => Step::Convert,
    }
}

/// Returns the existing container child of `grandparent` at `previous`.
fn child_mut<'a>(
    grandparent: &'a mut Node,
    previous: Segment<'_>,
    path: &Path,
) -> Result<&'a mut Node, ConfigError> {
    let child = match grandparent {
        Node::Map(map) => map.get_mut(previous.as_str()),
        Node::List(list) => previous.list_index().and_then(|index| list.get_mut(index)),
        _ => None,
    };
    child.ok_or_else(|| invariant(path, format!("no container at segment '{previous}'")))
}

/// Stores `replacement` in `grandparent` at `previous` and returns it.
fn replace_child<'a>(
    grandparent: &'a mut Node,
    previous: Segment<'_>,
    replacement: Node,
    path: &Path,
) -> Result<&'a mut Node, ConfigError> {
    match grandparent {
        Node::List(list) => {
            let slot = previous
                .list_index()
                .and_then(|index| list.get_mut(index))
                .ok_or_else(|| {
                    invariant(path, format!("list slot '{previous}' does not exist"))
                })?;
            *slot = replacement;
            Ok(slot)
        }
        Node::Map(map) => Ok(map.insert_mut(previous.as_str(), replacement)),
        other => Err(invariant(
            path,
            format!("grandparent is a {}, not a list or map", other.type_name()),
        )),
    }
}

fn invariant(path: &Path, reason: impl Into<String>) -> ConfigError {
    let reason = reason.into();
    error!(path = %path, reason = %reason, "Path mutation reached an impossible state");
    ConfigError::InvariantViolated {
        path: path.as_str().to_string(),
        reason,
    }
}
