//! Dotted path types for addressing nodes in a configuration tree.
//!
//! The [`Path`]/[`PathBuf`] types follow the same borrowed/owned pattern as
//! `std::path::Path`/`std::path::PathBuf`.
//!
//! # Syntax
//!
//! - Segments are separated by a literal `.`
//! - The empty string is the root and has zero segments
//! - Every other string has one more segment than it has dots; empty
//!   segments (`"a..b"`) are kept and act as empty map keys
//! - A segment made only of ASCII digits is a *list-index candidate*
//!
//! There is no escaping: a map key containing `.` cannot be addressed, and
//! an all-digit map key is only treated as a key when the node it is looked
//! up in is a map. Which interpretation wins is decided by the kind of the
//! node being walked, never by the text of the segment.
//!
//! ```
//! use dotconf::path::{Path, PathBuf};
//!
//! let path = Path::new("server.ports.0");
//! let segments: Vec<&str> = path.segments().map(|s| s.as_str()).collect();
//! assert_eq!(segments, ["server", "ports", "0"]);
//! assert_eq!(path.last().and_then(|s| s.list_index()), Some(0));
//!
//! let built = PathBuf::new().push("server").push("ports").push("0");
//! assert_eq!(built.as_path(), path);
//! assert!(Path::new("").is_root());
//! ```

use std::{borrow::Borrow, convert::Infallible, fmt, ops::Deref, str::FromStr};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// One segment of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    inner: &'a str,
}

impl<'a> Segment<'a> {
    /// Wraps a segment string. The caller is responsible for it not
    /// containing the separator.
    pub fn new(inner: &'a str) -> Self {
        Self { inner }
    }

    /// Returns the segment text
    pub fn as_str(&self) -> &'a str {
        self.inner
    }

    /// Returns true if the segment matches `^[0-9]+$`
    pub fn is_index_candidate(&self) -> bool {
        !self.inner.is_empty() && self.inner.bytes().all(|b| b.is_ascii_digit())
    }

    /// Returns the list index this segment denotes, if it is a candidate.
    ///
    /// Candidates too large for `usize` saturate to `usize::MAX`, which no
    /// list can contain.
    pub fn list_index(&self) -> Option<usize> {
        if self.is_index_candidate() {
            Some(self.inner.parse().unwrap_or(usize::MAX))
        } else {
            None
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner)
    }
}

/// A borrowed dotted path.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

/// An owned dotted path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

impl Path {
    /// Views a string as a path. Every string is a valid path.
    pub fn new(s: &str) -> &Path {
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns the root path
    pub fn root() -> &'static Path {
        Path::new("")
    }

    /// Returns an iterator over the segments in order
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = Segment<'_>> {
        let mut split = self.inner.split(SEPARATOR);
        if self.inner.is_empty() {
            // "".split yields one empty piece; the root has none
            split.next();
        }
        split.map(Segment::new)
    }

    /// Returns the number of segments
    pub fn len(&self) -> usize {
        if self.inner.is_empty() {
            0
        } else {
            self.inner.matches(SEPARATOR).count() + 1
        }
    }

    /// Returns `true` if this is the root path
    pub fn is_root(&self) -> bool {
        self.inner.is_empty()
    }

    /// Alias of [`Path::is_root`]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Returns the path without its last segment, or `None` for the root
    pub fn parent(&self) -> Option<&Path> {
        if self.inner.is_empty() {
            return None;
        }
        Some(match self.inner.rfind(SEPARATOR) {
            Some(last_dot) => Path::new(&self.inner[..last_dot]),
            None => Path::root(),
        })
    }

    /// Returns the last segment, or `None` for the root
    pub fn last(&self) -> Option<Segment<'_>> {
        self.segments().next_back()
    }

    /// Returns the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl PathBuf {
    /// Creates a new root path
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Appends a path fragment after a separator.
    ///
    /// The fragment is taken verbatim, so a fragment containing `.` adds
    /// more than one segment. Pushing onto the root does not add a leading
    /// separator.
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        if !self.inner.is_empty() {
            self.inner.push(SEPARATOR);
        }
        self.inner.push_str(fragment.as_ref());
        self
    }

    /// Joins this path with another path; joining the root is a no-op
    pub fn join(self, other: impl AsRef<Path>) -> Self {
        let other = other.as_ref();
        if other.is_root() {
            self
        } else {
            self.push(other.as_str())
        }
    }

    /// Returns the borrowed form of this path
    pub fn as_path(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.as_path()
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.as_path()
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq<Path> for PathBuf {
    fn eq(&self, other: &Path) -> bool {
        self.as_path() == other
    }
}

impl PartialEq<&Path> for PathBuf {
    fn eq(&self, other: &&Path) -> bool {
        self.as_path() == *other
    }
}

impl FromStr for PathBuf {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PathBuf::from(s))
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self {
            inner: s.to_string(),
        }
    }
}

impl From<String> for PathBuf {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(root)")
        } else {
            f.write_str(&self.inner)
        }
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_path(), f)
    }
}
