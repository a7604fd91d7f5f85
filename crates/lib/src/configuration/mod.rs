//! File-backed configuration trees.
//!
//! A [`Configuration`] owns one [`Node`] tree and the location of the file it
//! is loaded from and saved to. Reads and writes go through dotted paths:
//!
//! ```
//! use dotconf::{Configuration, Node};
//!
//! let dir = tempfile::tempdir()?;
//! let file = dir.path().join("app.json");
//!
//! Configuration::create(&file, false)?;
//! let mut config = Configuration::load(&file)?;
//! assert!(config.content().is_null());
//!
//! config.set("database.url", "postgres://localhost")?;
//! config.set("database.pool", 8)?;
//! config.save(2)?;
//!
//! let reloaded = Configuration::load(&file)?;
//! assert_eq!(reloaded.get("database.pool"), &Node::Int(8));
//! assert_eq!(reloaded.get_as::<&str>("database.url"), Some("postgres://localhost"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The tree lives in memory between [`Configuration::load`] and
//! [`Configuration::save`]; nothing is written back implicitly.

use std::path::{Path as FsPath, PathBuf as FsPathBuf};

use tracing::{debug, info, warn};

pub mod errors;

pub use errors::ConfigError;

use crate::{
    Result,
    node::Node,
    path::Path,
    persistence::{self, FileKind},
    resolver::{self, Assignment},
};

/// Indent width used for saved files unless the caller picks another.
pub const DEFAULT_INDENT: usize = 4;

/// A configuration tree bound to a backing file.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    file: FsPathBuf,
    content: Node,
}

impl Configuration {
    /// Loads the tree stored in `file`.
    ///
    /// The file must already exist as a regular file. Its lines are trimmed
    /// and joined before parsing.
    ///
    /// # Errors
    /// - [`ConfigError::FileMissing`] if nothing exists at `file`
    /// - [`ConfigError::NotAFile`] if `file` is a directory
    /// - [`ConfigError::UnexpectedFileState`] for any other kind of entry
    /// - [`NodeError::ParseFailed`](crate::node::NodeError::ParseFailed) if the
    ///   text is not valid tree data
    pub fn load(file: impl AsRef<FsPath>) -> Result<Self> {
        let file = file.as_ref();
        ensure_regular_file(file)?;

        let text = persistence::read_compacted(file)?;
        let content = Node::parse(&text)?;
        info!(file = %file.display(), kind = content.type_name(), "Loaded configuration");

        Ok(Self {
            file: file.to_path_buf(),
            content,
        })
    }

    /// Ensures a regular file exists at `file` holding an empty (`null`) tree.
    ///
    /// Without `force` any existing entry is left alone. With `force` an
    /// existing regular file is still left alone, while any other entry (such
    /// as a directory) is removed and replaced.
    pub fn create(file: impl AsRef<FsPath>, force: bool) -> Result<()> {
        let file = file.as_ref();
        let kind = FileKind::probe(file);
        if kind.exists() {
            if kind == FileKind::File || !force {
                debug!(file = %file.display(), ?kind, "Configuration file already present");
                return Ok(());
            }
            warn!(file = %file.display(), ?kind, "Removing existing entry to create configuration file");
            persistence::remove(file)?;
        }

        persistence::create_empty_file(file)?;
        persistence::write_text(file, &Node::Null.to_text(0)?)?;
        info!(file = %file.display(), "Created configuration file");
        Ok(())
    }

    /// Creates `file` if nothing exists there, then loads it.
    pub fn open(file: impl AsRef<FsPath>) -> Result<Self> {
        Self::create(&file, false)?;
        Self::load(file)
    }

    /// Creates a configuration with a `null` root bound to `file`.
    ///
    /// The filesystem is not touched until [`Configuration::save`].
    pub fn in_memory(file: impl Into<FsPathBuf>) -> Self {
        Self {
            file: file.into(),
            content: Node::Null,
        }
    }

    /// The backing file.
    pub fn file(&self) -> &FsPath {
        &self.file
    }

    /// Returns the node at `path`, or [`Node::Null`] if there is none.
    ///
    /// The empty path returns the root. Reads never modify the tree.
    pub fn get(&self, path: impl AsRef<Path>) -> &Node {
        resolver::resolve(&self.content, path.as_ref())
    }

    /// Returns the node at `path` converted to `T`.
    ///
    /// Returns `None` if the path is missing or holds a different kind of node.
    ///
    /// ```
    /// use dotconf::Configuration;
    ///
    /// let mut config = Configuration::in_memory("app.json");
    /// config.set("debug", true)?;
    ///
    /// assert_eq!(config.get_as::<bool>("debug"), Some(true));
    /// assert_eq!(config.get_as::<i64>("debug"), None);
    /// # Ok::<(), dotconf::Error>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Node>,
    {
        T::try_from(self.get(path)).ok()
    }

    /// Writes `value` at `path`, creating map keys and replacing incompatible
    /// nodes along the way.
    ///
    /// List slots are never created. A path that passes through a list
    /// index that does not exist (any segment but the last) leaves the tree
    /// unchanged and still returns `Ok`.
    ///
    /// # Errors
    /// - [`ConfigError::IndexOutOfBounds`] if the last segment indexes past
    ///   the end of a list
    /// - [`ConfigError::InvariantViolated`] on an internal logic defect
    pub fn set(&mut self, path: impl AsRef<Path>, value: impl Into<Node>) -> Result<()> {
        let path = path.as_ref();
        if let Assignment::Skipped = resolver::assign(&mut self.content, path, value.into())? {
            debug!(file = %self.file.display(), path = %path, "Write declined");
        }
        Ok(())
    }

    /// The root of the tree.
    pub fn content(&self) -> &Node {
        &self.content
    }

    /// Replaces the whole tree.
    pub fn set_content(&mut self, content: impl Into<Node>) {
        self.content = content.into();
    }

    /// Consumes the configuration and returns its tree.
    pub fn into_content(self) -> Node {
        self.content
    }

    /// Writes the tree to the backing file.
    ///
    /// `indent` is the number of spaces per nesting level; 0 writes compact
    /// text on a single line. The in-memory tree is not changed.
    ///
    /// # Errors
    /// Returns a state error unless the backing file currently exists as a
    /// regular file; see [`Configuration::create`].
    pub fn save(&self, indent: usize) -> Result<()> {
        ensure_regular_file(&self.file)?;
        let text = self.content.to_text(indent)?;
        persistence::write_text(&self.file, &text)?;
        info!(file = %self.file.display(), indent, "Saved configuration");
        Ok(())
    }
}

fn ensure_regular_file(file: &FsPath) -> std::result::Result<(), ConfigError> {
    let path = file.to_path_buf();
    match FileKind::probe(file) {
        FileKind::File => Ok(()),
        FileKind::Missing => Err(ConfigError::FileMissing { path }),
        FileKind::Directory => Err(ConfigError::NotAFile { path }),
        FileKind::Other => Err(ConfigError::UnexpectedFileState { path }),
    }
}
