//!
//! dotconf: dotted-path access to a file-backed configuration tree.
//!
//! Values are addressed with paths such as `"server.ports.0"` instead of
//! walking nested maps and lists by hand.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: A dynamically typed tree of nulls, scalars, ordered lists and ordered string-keyed maps, stored as JSON text.
//! * **Paths (`path::Path`)**: Dot-separated segments. A digits-only segment indexes a list when the node it is applied to is a list, and is a plain key otherwise.
//! * **Resolver (`resolver`)**: Reads never fail and yield `Null` for anything that cannot be followed. Writes create missing map keys and replace incompatible nodes with maps, but never grow lists.
//! * **Configuration (`configuration::Configuration`)**: Owns one tree and the file it is loaded from and saved to.
//!
//! ```
//! use dotconf::{Configuration, Node};
//!
//! let mut config = Configuration::in_memory("app.json");
//! config.set("server.port", 8080)?;
//! config.set("server.hosts", vec![Node::from("a"), Node::from("b")])?;
//! config.set("server.hosts.1", "c")?;
//!
//! assert_eq!(config.get("server.port"), &Node::Int(8080));
//! assert_eq!(config.get("server.hosts.1"), "c");
//! assert!(config.get("server.missing.deeper").is_null());
//! # Ok::<(), dotconf::Error>(())
//! ```

pub mod configuration;
pub mod node;
pub mod path;
pub mod persistence;
pub mod resolver;

/// Re-export the main entry points for easier access.
pub use configuration::Configuration;
pub use node::Node;
pub use path::{Path, PathBuf};

/// Result type used throughout the dotconf library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotconf library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured tree and codec errors from the node module
    #[error(transparent)]
    Node(node::NodeError),

    /// Structured lifecycle and mutation errors from the configuration module
    #[error(transparent)]
    Config(configuration::ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Node(_) => "node",
            Error::Config(_) => "configuration",
        }
    }

    /// Check if this error means stored text could not be parsed.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_parse_error(),
            _ => false,
        }
    }

    /// Check if this error describes the state of the backing file.
    pub fn is_state_error(&self) -> bool {
        match self {
            Error::Config(config_err) => config_err.is_state_error(),
            _ => false,
        }
    }

    /// Check if this error indicates the backing file was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Config(config_err) => config_err.is_not_found(),
            Error::Io(io_err) => io_err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error is a list bounds violation.
    pub fn is_bounds_error(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_bounds_error(),
            Error::Config(config_err) => config_err.is_bounds_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a logic defect rather than bad input.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Config(config_err) => config_err.is_fatal(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
