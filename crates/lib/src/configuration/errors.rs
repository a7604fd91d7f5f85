//! Error types for configuration operations.
//!
//! This module covers the backing-file state checks made by load and save,
//! bounds violations of direct list writes, and the internal consistency
//! checks of the path mutation walk.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, mutating or saving a configuration.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing file does not exist.
    #[error("Configuration file does not exist: {}", path.display())]
    FileMissing {
        /// The expected location of the file
        path: PathBuf,
    },

    /// The backing path exists but is a directory.
    #[error("Configuration path is a directory, not a file: {}", path.display())]
    NotAFile {
        /// The offending path
        path: PathBuf,
    },

    /// The backing path exists but is neither a regular file nor a directory.
    #[error("Configuration path is in an unexpected state: {}", path.display())]
    UnexpectedFileState {
        /// The offending path
        path: PathBuf,
    },

    /// The last segment of a write addressed a list index that does not exist.
    #[error("Cannot set '{path}': list index {index} out of bounds (length {len})")]
    IndexOutOfBounds {
        /// The dotted path that was written
        path: String,
        /// The requested index
        index: usize,
        /// The length of the list
        len: usize,
    },

    /// The path mutation walk reached a state it should never reach.
    ///
    /// This indicates a logic defect rather than bad input.
    #[error("Internal invariant violated while setting '{path}': {reason}")]
    InvariantViolated {
        /// The dotted path that was written
        path: String,
        /// Description of the broken invariant
        reason: String,
    },
}

impl ConfigError {
    /// Check if this error describes the state of the backing file
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            ConfigError::FileMissing { .. }
                | ConfigError::NotAFile { .. }
                | ConfigError::UnexpectedFileState { .. }
        )
    }

    /// Check if this error indicates the backing file was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::FileMissing { .. })
    }

    /// Check if this error is a list bounds violation
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, ConfigError::IndexOutOfBounds { .. })
    }

    /// Check if this error indicates a logic defect
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConfigError::InvariantViolated { .. })
    }

    /// Get the dotted path if this error came from a path write
    pub fn path(&self) -> Option<&str> {
        match self {
            ConfigError::IndexOutOfBounds { path, .. }
            | ConfigError::InvariantViolated { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the file path if this error describes the backing file
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            ConfigError::FileMissing { path }
            | ConfigError::NotAFile { path }
            | ConfigError::UnexpectedFileState { path } => Some(path),
            _ => None,
        }
    }
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}
