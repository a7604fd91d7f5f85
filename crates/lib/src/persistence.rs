//! Blocking file helpers behind configuration load, create and save.
//!
//! These are thin wrappers over `std::fs` so that the configuration
//! lifecycle reads as a sequence of intent-level steps.

use std::{fs, io, path::Path};

/// What currently sits at a filesystem path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Nothing exists at the path
    Missing,
    /// A regular file (symlinks are followed)
    File,
    /// A directory
    Directory,
    /// Something else, such as a socket or a dangling symlink
    Other,
}

impl FileKind {
    /// Inspects `path`, following symlinks.
    pub fn probe(path: &Path) -> FileKind {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => FileKind::File,
            Ok(meta) if meta.is_dir() => FileKind::Directory,
            Ok(_) => FileKind::Other,
            Err(_) if path.symlink_metadata().is_ok() => FileKind::Other,
            Err(_) => FileKind::Missing,
        }
    }

    /// Returns true unless nothing exists at the path
    pub fn exists(&self) -> bool {
        !matches!(self, FileKind::Missing)
    }
}

/// Reads a file and joins its lines with surrounding whitespace trimmed.
///
/// This drops the indentation and line breaks of pretty-printed text.
pub fn read_compacted(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(text.lines().map(str::trim).collect())
}

/// Replaces the whole content of the file at `path` with `text`.
pub fn write_text(path: &Path, text: &str) -> io::Result<()> {
    fs::write(path, text)
}

/// Removes whatever sits at `path`; directories are removed recursively.
pub fn remove(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Creates an empty file at `path`, creating parent directories as needed.
///
/// An existing file is truncated.
pub fn create_empty_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::File::create(path).map(drop)
}
