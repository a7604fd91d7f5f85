//! Subcommand implementations.
//!
//! Each command loads the backing file itself, so commands are independent
//! processes with no shared state.

pub mod create;
pub mod get;
pub mod paths;
pub mod set;
pub mod show;

/// Error type returned by every command
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
