//! CLI argument definitions for the dotconf binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotconf::configuration::DEFAULT_INDENT;

use crate::output::OutputFormat;

/// Read and write values in a JSON configuration file by dotted path
#[derive(Parser, Debug)]
#[command(name = "dotconf")]
#[command(about = "dotconf: dotted-path access to configuration files")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub file_config: FileConfig,

    /// Output format
    #[arg(long, global = true, default_value = "human", env = "DOTCONF_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Set the value at a path and save the file
    Set(SetArgs),
    /// Create the configuration file holding an empty tree
    Create(CreateArgs),
    /// Print the whole configuration
    Show,
    /// List every leaf path with its value
    Paths,
}

/// Shared backing-file options, flattened into the top-level command.
#[derive(clap::Args, Debug, Clone)]
pub struct FileConfig {
    /// Configuration file to operate on
    #[arg(
        short,
        long,
        global = true,
        default_value = "config.json",
        env = "DOTCONF_FILE"
    )]
    pub file: PathBuf,

    /// Spaces per nesting level when writing (0 writes compact text)
    #[arg(short, long, global = true, default_value_t = DEFAULT_INDENT, env = "DOTCONF_INDENT")]
    pub indent: usize,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dotted path; the empty string addresses the whole tree
    pub path: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Dotted path; the empty string replaces the whole tree
    pub path: String,

    /// New value as JSON text, e.g. `8080`, `true`, `"text"` or `{"a": 1}`
    pub value: String,

    /// Store the value as a plain string instead of parsing it
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the create command
#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Replace an existing directory or other non-file entry at the path
    #[arg(long)]
    pub force: bool,
}
