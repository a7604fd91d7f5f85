//! Create the configuration file.

use dotconf::Configuration;

use super::CommandResult;
use crate::cli::{CreateArgs, FileConfig};

/// Run the create command
pub fn run(args: &CreateArgs, file_config: &FileConfig) -> CommandResult {
    Configuration::create(&file_config.file, args.force)?;
    Ok(())
}
