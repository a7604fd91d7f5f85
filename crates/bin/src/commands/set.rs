//! Set the value at a dotted path and save the file.

use dotconf::{Configuration, Node};

use super::CommandResult;
use crate::cli::{FileConfig, SetArgs};

/// Run the set command
pub fn run(args: &SetArgs, file_config: &FileConfig) -> CommandResult {
    let value = if args.raw {
        Node::from(args.value.as_str())
    } else {
        Node::parse(&args.value)?
    };

    let mut config = Configuration::load(&file_config.file)?;
    config.set(args.path.as_str(), value)?;
    config.save(file_config.indent)?;

    Ok(())
}
