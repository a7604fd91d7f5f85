//! Print the value at a dotted path.

use dotconf::Configuration;

use super::CommandResult;
use crate::cli::{FileConfig, GetArgs};
use crate::output::{self, OutputFormat};

/// Run the get command
pub fn run(args: &GetArgs, file_config: &FileConfig, format: OutputFormat) -> CommandResult {
    let config = Configuration::load(&file_config.file)?;
    let node = config.get(args.path.as_str());

    match format {
        OutputFormat::Human => println!("{}", output::human(node)?),
        OutputFormat::Json => println!("{}", node.to_text(file_config.indent)?),
    }

    Ok(())
}
