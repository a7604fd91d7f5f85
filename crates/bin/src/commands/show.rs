//! Print the whole configuration.

use dotconf::{Configuration, Node, node::NodeError};

use super::CommandResult;
use crate::cli::FileConfig;
use crate::output::{self, OutputFormat};

/// Run the show command
pub fn run(file_config: &FileConfig, format: OutputFormat) -> CommandResult {
    let config = Configuration::load(&file_config.file)?;
    println!("{}", render(config.content(), file_config.indent, format)?);
    Ok(())
}

/// Both formats honour the configured indent; human output prints a text
/// root without quotes.
fn render(content: &Node, indent: usize, format: OutputFormat) -> Result<String, NodeError> {
    match format {
        OutputFormat::Human if content.is_text() => output::human(content),
        OutputFormat::Human | OutputFormat::Json => content.to_text(indent),
    }
}
