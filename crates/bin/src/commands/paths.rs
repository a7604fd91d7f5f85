//! List every leaf path of the configuration.

use dotconf::Configuration;

use super::CommandResult;
use crate::cli::FileConfig;
use crate::output::{self, OutputFormat, print_table};

/// Run the paths command
pub fn run(file_config: &FileConfig, format: OutputFormat) -> CommandResult {
    let config = Configuration::load(&file_config.file)?;
    let leaves = config.content().leaf_paths();

    match format {
        OutputFormat::Human => {
            if leaves.is_empty() {
                println!("No values found.");
                return Ok(());
            }

            let mut rows = Vec::with_capacity(leaves.len());
            for (path, node) in &leaves {
                rows.push(vec![path.to_string(), output::human(node)?]);
            }
            print_table(&["PATH", "VALUE"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<_> = leaves
                .iter()
                .map(|(path, node)| {
                    serde_json::json!({
                        "path": path.as_str(),
                        "value": node,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}
