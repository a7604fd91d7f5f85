use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dotconf=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Get(args) => commands::get::run(args, &cli.file_config, cli.format),
        Commands::Set(args) => commands::set::run(args, &cli.file_config),
        Commands::Create(args) => commands::create::run(args, &cli.file_config),
        Commands::Show => commands::show::run(&cli.file_config, cli.format),
        Commands::Paths => commands::paths::run(&cli.file_config, cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
