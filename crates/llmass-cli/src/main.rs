mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use commands::ParseRequest;
use llmass_config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = match &cli.config {
        Some(path) => Some(
            Config::load_from_path(path)?
                .with_context(|| format!("config file {} not found", path.display()))?,
        ),
        None => Config::load()?,
    };
    if config.is_none() {
        log::debug!("Running without a config file");
    }

    let output = match cli.command {
        Commands::Parse {
            file,
            document,
            schema,
            reject_duplicates,
        } => commands::run_parse(
            config.as_ref(),
            ParseRequest {
                file,
                document,
                schema,
                reject_duplicates,
            },
        )?,
        Commands::Sections { file } => commands::run_sections(config.as_ref(), &file)?,
        Commands::List { dir } => commands::run_list(config.as_ref(), dir)?,
    };

    println!("{output}");
    Ok(())
}
