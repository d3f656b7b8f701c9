use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "llmass", version, about = "Parse structured markdown notes")]
pub struct Cli {
    /// Config file (default: ~/.config/llmass/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a document into its typed blocks and print them as JSON
    Parse {
        /// Markdown file (default: the configured path of --document)
        file: Option<PathBuf>,

        /// Use the schema of this configured document
        #[arg(short, long)]
        document: Option<String>,

        /// Declare a block inline, e.g. `--schema journal=dated_notes`
        #[arg(short, long = "schema", value_name = "NAME=TYPE", value_parser = parse_schema_entry)]
        schema: Vec<(String, String)>,

        /// Fail when a block heading occurs twice
        #[arg(long)]
        reject_duplicates: bool,
    },
    /// Print the level-2 sections of a document as JSON, without a schema
    Sections {
        file: PathBuf,
    },
    /// List the notes in a directory
    List {
        /// Notes directory (default: notes_path from config)
        dir: Option<PathBuf>,
    },
}

/// Parse a `name=type` schema entry.
pub fn parse_schema_entry(s: &str) -> Result<(String, String), String> {
    let (name, tag) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=TYPE, got '{s}'"))?;
    let (name, tag) = (name.trim(), tag.trim());
    if name.is_empty() || tag.is_empty() {
        return Err(format!("expected NAME=TYPE, got '{s}'"));
    }
    Ok((name.to_string(), tag.to_string()))
}
