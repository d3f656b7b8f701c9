use anyhow::{Context, Result, bail};
use llmass_config::Config;
use llmass_engine::{
    DuplicateBlocks, MdParser, Schema, extract_sections_for_search_with_limit, io,
};
use std::path::{Path, PathBuf};

/// Arguments of the `parse` command.
#[derive(Debug, Default)]
pub struct ParseRequest {
    pub file: Option<PathBuf>,
    pub document: Option<String>,
    pub schema: Vec<(String, String)>,
    pub reject_duplicates: bool,
}

/// Parse a document and render the result as pretty JSON.
pub fn run_parse(config: Option<&Config>, request: ParseRequest) -> Result<String> {
    let (path, schema) = resolve_parse_target(config, &request)?;

    let mut options = config.map(Config::parse_options).unwrap_or_default();
    if request.reject_duplicates {
        options.duplicate_blocks = DuplicateBlocks::Reject;
    }

    log::info!("Parsing {} ({} declared block(s))", path.display(), schema.len());
    let text = io::read_path(&path).with_context(|| format!("reading {}", path.display()))?;

    let parsed = MdParser::with_options(schema, options)
        .parse(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    log::info!("Parsed {} block(s)", parsed.len());

    Ok(serde_json::to_string_pretty(&parsed)?)
}

fn resolve_parse_target(
    config: Option<&Config>,
    request: &ParseRequest,
) -> Result<(PathBuf, Schema)> {
    if !request.schema.is_empty() {
        let Some(file) = &request.file else {
            bail!("a FILE is required when the schema is given with --schema");
        };
        log::debug!("Using schema from command line");
        let schema = request.schema.iter().cloned().collect();
        return Ok((file.clone(), schema));
    }

    let Some(name) = &request.document else {
        bail!("no schema given: pass --document NAME or --schema NAME=TYPE");
    };
    let config = config.context("--document needs a config file")?;
    let document = config.document(name)?;
    log::debug!("Using schema of configured document '{name}'");

    let path = match &request.file {
        Some(file) => file.clone(),
        None => config.document_path(document),
    };
    Ok((path, document.schema()))
}

/// Extract schema-free sections and render them as pretty JSON.
pub fn run_sections(config: Option<&Config>, file: &Path) -> Result<String> {
    let limit = config.and_then(|c| c.max_input_bytes);
    let text = io::read_path(file).with_context(|| format!("reading {}", file.display()))?;

    let sections = extract_sections_for_search_with_limit(&text, limit)
        .with_context(|| format!("extracting sections from {}", file.display()))?;
    log::info!("Extracted {} section(s)", sections.len());

    Ok(serde_json::to_string_pretty(&sections)?)
}

/// Numbered listing of the notes in a directory.
pub fn run_list(config: Option<&Config>, dir: Option<PathBuf>) -> Result<String> {
    let dir = match (dir, config) {
        (Some(dir), _) => dir,
        (None, Some(config)) => config.notes_path.clone(),
        (None, None) => bail!("no directory given and no config file found"),
    };
    let excluded = config.map(|c| c.excluded_files.as_slice()).unwrap_or_default();

    let files = io::list_markdown_files(&dir, excluded)
        .with_context(|| format!("listing {}", dir.display()))?;

    let lines: Vec<String> = files
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{}  {} ({})", i + 1, f.display_name(), f.file_name()))
        .collect();
    Ok(lines.join("\n"))
}
