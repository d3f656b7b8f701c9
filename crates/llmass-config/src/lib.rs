use llmass_engine::{DuplicateBlocks, ParseOptions, Schema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No document named '{0}' in config")]
    UnknownDocument(String),
}

/// Mirrors [`DuplicateBlocks`] for the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateBlockPolicy {
    #[default]
    LastWins,
    Reject,
}

impl From<DuplicateBlockPolicy> for DuplicateBlocks {
    fn from(policy: DuplicateBlockPolicy) -> Self {
        match policy {
            DuplicateBlockPolicy::LastWins => DuplicateBlocks::LastWins,
            DuplicateBlockPolicy::Reject => DuplicateBlocks::Reject,
        }
    }
}

/// A named notes document and the block types it is expected to contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Path of the document, relative to `notes_path` unless absolute.
    pub path: PathBuf,
    /// Block name to block-type tag (`table`, `dated_notes`).
    #[serde(default)]
    pub schema: BTreeMap<String, String>,
}

impl DocumentConfig {
    pub fn schema(&self) -> Schema {
        self.schema
            .iter()
            .map(|(name, tag)| (name.as_str(), tag.as_str()))
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub notes_path: PathBuf,
    #[serde(default)]
    pub excluded_files: Vec<String>,
    #[serde(default)]
    pub duplicate_blocks: DuplicateBlockPolicy,
    #[serde(default)]
    pub max_input_bytes: Option<usize>,
    #[serde(default)]
    pub documents: BTreeMap<String, DocumentConfig>,
}

impl Config {
    pub fn new(notes_path: PathBuf) -> Self {
        Self {
            notes_path,
            excluded_files: Vec::new(),
            duplicate_blocks: DuplicateBlockPolicy::default(),
            max_input_bytes: None,
            documents: BTreeMap::new(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded config path
        config.notes_path = Self::expand_path(&config.notes_path).unwrap_or(config.notes_path);

        log::debug!(
            "Loaded config from {} with {} document(s)",
            config_path.display(),
            config.documents.len()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/llmass");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn document(&self, name: &str) -> Result<&DocumentConfig, ConfigError> {
        self.documents
            .get(name)
            .ok_or_else(|| ConfigError::UnknownDocument(name.to_string()))
    }

    /// Absolute location of a configured document.
    pub fn document_path(&self, document: &DocumentConfig) -> PathBuf {
        let path = Self::expand_path(&document.path).unwrap_or_else(|| document.path.clone());
        if path.is_absolute() {
            path
        } else {
            self.notes_path.join(path)
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            duplicate_blocks: self.duplicate_blocks.into(),
            max_input_bytes: self.max_input_bytes,
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
