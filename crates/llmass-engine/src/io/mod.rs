use crate::models::MarkdownFile;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(notes_root))
}

/// Read a markdown file from an absolute or working-directory relative path
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// List the markdown notes directly inside `notes_root`, sorted by file name.
///
/// Subdirectories are not descended into. Files whose name appears in
/// `excluded` are left out.
pub fn list_markdown_files(
    notes_root: &Path,
    excluded: &[String],
) -> Result<Vec<MarkdownFile>, IoError> {
    validate_notes_dir(notes_root)?;

    let mut names = Vec::new();
    for entry in fs::read_dir(notes_root).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == "md"
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
            && !excluded.iter().any(|e| e == name)
        {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names
        .iter()
        .map(|name| MarkdownFile::from_relative_str(name))
        .collect())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
