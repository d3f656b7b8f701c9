use thiserror::Error;

/// Errors raised while turning a notes document into [`crate::ParsedContent`].
///
/// A failure aborts the whole parse; no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed document at line {line}: {reason}")]
    MalformedDocument { line: usize, reason: String },

    #[error("Block '{name}' is not declared in the schema")]
    UnknownBlock { name: String },

    #[error("Block '{block}' has unknown block type '{tag}'")]
    UnknownBlockType { block: String, tag: String },

    #[error(
        "Markdown table in block '{block}' is broken: expected {expected} columns, found {found} at row\n{row}"
    )]
    TableColumnMismatch {
        block: String,
        expected: usize,
        found: usize,
        row: String,
    },

    #[error("Block '{block}' has no table header and separator rows")]
    EmptyTable { block: String },

    #[error("Block '{name}' appears more than once")]
    DuplicateBlock { name: String },

    #[error("Input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}
