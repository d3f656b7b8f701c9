//! # Structured Notes Parsing
//!
//! Two-level parsing of a notes document into typed blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Section splitting** (`sections`): each line is classified on its own
//!    (`heading`), titles and blank lines are dropped, and level-2 headings
//!    open named blocks that buffer the lines below them.
//!
//! 2. **Dispatch** (`dispatch`): every block's name is looked up in the
//!    caller's [`Schema`] and its lines are handed to the sub-parser for the
//!    declared [`BlockType`] (`kinds`).
//!
//! ## Key Invariants
//!
//! - Block names are lower-cased with whitespace runs collapsed to `_`
//! - Blank lines never reach a sub-parser, including inside dated notes
//! - A failing block fails the whole parse
//! - Parsing keeps no state between calls

pub mod content;
pub mod dispatch;
pub mod heading;
pub mod kinds;
pub mod schema;
pub mod sections;

use crate::error::ParseError;

pub use content::{BlockContent, DatedNotes, OrderedMap, ParsedContent, Row};
pub use schema::{BlockType, Schema};
pub use sections::{HeaderStyle, Preamble, RawBlock, Section};

/// What to do when a block name occurs twice in one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateBlocks {
    /// The later block replaces the earlier one.
    #[default]
    LastWins,
    /// Fail with [`ParseError::DuplicateBlock`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub duplicate_blocks: DuplicateBlocks,
    /// Upper bound on the document size in bytes; `None` means unbounded.
    pub max_input_bytes: Option<usize>,
}

/// Schema-driven parser for structured notes documents.
#[derive(Debug, Clone)]
pub struct MdParser {
    schema: Schema,
    options: ParseOptions,
}

impl MdParser {
    pub fn new(schema: Schema) -> Self {
        Self::with_options(schema, ParseOptions::default())
    }

    pub fn with_options(schema: Schema, options: ParseOptions) -> Self {
        Self { schema, options }
    }

    /// Parse a whole document held in memory.
    pub fn parse(&self, text: &str) -> Result<ParsedContent, ParseError> {
        check_size(text.len(), self.options.max_input_bytes)?;
        self.parse_bounded(text.lines(), None)
    }

    /// Parse a document given as a sequence of lines.
    ///
    /// The size limit is applied while lines are pulled, counting one byte
    /// per line terminator.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<ParsedContent, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_bounded(lines, self.options.max_input_bytes)
    }

    fn parse_bounded<I, S>(
        &self,
        lines: I,
        max_input_bytes: Option<usize>,
    ) -> Result<ParsedContent, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blocks = sections::split_sections_bounded(
            lines,
            HeaderStyle::Normalized,
            Preamble::Reject,
            max_input_bytes,
        )?;

        let mut content = ParsedContent::new();
        for block in &blocks {
            if self.options.duplicate_blocks == DuplicateBlocks::Reject
                && content.contains_key(&block.header)
            {
                return Err(ParseError::DuplicateBlock {
                    name: block.header.clone(),
                });
            }
            let parsed = dispatch::dispatch(&self.schema, block)?;
            content.insert(block.header.clone(), parsed);
        }

        Ok(content)
    }
}

/// Split a document into `{header, content}` sections without a schema.
///
/// Headers are returned as written. Lines before the first level-2 heading
/// belong to no section and are skipped.
pub fn extract_sections_for_search(text: &str) -> Result<Vec<Section>, ParseError> {
    extract_sections_for_search_with_limit(text, None)
}

pub fn extract_sections_for_search_with_limit(
    text: &str,
    max_input_bytes: Option<usize>,
) -> Result<Vec<Section>, ParseError> {
    check_size(text.len(), max_input_bytes)?;
    let blocks = sections::split_sections(text.lines(), HeaderStyle::Raw, Preamble::Skip)?;
    Ok(blocks.into_iter().map(Section::from).collect())
}

fn check_size(size: usize, limit: Option<usize>) -> Result<(), ParseError> {
    match limit {
        Some(limit) if size > limit => Err(ParseError::InputTooLarge { size, limit }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests;
