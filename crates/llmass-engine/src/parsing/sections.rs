//! Segmentation of a document into top-level blocks.
//!
//! Lines are classified one at a time and pushed into a [`SectionSplitter`],
//! which opens a block on every level-2 heading and buffers the lines that
//! follow it. Titles (level-1 headings) and blank lines never reach a buffer.

use serde::Serialize;

use crate::error::ParseError;

use super::heading::{
    BLOCK_LEVEL, LineClass, NameStyle, NotesLineClassifier, TITLE_LEVEL, heading_text,
    normalize_heading,
};

/// What name a block carries once split out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Lower-cased, whitespace collapsed to `_`; used for schema lookup.
    Normalized,
    /// Heading text as written, markers and surrounding whitespace removed.
    Raw,
}

/// Handling of content lines that appear before the first block heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preamble {
    Reject,
    Skip,
}

/// A block's header and the non-blank lines that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub header: String,
    /// Line number of the opening heading.
    pub line: usize,
    pub lines: Vec<String>,
}

/// A schema-free block extracted for free-text search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub header: String,
    pub content: String,
}

impl From<RawBlock> for Section {
    fn from(block: RawBlock) -> Self {
        Self {
            header: block.header,
            content: block.lines.join("\n"),
        }
    }
}

pub struct SectionSplitter {
    header_style: HeaderStyle,
    preamble: Preamble,
    current: Option<RawBlock>,
    out: Vec<RawBlock>,
}

impl SectionSplitter {
    pub fn new(header_style: HeaderStyle, preamble: Preamble) -> Self {
        Self {
            header_style,
            preamble,
            current: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) -> Result<(), ParseError> {
        if c.is_blank {
            return Ok(());
        }

        match c.heading_level {
            Some(TITLE_LEVEL) => Ok(()),
            Some(BLOCK_LEVEL) => {
                self.open_block(c);
                Ok(())
            }
            _ => self.extend_block(c),
        }
    }

    pub fn finish(mut self) -> Vec<RawBlock> {
        // EOF flush
        self.flush_block();
        self.out
    }

    fn open_block(&mut self, c: &LineClass) {
        self.flush_block();
        let header = match self.header_style {
            HeaderStyle::Normalized => normalize_heading(c.text, NameStyle::Identifier),
            HeaderStyle::Raw => heading_text(c.text).to_string(),
        };
        self.current = Some(RawBlock {
            header,
            line: c.number,
            lines: vec![],
        });
    }

    fn extend_block(&mut self, c: &LineClass) -> Result<(), ParseError> {
        match (&mut self.current, self.preamble) {
            (Some(block), _) => {
                block.lines.push(c.text.to_string());
                Ok(())
            }
            (None, Preamble::Skip) => Ok(()),
            (None, Preamble::Reject) => Err(ParseError::MalformedDocument {
                line: c.number,
                reason: "content appears before the first level-2 heading".to_string(),
            }),
        }
    }

    fn flush_block(&mut self) {
        if let Some(block) = self.current.take() {
            self.out.push(block);
        }
    }
}

/// Split `lines` into blocks on level-2 headings.
pub fn split_sections<I, S>(
    lines: I,
    header_style: HeaderStyle,
    preamble: Preamble,
) -> Result<Vec<RawBlock>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    split_sections_bounded(lines, header_style, preamble, None)
}

/// Like [`split_sections`], failing with [`ParseError::InputTooLarge`] once the
/// lines pulled so far exceed `max_input_bytes`. Each line counts one extra
/// byte for its terminator.
pub fn split_sections_bounded<I, S>(
    lines: I,
    header_style: HeaderStyle,
    preamble: Preamble,
    max_input_bytes: Option<usize>,
) -> Result<Vec<RawBlock>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classifier = NotesLineClassifier;
    let mut splitter = SectionSplitter::new(header_style, preamble);
    let mut size = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        size = size.saturating_add(line.len() + 1);
        if let Some(limit) = max_input_bytes
            && size > limit
        {
            return Err(ParseError::InputTooLarge { size, limit });
        }

        let lc = classifier.classify(idx + 1, line);
        splitter.push(&lc)?;
    }

    Ok(splitter.finish())
}
