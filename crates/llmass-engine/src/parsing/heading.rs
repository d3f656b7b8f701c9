use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Level-1 heading: the document title.
pub const TITLE_LEVEL: usize = 1;
/// Level-2 heading: opens a top-level block.
pub const BLOCK_LEVEL: usize = 2;
/// Level-3 heading: opens a dated entry inside a dated-notes block.
pub const ENTRY_LEVEL: usize = 3;

/// How a heading's text is turned into a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// Stripped and lower-cased; internal whitespace kept (dated-note labels).
    Label,
    /// Like `Label`, with whitespace runs collapsed to `_` (block names).
    Identifier,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// 1-based line number in the document.
    pub number: usize,
    /// Line text without its terminator.
    pub text: &'a str,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Number of leading `#` characters, if the line is a heading.
    pub heading_level: Option<usize>,
}

/// Classifies document lines for the section splitter.
pub struct NotesLineClassifier;

impl NotesLineClassifier {
    pub fn classify<'a>(&self, number: usize, raw: &'a str) -> LineClass<'a> {
        let text = raw.trim_end_matches(['\r', '\n']);
        let is_blank = text.trim().is_empty();
        LineClass {
            number,
            text,
            is_blank,
            heading_level: if is_blank { None } else { heading_level(text) },
        }
    }
}

/// Heading depth of `line`: the count of `#` characters it starts with once
/// leading whitespace is stripped. The run always ends at a non-`#` character
/// or the end of the line, so a level-N heading never matches level N-1.
pub fn heading_level(line: &str) -> Option<usize> {
    let hashes = line
        .trim_start()
        .chars()
        .take_while(|&c| c == '#')
        .count();
    (hashes > 0).then_some(hashes)
}

/// Whether `line` is a heading of exactly `level` hashes.
pub fn is_heading(line: &str, level: usize) -> bool {
    heading_level(line) == Some(level)
}

/// Normalize a heading line into a name.
pub fn normalize_heading(raw: &str, style: NameStyle) -> String {
    let name = raw
        .trim_matches(|c: char| c == '#' || c.is_whitespace())
        .to_lowercase();
    match style {
        NameStyle::Label => name,
        NameStyle::Identifier => WHITESPACE_RUN.replace_all(&name, "_").into_owned(),
    }
}

/// Heading text with markers and surrounding whitespace removed, case kept.
///
/// Only the opening `#` run is stripped, plus a closing `#` run when it is
/// set off by whitespace, so `## Learn C#` keeps its trailing `#`.
pub fn heading_text(raw: &str) -> &str {
    let text = raw.trim().trim_start_matches('#').trim();
    let open = text.trim_end_matches('#');
    if open.is_empty() {
        open
    } else if open.len() < text.len() && open.ends_with(char::is_whitespace) {
        open.trim_end()
    } else {
        text
    }
}
