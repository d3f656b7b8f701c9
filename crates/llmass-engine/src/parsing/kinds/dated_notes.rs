use crate::parsing::content::DatedNotes;
use crate::parsing::heading::{ENTRY_LEVEL, NameStyle, is_heading, normalize_heading};

/// Free-text block split into entries by level-3 headings.
///
/// Each heading's label (lower-cased, inner whitespace kept) maps to the
/// lines below it joined with `\n`. Lines above the first entry heading are
/// dropped, and a repeated label replaces the earlier entry's text.
pub struct DatedNotesBlock;

impl DatedNotesBlock {
    pub fn parse(lines: &[String]) -> DatedNotes {
        let mut notes = DatedNotes::new();
        let mut label: Option<String> = None;
        let mut buf: Vec<&str> = vec![];

        for line in lines {
            if is_heading(line, ENTRY_LEVEL) {
                if let Some(prev) = label.take() {
                    notes.insert(prev, buf.join("\n"));
                    buf.clear();
                }
                label = Some(normalize_heading(line, NameStyle::Label));
            } else if label.is_some() {
                buf.push(line);
            }
        }

        if let Some(prev) = label {
            notes.insert(prev, buf.join("\n"));
        }

        notes
    }
}
