pub mod dated_notes;
pub mod table;

pub use dated_notes::DatedNotesBlock;
pub use table::TableBlock;
