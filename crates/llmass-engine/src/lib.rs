pub mod error;
pub mod io;
pub mod models;
pub mod parsing;


// Re-export key types for easier usage
pub use error::ParseError;
pub use io::IoError;
pub use models::MarkdownFile;
pub use parsing::{
    BlockContent, BlockType, DatedNotes, DuplicateBlocks, MdParser, OrderedMap, ParseOptions,
    ParsedContent, Row, Schema, Section, extract_sections_for_search,
    extract_sections_for_search_with_limit,
};
