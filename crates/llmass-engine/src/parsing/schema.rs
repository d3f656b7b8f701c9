use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The block types a schema can declare, one per sub-parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Pipe-delimited table with a header and a separator row.
    Table,
    /// Free text grouped under level-3 date headings.
    DatedNotes,
}

impl BlockType {
    pub const TABLE: &'static str = "table";
    pub const DATED_NOTES: &'static str = "dated_notes";

    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Table => Self::TABLE,
            BlockType::DatedNotes => Self::DATED_NOTES,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block type '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for BlockType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::TABLE => Ok(BlockType::Table),
            Self::DATED_NOTES => Ok(BlockType::DatedNotes),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

/// Block name (normalized) to declared block-type tag.
///
/// Tags are kept as written so an unsupported tag surfaces when the block
/// that uses it is dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    blocks: HashMap<String, String>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` as a block of type `block_type`.
    pub fn with_block(mut self, name: impl Into<String>, block_type: BlockType) -> Self {
        self.insert_tag(name, block_type.as_str());
        self
    }

    pub fn insert_tag(&mut self, name: impl Into<String>, tag: impl Into<String>) {
        self.blocks.insert(name.into(), tag.into());
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.blocks.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl<K: Into<String>, T: Into<String>> FromIterator<(K, T)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, tag) in iter {
            schema.insert_tag(name, tag);
        }
        schema
    }
}
