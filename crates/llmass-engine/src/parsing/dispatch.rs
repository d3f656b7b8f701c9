use crate::error::ParseError;

use super::{
    content::BlockContent,
    kinds::{DatedNotesBlock, TableBlock},
    schema::{BlockType, Schema},
    sections::RawBlock,
};

/// Look up the declared type of `block` and run its sub-parser.
pub fn dispatch(schema: &Schema, block: &RawBlock) -> Result<BlockContent, ParseError> {
    let tag = schema
        .tag(&block.header)
        .ok_or_else(|| ParseError::UnknownBlock {
            name: block.header.clone(),
        })?;

    let block_type: BlockType = tag.parse().map_err(|_| ParseError::UnknownBlockType {
        block: block.header.clone(),
        tag: tag.to_string(),
    })?;

    match block_type {
        BlockType::Table => TableBlock::parse(&block.header, &block.lines).map(BlockContent::Table),
        BlockType::DatedNotes => Ok(BlockContent::DatedNotes(DatedNotesBlock::parse(
            &block.lines,
        ))),
    }
}
