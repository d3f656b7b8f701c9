use crate::error::ParseError;
use crate::parsing::content::Row;

/// Pipe-delimited table block.
///
/// The first line holds the column names, the second is a separator whose
/// content is ignored, and every following line is a data row.
pub struct TableBlock;

impl TableBlock {
    pub const DELIMITER: char = '|';

    /// Cells of a table line: split on `|`, outermost tokens dropped, each
    /// remaining token trimmed.
    pub fn cells(raw_row: &str) -> Vec<String> {
        let tokens: Vec<&str> = raw_row.split(Self::DELIMITER).collect();
        if tokens.len() < 2 {
            return vec![];
        }
        tokens[1..tokens.len() - 1]
            .iter()
            .map(|t| t.trim().to_string())
            .collect()
    }

    /// Parse the lines of block `block` into rows keyed by the header.
    ///
    /// Repeated column names keep the first column's position and the last
    /// column's value.
    pub fn parse(block: &str, lines: &[String]) -> Result<Vec<Row>, ParseError> {
        let [header, _separator, data @ ..] = lines else {
            return Err(ParseError::EmptyTable {
                block: block.to_string(),
            });
        };

        let columns = Self::cells(header);

        data.iter()
            .map(|raw_row| {
                let values = Self::cells(raw_row);
                if values.len() != columns.len() {
                    return Err(ParseError::TableColumnMismatch {
                        block: block.to_string(),
                        expected: columns.len(),
                        found: values.len(),
                        row: raw_row.clone(),
                    });
                }
                let record: Row = columns.iter().cloned().zip(values).collect();
                Ok(record)
            })
            .collect()
    }
}
