//! Document-level tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/` next to this file.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::error::ParseError;
use crate::parsing::{
    BlockContent, BlockType, DuplicateBlocks, MdParser, ParseOptions, Row, Schema,
    extract_sections_for_search, extract_sections_for_search_with_limit,
};

fn fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

fn routine_schema() -> Schema {
    Schema::new()
        .with_block("warm_up", BlockType::Table)
        .with_block("reading_list", BlockType::Table)
        .with_block("journal", BlockType::DatedNotes)
}

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

// Fixture-based tests

#[test]
fn fixture_routine_parses_every_block() {
    // Given the routine document and its schema
    let md = fixture("routine");
    let parser = MdParser::new(routine_schema());

    // When parsing
    let parsed = parser.parse(&md).unwrap();

    // Then every level-2 heading becomes a block, in document order
    assert_eq!(
        parsed.keys().collect::<Vec<_>>(),
        vec!["warm_up", "reading_list", "journal"]
    );

    assert_eq!(
        parsed.get("warm_up"),
        Some(&BlockContent::Table(vec![
            row(&[("exercise", "neck rolls"), ("reps", "10"), ("notes", "slow")]),
            row(&[("exercise", "squats"), ("reps", "20"), ("notes", "")]),
        ]))
    );

    let journal = parsed.get("journal").and_then(BlockContent::as_dated_notes).unwrap();
    // Blank lines inside an entry are dropped before the entry is assembled
    assert_eq!(
        journal.get("2024-01-01").map(String::as_str),
        Some("Started the routine.\nFelt stiff afterwards.")
    );
    assert_eq!(journal.get("2024-01-02").map(String::as_str), Some("Ran 5k."));
    assert_eq!(journal.len(), 2);
}

#[test]
fn fixture_routine_serializes_to_nested_json() {
    let parsed = MdParser::new(routine_schema()).parse(&fixture("routine")).unwrap();

    let json = serde_json::to_value(&parsed).unwrap();

    assert_eq!(json["reading_list"][0]["author"], "Frank Herbert");
    assert_eq!(json["journal"]["2024-01-02"], "Ran 5k.");
}

#[test]
fn parsing_twice_gives_equal_results() {
    let md = fixture("routine");
    let parser = MdParser::new(routine_schema());

    let first = parser.parse(&md).unwrap();
    let second = parser.parse(&md).unwrap();

    assert_eq!(first, second);
}

#[test]
fn parse_lines_matches_parse() {
    let md = fixture("routine");
    let parser = MdParser::new(routine_schema());

    let owned: Vec<String> = md.lines().map(str::to_string).collect();

    assert_eq!(parser.parse_lines(owned).unwrap(), parser.parse(&md).unwrap());
}

#[test]
fn crlf_documents_parse_like_lf_documents() {
    let md = fixture("routine");
    let parser = MdParser::new(routine_schema());

    let crlf = md.replace('\n', "\r\n");

    assert_eq!(parser.parse(&crlf).unwrap(), parser.parse(&md).unwrap());
}

// Spot checks

#[test]
fn minimal_table_block() {
    let schema = Schema::new().with_block("t", BlockType::Table);
    let parsed = MdParser::new(schema)
        .parse("## T\n| a | b |\n|---|---|\n| 1 | 2 |\n")
        .unwrap();

    assert_eq!(
        parsed.get("t"),
        Some(&BlockContent::Table(vec![row(&[("a", "1"), ("b", "2")])]))
    );
}

#[test]
fn minimal_dated_notes_block() {
    let schema = Schema::new().with_block("log", BlockType::DatedNotes);
    let parsed = MdParser::new(schema)
        .parse("## Log\n### 2024-01-01\nfirst\n### 2024-01-02\nsecond\n")
        .unwrap();

    let notes = parsed.get("log").and_then(BlockContent::as_dated_notes).unwrap();
    assert_eq!(
        notes.iter().collect::<Vec<_>>(),
        vec![
            ("2024-01-01", &"first".to_string()),
            ("2024-01-02", &"second".to_string()),
        ]
    );
}

#[rstest]
#[case("", 0)]
#[case("# Title only\n\n", 0)]
#[case("## Log\n", 1)]
fn block_count_follows_level_two_headings(#[case] md: &str, #[case] expected: usize) {
    let schema = Schema::new().with_block("log", BlockType::DatedNotes);
    let parsed = MdParser::new(schema).parse(md).unwrap();
    assert_eq!(parsed.len(), expected);
}

// Failure modes

#[test]
fn mismatched_row_fails_the_whole_parse() {
    let schema = Schema::new()
        .with_block("t", BlockType::Table)
        .with_block("log", BlockType::DatedNotes);
    let md = "## Log\n### 2024-01-01\nok\n## T\n| a | b |\n|---|---|\n| 1 | 2 | 3 |\n";

    let err = MdParser::new(schema).parse(md).unwrap_err();

    assert!(matches!(
        err,
        ParseError::TableColumnMismatch { ref row, expected: 2, found: 3, .. } if row == "| 1 | 2 | 3 |"
    ));
}

#[test]
fn undeclared_heading_is_unknown_block() {
    let err = MdParser::new(routine_schema())
        .parse("## Warm Up\n|a|\n|-|\n## Side Quests\nstuff\n")
        .unwrap_err();

    assert_eq!(
        err,
        ParseError::UnknownBlock {
            name: "side_quests".to_string()
        }
    );
}

#[test]
fn schema_with_unsupported_tag_is_unknown_block_type() {
    let schema: Schema = [("ideas", "mind_map")].into_iter().collect();

    let err = MdParser::new(schema).parse("## Ideas\nx\n").unwrap_err();

    assert!(matches!(err, ParseError::UnknownBlockType { ref tag, .. } if tag == "mind_map"));
}

#[test]
fn content_before_first_block_is_malformed() {
    let err = MdParser::new(routine_schema())
        .parse("# Title\nintro\n## Journal\n")
        .unwrap_err();

    assert!(matches!(err, ParseError::MalformedDocument { line: 2, .. }));
}

#[test]
fn table_without_separator_is_empty_table() {
    let schema = Schema::new().with_block("t", BlockType::Table);
    let err = MdParser::new(schema).parse("## T\n| a |\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::EmptyTable {
            block: "t".to_string()
        }
    );
}

#[test]
fn oversized_input_is_rejected() {
    let options = ParseOptions {
        max_input_bytes: Some(8),
        ..ParseOptions::default()
    };
    let parser = MdParser::with_options(routine_schema(), options);

    let err = parser.parse("## Journal\n### 2024-01-01\n").unwrap_err();

    assert!(matches!(err, ParseError::InputTooLarge { limit: 8, .. }));
}

#[test]
fn oversized_line_sequence_is_rejected() {
    // Given a parser with a small limit and a document fed line by line
    let options = ParseOptions {
        max_input_bytes: Some(8),
        ..ParseOptions::default()
    };
    let parser = MdParser::with_options(routine_schema(), options);
    let lines = vec!["## Journal", "### 2024-01-01", "Started the routine."];

    // When parsing the line sequence
    let err = parser.parse_lines(lines).unwrap_err();

    // Then the limit trips on the first line, counted with its terminator
    assert_eq!(err, ParseError::InputTooLarge { size: 11, limit: 8 });
}

#[test]
fn line_sequence_within_limit_parses() {
    let md = "## Journal\n### 2024-01-01\nok\n";
    let options = ParseOptions {
        max_input_bytes: Some(md.len()),
        ..ParseOptions::default()
    };
    let parser = MdParser::with_options(routine_schema(), options);

    let from_lines = parser.parse_lines(md.lines()).unwrap();

    assert_eq!(from_lines, parser.parse(md).unwrap());
}

// Duplicate blocks

#[test]
fn duplicate_block_last_occurrence_wins_by_default() {
    let schema = Schema::new().with_block("journal", BlockType::DatedNotes);

    let parsed = MdParser::new(schema).parse(&fixture("duplicate_blocks")).unwrap();

    let journal = parsed.get("journal").and_then(BlockContent::as_dated_notes).unwrap();
    assert_eq!(journal.keys().collect::<Vec<_>>(), vec!["2024-02-01"]);
    assert_eq!(parsed.len(), 1);
}

#[test]
fn duplicate_block_rejected_when_configured() {
    let schema = Schema::new().with_block("journal", BlockType::DatedNotes);
    let options = ParseOptions {
        duplicate_blocks: DuplicateBlocks::Reject,
        ..ParseOptions::default()
    };

    let err = MdParser::with_options(schema, options)
        .parse(&fixture("duplicate_blocks"))
        .unwrap_err();

    assert_eq!(
        err,
        ParseError::DuplicateBlock {
            name: "journal".to_string()
        }
    );
}

// Search extraction

#[test]
fn search_sections_keep_raw_headers() {
    let sections = extract_sections_for_search(&fixture("search_only")).unwrap();

    let headers: Vec<_> = sections.iter().map(|s| s.header.as_str()).collect();
    assert_eq!(headers, vec!["Garden Planner", "Reading  Queue"]);
    assert_eq!(
        sections[0].content,
        "Track sowing dates.\n### Later\nAdd frost warnings."
    );
}

#[test]
fn search_header_keeps_trailing_hash() {
    let sections = extract_sections_for_search("## Learn C#\npointers\n## Todo ##\nx\n").unwrap();

    let headers: Vec<_> = sections.iter().map(|s| s.header.as_str()).collect();
    assert_eq!(headers, vec!["Learn C#", "Todo"]);
}

#[test]
fn search_needs_no_schema() {
    // The routine schema would reject these blocks; search never looks at it
    let sections = extract_sections_for_search("## Anything\nx\n## Else\ny\n").unwrap();
    assert_eq!(sections.len(), 2);
}

#[rstest]
#[case("")]
#[case("# Title\n\nJust prose, no blocks.\n")]
fn search_without_blocks_is_empty(#[case] md: &str) {
    assert!(extract_sections_for_search(md).unwrap().is_empty());
}

#[test]
fn search_respects_size_limit() {
    let err = extract_sections_for_search_with_limit("## A\nlong body", Some(4)).unwrap_err();
    assert!(matches!(err, ParseError::InputTooLarge { size: 14, limit: 4 }));
}
