//! Definition file parser.
//!
//! The format is line oriented, one record per line:
//!
//! ```text
//! # comment
//! node meV millielectronvolt
//! node eV electronvolt
//! edge meV 0.001 eV NOINVERT
//! ```
//!
//! Tokens are separated by whitespace. Anything after the last token a
//! record needs is ignored, so a line may end in a trailing remark.

use tracing::debug;

use crate::error::DefinitionError;
use crate::records::{DefinitionRecord, EDGE_KEYWORD, INVERT_FLAG, NODE_KEYWORD, NOINVERT_FLAG};

/// Parse a whole definition file into records, in file order.
///
/// Stops at the first malformed line.
pub fn parse_definitions(source: &str) -> Result<Vec<DefinitionRecord>, DefinitionError> {
    let mut records = Vec::new();
    for (offset, line) in source.lines().enumerate() {
        if let Some(record) = parse_line(line, offset + 1)? {
            records.push(record);
        }
    }
    debug!(count = records.len(), "parsed definition records");
    Ok(records)
}

/// Parse a single line. Comments and blank lines yield `None`.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<DefinitionRecord>, DefinitionError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace();
    let keyword = tokens.next().unwrap_or_default();

    match keyword {
        NODE_KEYWORD => {
            let id = require(tokens.next(), line_no, "unit id")?;
            let long_name = require(tokens.next(), line_no, "long name")?;
            Ok(Some(DefinitionRecord::unit(id, long_name)))
        }
        EDGE_KEYWORD => {
            let from_id = require(tokens.next(), line_no, "source unit")?;
            let factor_str = require(tokens.next(), line_no, "conversion factor")?;
            let to_id = require(tokens.next(), line_no, "target unit")?;
            let flag = require(tokens.next(), line_no, "inversion flag")?;

            let factor: f64 = factor_str.parse().map_err(|_| {
                DefinitionError::syntax(line_no, format!("invalid conversion factor: {}", factor_str))
            })?;
            let record = if parse_inversion_flag(flag, line_no)? {
                DefinitionRecord::inverted_relation(from_id, factor, to_id)
            } else {
                DefinitionRecord::relation(from_id, factor, to_id)
            };
            Ok(Some(record))
        }
        other => Err(DefinitionError::syntax(
            line_no,
            format!("invalid type in definition file: {}", other),
        )),
    }
}

fn parse_inversion_flag(flag: &str, line_no: usize) -> Result<bool, DefinitionError> {
    match flag {
        INVERT_FLAG => Ok(true),
        NOINVERT_FLAG => Ok(false),
        _ => Err(DefinitionError::syntax(
            line_no,
            format!(
                "inversion flag must be {} or {}, found {}",
                INVERT_FLAG, NOINVERT_FLAG, flag
            ),
        )),
    }
}

fn require<'a>(token: Option<&'a str>, line_no: usize, what: &str) -> Result<&'a str, DefinitionError> {
    token.ok_or_else(|| DefinitionError::syntax(line_no, format!("missing {}", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_and_edge() {
        let records = parse_definitions(
            "node meV millielectronvolt\nnode eV electronvolt\nedge meV 0.001 eV NOINVERT\n",
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                DefinitionRecord::unit("meV", "millielectronvolt"),
                DefinitionRecord::unit("eV", "electronvolt"),
                DefinitionRecord::relation("meV", 0.001, "eV"),
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let records = parse_definitions("# energy units\n\n   \n  # indented\nnode K Kelvin\n").unwrap();
        assert_eq!(records, vec![DefinitionRecord::unit("K", "Kelvin")]);
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        let record = parse_line("node Ha Hartree // atomic unit", 1).unwrap();
        assert_eq!(record, Some(DefinitionRecord::unit("Ha", "Hartree")));

        let record = parse_line("edge eV 1239.842 nm INVERT  photon wavelength", 1).unwrap();
        assert_eq!(
            record,
            Some(DefinitionRecord::inverted_relation("eV", 1239.842, "nm"))
        );
    }

    #[test]
    fn test_scientific_notation_factor() {
        let record = parse_line("edge Ha 4.3597447e-18 J NOINVERT", 1).unwrap();
        assert_eq!(
            record,
            Some(DefinitionRecord::relation("Ha", 4.3597447e-18, "J"))
        );
    }

    #[test]
    fn test_unknown_keyword_is_syntax_error() {
        let err = parse_definitions("node K Kelvin\nunit eV electronvolt\n").unwrap_err();
        match err {
            DefinitionError::Syntax { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("unit"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_inversion_flag() {
        let err = parse_line("edge meV 0.001 eV FALSE", 4).unwrap_err();
        match err {
            DefinitionError::Syntax { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("INVERT or NOINVERT"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            parse_line("node K", 1),
            Err(DefinitionError::Syntax { .. })
        ));
        assert!(matches!(
            parse_line("edge meV 0.001 eV", 1),
            Err(DefinitionError::Syntax { .. })
        ));
    }

    #[test]
    fn test_unparsable_factor() {
        let err = parse_line("edge meV one eV NOINVERT", 3).unwrap_err();
        assert!(err.to_string().contains("invalid conversion factor: one"));
    }

    #[test]
    fn test_zero_factor_is_left_to_the_graph() {
        // The parser only checks the format; zero factors are rejected when
        // the relation is added to a graph.
        let record = parse_line("edge a 0 b NOINVERT", 1).unwrap();
        assert_eq!(record, Some(DefinitionRecord::relation("a", 0.0, "b")));
    }
}
