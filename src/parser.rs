//! Line-oriented JSON5 parsing for catalog files
//!
//! A catalog file carries one object per line, tagged by `type`. JSON5
//! niceties (comments, trailing commas, unquoted keys) are accepted on
//! each line. Malformed lines become warnings and parsing continues;
//! the line boundary makes recovery unambiguous.

use std::io::{BufRead, BufReader, Read};

use thiserror::Error;

use crate::models::{CatalogObject, Warning};

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// Result of parsing a catalog stream.
#[derive(Debug, Clone, Default)]
pub struct CatalogResult {
    pub objects: Vec<CatalogObject>,
    pub warnings: Vec<Warning>,
}

/// Parse a single catalog line into a [`CatalogObject`].
pub fn parse_entry(line: &str, line_number: usize) -> Result<CatalogObject, ParseError> {
    json5::from_str(line).map_err(|e| ParseError { message: e.to_string(), line: line_number })
}

/// Parse a catalog stream, one object per line.
///
/// Blank lines and full-line `//` comments are skipped. A line that fails
/// to parse produces a [`Warning`] carrying its line number, and parsing
/// continues with the next line.
pub fn parse_catalog<R: Read>(reader: R) -> CatalogResult {
    let mut result = CatalogResult::default();
    let mut line_number = 0;

    for line in BufReader::new(reader).lines() {
        line_number += 1;
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                // Read errors are not line-local; give up on the stream.
                result.warnings.push(Warning { message: e.to_string(), line: line_number });
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }

        match parse_entry(trimmed, line_number) {
            Ok(obj) => result.objects.push(obj),
            Err(e) => result.warnings.push(Warning { message: e.message, line: e.line }),
        }
    }

    result
}
