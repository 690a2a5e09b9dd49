//! Header-driven parsers for delimited tabular files.
//!
//! The first non-blank line defines the column set, in order; every
//! subsequent non-blank line is zipped positionally against it. Short rows
//! are padded with empty strings, extra trailing fields are dropped.
//!
//! The CSV side runs a full quote tokenizer: quoted fields may contain
//! delimiters and embedded newlines, and `""` inside quotes unescapes to a
//! literal `"`. Quote state carries across line boundaries, so multi-line
//! quoted fields parse correctly. The TSV side is a plain tab split with no
//! quoting, matching how sample mapping files are written in practice.

use std::path::Path;

use tracing::warn;

use crate::core::row::TabularRow;
use crate::parsing::ParseError;

/// Parse CSV text into rows, honoring double-quote escaping
#[must_use]
pub fn parse_csv_text(text: &str) -> Vec<TabularRow> {
    rows_from_records(tokenize_csv(text))
}

/// Parse TSV text into rows (plain tab split, no quoting)
#[must_use]
pub fn parse_tsv_text(text: &str) -> Vec<TabularRow> {
    let records = text
        .lines()
        .map(|line| {
            line.trim_end_matches('\r')
                .split('\t')
                .map(str::to_string)
                .collect()
        })
        .collect();
    rows_from_records(records)
}

/// Read and parse a CSV file. Missing file yields an empty result.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file exists but cannot be read.
pub fn read_csv_file(path: &Path) -> Result<Vec<TabularRow>, ParseError> {
    read_tabular_file(path, parse_csv_text)
}

/// Read and parse a TSV file. Missing file yields an empty result.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file exists but cannot be read.
pub fn read_tsv_file(path: &Path) -> Result<Vec<TabularRow>, ParseError> {
    read_tabular_file(path, parse_tsv_text)
}

fn read_tabular_file(
    path: &Path,
    parse: fn(&str) -> Vec<TabularRow>,
) -> Result<Vec<TabularRow>, ParseError> {
    if !path.exists() {
        warn!(
            "Tabular file not found, treating as empty: {}",
            path.display()
        );
        return Ok(Vec::new());
    }
    let text = std::fs::read_to_string(path)?;
    Ok(parse(&text))
}

/// Tokenize CSV text into raw records of fields.
///
/// Quote state is tracked across newlines: a record ends only at an unquoted
/// newline or at end of input.
fn tokenize_csv(text: &str) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                '\r' => {} // consumed; the following \n (if any) ends the record
                '\n' => {
                    fields.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut fields));
                }
                _ => field.push(c),
            }
        }
    }

    // Flush a final record without a trailing newline. An unterminated quote
    // at EOF keeps whatever was accumulated.
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push(fields);
    }

    records
}

/// First non-blank record becomes the header; the rest become rows
fn rows_from_records(records: Vec<Vec<String>>) -> Vec<TabularRow> {
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for record in records {
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.into_iter().map(|h| h.trim().to_string()).collect());
            }
            Some(headers) => rows.push(TabularRow::from_headers(headers, record)),
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_basic() {
        let rows = parse_csv_text("a,b,c\n1,2,3\n4,5,6\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("a"), Some("1"));
        assert_eq!(rows[1].get("c"), Some("6"));
    }

    #[test]
    fn test_parse_csv_quoted_delimiter() {
        let rows = parse_csv_text("a,b,c\n1,\"x,y\",3\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("a"), Some("1"));
        assert_eq!(rows[0].get("b"), Some("x,y"));
        assert_eq!(rows[0].get("c"), Some("3"));
    }

    #[test]
    fn test_parse_csv_doubled_quote() {
        let rows = parse_csv_text("a\n\"he said \"\"hi\"\"\"\n");
        assert_eq!(rows[0].get("a"), Some("he said \"hi\""));
    }

    #[test]
    fn test_parse_csv_quoted_newline() {
        let rows = parse_csv_text("a,b\n\"line1\nline2\",x\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("a"), Some("line1\nline2"));
        assert_eq!(rows[0].get("b"), Some("x"));
    }

    #[test]
    fn test_parse_csv_short_row_padded() {
        let rows = parse_csv_text("a,b,c\n1\n");
        assert_eq!(rows[0].get("b"), Some(""));
        assert_eq!(rows[0].get("c"), Some(""));
    }

    #[test]
    fn test_parse_csv_extra_fields_dropped() {
        let rows = parse_csv_text("a,b\n1,2,3,4\n");
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_parse_csv_blank_lines_skipped() {
        let rows = parse_csv_text("\n\na,b\n\n1,2\n\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("a"), Some("1"));
    }

    #[test]
    fn test_parse_csv_no_trailing_newline() {
        let rows = parse_csv_text("a,b\n1,2");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("b"), Some("2"));
    }

    #[test]
    fn test_parse_csv_crlf() {
        let rows = parse_csv_text("a,b\r\n1,2\r\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("a"), Some("1"));
    }

    #[test]
    fn test_parse_tsv_basic() {
        let rows = parse_tsv_text("sample_name\tbarcode\nsoil_a\tBC1\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("sample_name"), Some("soil_a"));
        assert_eq!(rows[0].get("barcode"), Some("BC1"));
    }

    #[test]
    fn test_parse_tsv_no_quote_handling() {
        // Tab format has no quoting: quotes pass through verbatim
        let rows = parse_tsv_text("a\tb\n\"x\ty\"\tz\n");
        assert_eq!(rows[0].get("a"), Some("\"x"));
        assert_eq!(rows[0].get("b"), Some("y\""));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_csv_text("").is_empty());
        assert!(parse_tsv_text("").is_empty());
        // Header alone yields no rows
        assert!(parse_csv_text("a,b,c\n").is_empty());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let rows = read_csv_file(Path::new("/nonexistent/stats.csv")).unwrap();
        assert!(rows.is_empty());
        let rows = read_tsv_file(Path::new("/nonexistent/mapping.tsv")).unwrap();
        assert!(rows.is_empty());
    }
}
