//! Decoding raw object bytes into a [`Table`].

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use sift_model::{HeaderSet, Record, Table};

use crate::error::{IngestError, Result};

/// Decode an object body as UTF-8, dropping a leading byte-order mark.
pub fn decode_utf8(bytes: Vec<u8>, location: &str) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|source| IngestError::InvalidUtf8 {
        location: location.to_string(),
        source,
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Read a local file as UTF-8 text.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    decode_utf8(bytes, &path.display().to_string())
}

/// Parse delimited text with a header row.
///
/// Header names and cell values are kept verbatim. Blank lines between data
/// rows are skipped and rows may be shorter or longer than the header row.
/// The header must be the first line: a text that opens with a blank line,
/// or has no record at all, yields a table with an empty [`HeaderSet`].
pub fn parse_table(text: &str, location: &str) -> Result<Table> {
    if text.starts_with(['\n', '\r']) {
        debug!(location, "first line is blank, no header record");
        return Ok(Table::new(HeaderSet::new(Vec::new())));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| csv_error(location, &e))?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    let mut table = Table::new(HeaderSet::new(headers));

    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(location, &e))?;
        let values = record.iter().map(str::to_string).collect();
        table.push_record(Record::new(idx + 1, values));
    }

    debug!(
        location,
        columns = table.headers.len(),
        rows = table.len(),
        "parsed csv"
    );
    Ok(table)
}

fn csv_error(location: &str, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        location: location.to_string(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_table_keeps_headers_verbatim() {
        let table = parse_table(" Order Date ,Status,Notes\n2025-01-01,Pending,x\n", "t").unwrap();
        assert_eq!(
            table.headers.as_slice(),
            &[" Order Date ", "Status", "Notes"]
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].position, 1);
        assert_eq!(table.records[0].value(1), "Pending");
    }

    #[test]
    fn test_parse_table_handles_quotes_and_ragged_rows() {
        let text = "id,note,status\n1,\"a, b\",Shipped\n2\n\n3,x,Pending,extra\n";
        let table = parse_table(text, "t").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.records[0].value(1), "a, b");
        assert_eq!(table.records[1].value(2), "");
        assert_eq!(table.records[2].values().len(), 4);
        assert_eq!(table.records[2].position, 3);
    }

    #[test]
    fn test_parse_table_header_only() {
        let table = parse_table("status,date\n", "t").unwrap();
        assert_eq!(table.headers.len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_table_without_header_record() {
        let table = parse_table("\n\n", "t").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_table_blank_first_line_has_no_header() {
        for text in ["\nstatus,date\npending,2020-01-01\n", "\r\nstatus,date\n"] {
            let table = parse_table(text, "t").unwrap();
            assert!(table.headers.is_empty(), "{text:?} produced a header");
            assert!(table.is_empty());
        }
    }

    #[test]
    fn test_decode_utf8_strips_bom() {
        let text = decode_utf8("\u{feff}status,date\n".as_bytes().to_vec(), "t").unwrap();
        assert_eq!(text, "status,date\n");
    }

    #[test]
    fn test_decode_utf8_rejects_invalid_bytes() {
        let result = decode_utf8(vec![0x73, 0xff, 0xfe], "raw/a.csv");
        assert!(matches!(result, Err(IngestError::InvalidUtf8 { .. })));
    }

    #[test]
    fn test_read_text_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "status,date\nShipped,2025-01-01\n").unwrap();
        let text = read_text_file(file.path()).unwrap();
        assert!(text.starts_with("status,date"));
    }

    #[test]
    fn test_read_text_file_missing() {
        let result = read_text_file(Path::new("/nonexistent/sift/input.csv"));
        assert!(matches!(result, Err(IngestError::FileRead { .. })));
    }
}
