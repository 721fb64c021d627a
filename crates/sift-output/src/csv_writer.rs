//! CSV serialization of filtered tables.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use sift_model::Table;

use crate::error::Result;

/// Record terminator for written files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\r\n`, the spreadsheet dialect.
    #[default]
    Crlf,
    /// `\n`.
    Lf,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriterOptions {
    pub line_ending: LineEnding,
}

impl CsvWriterOptions {
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// Write the header row followed by every record, in header order.
///
/// The header row is written even when the table has no records. Fields are
/// quoted only when needed.
pub fn write_table_to<W: Write>(sink: W, table: &Table, options: &CsvWriterOptions) -> Result<()> {
    let terminator = match options.line_ending {
        LineEnding::Crlf => Terminator::CRLF,
        LineEnding::Lf => Terminator::Any(b'\n'),
    };
    let mut writer = WriterBuilder::new()
        .flexible(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(terminator)
        .from_writer(sink);

    writer.write_record(table.headers.iter())?;
    for row in table.aligned_rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize a table into an in-memory CSV body.
pub fn write_table(table: &Table, options: &CsvWriterOptions) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    write_table_to(&mut body, table, options)?;
    Ok(body)
}
