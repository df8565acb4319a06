//! CSV writer

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{CsvError, CsvResult};
use crate::options::{CsvWriteOptions, LineTerminator};
use listmaker_core::{CellValue, Table};

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a table to a CSV file, creating or truncating it
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::write(table, file, options)?;
        info!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "saved table"
        );
        Ok(())
    }

    /// Write a table to a string
    pub fn write_string(table: &Table, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buf = Vec::new();
        Self::write(table, &mut buf, options)?;
        String::from_utf8(buf)
            .map_err(|e| CsvError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write a table to a writer
    ///
    /// Only the column labels and the cells are written; row labels exist for
    /// display only. Fields are quoted only when they contain the delimiter, a
    /// quote or a line break.
    pub fn write<W: Write>(table: &Table, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(terminator)
            .from_writer(writer);

        if table.column_count() == 0 {
            if table.row_count() > 0 {
                warn!(
                    rows = table.row_count(),
                    "table has no columns, rows cannot be represented"
                );
            }
        } else {
            if options.write_header {
                csv_writer.write_record(table.column_labels())?;
            }
            for row in table.rows() {
                csv_writer.write_record(row.iter().map(CellValue::display_str))?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
