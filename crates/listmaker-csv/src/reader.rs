//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use listmaker_core::{CellValue, StringPool, Table};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a table
    ///
    /// The file is closed before this returns, whether or not decoding succeeded.
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::read(file, options)?;
        info!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded table"
        );
        Ok(table)
    }

    /// Read CSV text into a table
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Table> {
        Self::read(text.as_bytes(), options)
    }

    /// Read CSV from a reader into a table
    ///
    /// Records shorter than the header are padded with empty cells; longer
    /// ones widen the table (see [`Table::from_rows`]).
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut pool = StringPool::new();
        let mut records = csv_reader.records();

        let labels: Vec<String> = match (options.has_header, records.next()) {
            (true, Some(header)) => header?.iter().map(str::to_string).collect(),
            (false, Some(first)) => {
                let first = first?;
                return Self::collect(
                    Vec::new(),
                    std::iter::once(Ok(first)).chain(records),
                    &mut pool,
                );
            }
            (_, None) => Vec::new(),
        };

        Self::collect(labels, records, &mut pool)
    }

    fn collect<I>(labels: Vec<String>, records: I, pool: &mut StringPool) -> CsvResult<Table>
    where
        I: Iterator<Item = csv::Result<csv::StringRecord>>,
    {
        let header_width = labels.len();
        let mut rows = Vec::new();

        for result in records {
            let record = result?;
            let row: Vec<CellValue> = record
                .iter()
                .map(|field| Self::decode_field(field, pool))
                .collect();
            rows.push(row);
        }

        let table = Table::from_rows(labels, rows);
        if table.column_count() > header_width {
            debug!(
                header_width,
                columns = table.column_count(),
                "records wider than header, added placeholder columns"
            );
        }
        Ok(table)
    }

    /// Empty fields (quoted or not) become [`CellValue::Empty`]
    fn decode_field(field: &str, pool: &mut StringPool) -> CellValue {
        if field.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Scalar(pool.intern(field))
        }
    }
}
