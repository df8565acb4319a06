//! # listmaker-csv
//!
//! Delimited-text reader and writer for listmaker tables.
//!
//! The first record holds the column labels and every following record is one
//! row. Missing and empty fields load as [`CellValue::Empty`]; row labels are
//! not persisted.
//!
//! [`CellValue::Empty`]: listmaker_core::CellValue::Empty

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, Delimiter, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
