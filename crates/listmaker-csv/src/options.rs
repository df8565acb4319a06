//! CSV options

use std::path::Path;

/// Common field delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the byte for this delimiter
    pub fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Pipe => b'|',
            Delimiter::Semicolon => b';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" | "tab" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }

    /// Detect delimiter from a file path's extension (comma if there is none)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(Delimiter::from_extension)
            .unwrap_or_default()
    }
}

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether the first record holds the column labels (default: true)
    ///
    /// When false, every record is data and columns get placeholder labels.
    pub has_header: bool,
}

impl CsvReadOptions {
    /// Default options with the delimiter implied by `path`'s extension
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            delimiter: Delimiter::from_path(path).byte(),
            ..Self::default()
        }
    }
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: true,
        }
    }
}

/// Options for writing CSV files
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Write the column labels as the first line (default: true)
    pub write_header: bool,
    /// Line terminator (default: LF)
    pub line_terminator: LineTerminator,
}

impl CsvWriteOptions {
    /// Default options with the delimiter implied by `path`'s extension
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            delimiter: Delimiter::from_path(path).byte(),
            ..Self::default()
        }
    }
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            write_header: true,
            line_terminator: LineTerminator::LF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    /// Unix-style (LF)
    #[default]
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}
