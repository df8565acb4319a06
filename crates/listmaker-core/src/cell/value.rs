//! Cell value types

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Represents the value stored in a cell
///
/// `Empty` is distinct from a scalar holding the empty string: a cell that was
/// never written (or was cleared) is `Empty`, while `Scalar("")` is an explicit
/// zero-length value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Text value
    Scalar(SharedString),
}

impl CellValue {
    /// Create a new scalar value
    pub fn scalar<S: AsRef<str>>(s: S) -> Self {
        CellValue::Scalar(SharedString::new(s))
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Scalar(s) => Some(s.as_str()),
            CellValue::Empty => None,
        }
    }

    /// Text shown by a view: the scalar text, or `""` for an empty cell
    pub fn display_str(&self) -> &str {
        self.as_str().unwrap_or("")
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::scalar(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Scalar(SharedString::from(s))
    }
}

impl From<SharedString> for CellValue {
    fn from(s: SharedString) -> Self {
        CellValue::Scalar(s)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// Interned string for memory efficiency
///
/// Lists often repeat the same values down a column ("yes", "no", a city name).
/// Using `Arc<str>` lets every cell holding that text share one allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SharedString(Arc<str>);

impl SharedString {
    /// Create a new shared string
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        SharedString(Arc::from(s.as_ref()))
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the length of the string in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SharedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedString {
    fn from(s: &str) -> Self {
        SharedString::new(s)
    }
}

impl From<String> for SharedString {
    fn from(s: String) -> Self {
        SharedString(Arc::from(s))
    }
}

/// String pool for deduplicating strings
///
/// Used while decoding a file: each distinct field text is stored once and
/// shared by every cell that holds it.
#[derive(Debug, Default)]
pub struct StringPool {
    strings: HashMap<Arc<str>, SharedString>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a shared string
    ///
    /// If the string already exists in the pool, returns a clone of the existing
    /// `SharedString`. Otherwise, creates a new one and adds it to the pool.
    pub fn intern<S: AsRef<str>>(&mut self, s: S) -> SharedString {
        let s = s.as_ref();
        if let Some(shared) = self.strings.get(s) {
            shared.clone()
        } else {
            let arc: Arc<str> = Arc::from(s);
            let shared = SharedString(arc.clone());
            self.strings.insert(arc, shared.clone());
            shared
        }
    }

    /// Get the number of unique strings in the pool
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Clear all strings from the pool
    pub fn clear(&mut self) {
        self.strings.clear();
    }
}
