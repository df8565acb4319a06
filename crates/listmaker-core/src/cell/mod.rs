//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`SharedString`] - Reference-counted cell text
//! - [`StringPool`] - Deduplication of repeated cell text

mod value;

pub use value::{CellValue, SharedString, StringPool};
