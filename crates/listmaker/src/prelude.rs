//! Prelude module - common imports for listmaker users
//!
//! ```rust
//! use listmaker::prelude::*;
//! ```

pub use crate::{
    // Model types
    Axis,
    CellValue,
    ChangeEvent,
    // Observers
    ChangeLog,
    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    // Host hooks
    Editor,
    EditorError,
    Error,
    LoggingObserver,
    Phase,
    Result,
    Table,
    TableController,
    TableObserver,
};
