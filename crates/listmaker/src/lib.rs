//! # listmaker
//!
//! An editable, labeled table with CSV load/save and change notifications.
//!
//! A [`Table`] holds ordered row and column labels over a dense grid of
//! [`CellValue`]s. All mutation goes through a [`TableController`], which
//! tells every subscribed [`TableObserver`] exactly what changed: structural
//! edits (inserting or removing rows and columns) arrive as a
//! [`Phase::Begin`] / [`Phase::End`] pair around the mutation, cell edits and
//! renames as a single [`Phase::Changed`].
//!
//! [`Editor`] wraps a controller with the load, save and print hooks a host
//! application binds to its menus.
//!
//! ## Example
//!
//! ```rust
//! use listmaker::prelude::*;
//!
//! let table = CsvReader::read_str("A,B\n1,2\n3,4\n", &CsvReadOptions::default()).unwrap();
//! let mut editor = Editor::with_table(table);
//!
//! let log = ChangeLog::new();
//! editor.controller_mut().subscribe(log.clone());
//!
//! let controller = editor.controller_mut();
//! controller.insert_row(1).unwrap();
//! controller.remove_column(0).unwrap();
//!
//! assert_eq!(controller.column_count(), 1);
//! assert_eq!(controller.display_at(1, 0).unwrap(), "");
//! assert_eq!(log.len(), 4);
//!
//! let csv = CsvWriter::write_string(editor.table(), &CsvWriteOptions::default()).unwrap();
//! assert_eq!(csv, "B\n2\n\"\"\n4\n");
//! ```

pub mod background;
pub mod dump;
pub mod editor;
pub mod error;
pub mod mirror;
pub mod observer;
pub mod prelude;

pub use editor::Editor;
pub use error::{EditorError, EditorResult};
pub use mirror::{GridSnapshot, ViewMirror};
pub use observer::{ChangeLog, LoggingObserver};

// Re-export core types
pub use listmaker_core::{
    placeholder_label, Axis, CellValue, ChangeEvent, Error, NotificationChannel, Phase, Result,
    SharedString, StringPool, SubscriptionId, Table, TableController, TableObserver,
};

// Re-export I/O types
pub use listmaker_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, Delimiter,
    LineTerminator,
};
