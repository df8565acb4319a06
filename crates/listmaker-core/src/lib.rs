//! # listmaker-core
//!
//! Core data structures for the listmaker table editor.
//!
//! This crate provides:
//! - [`CellValue`] - A cell's content: text, or an explicit empty marker
//! - [`Table`] - Labeled rows and columns over a dense grid of cells
//! - [`ChangeEvent`], [`Phase`] - What changed, and when it is reported
//! - [`NotificationChannel`], [`TableObserver`] - Synchronous change delivery
//! - [`TableController`] - The single mutation path a view drives
//!
//! ## Example
//!
//! ```rust
//! use listmaker_core::{Axis, ChangeEvent, Phase, Table, TableController};
//!
//! let mut controller = TableController::with_table(Table::with_columns(["Name", "Qty"]));
//!
//! controller.subscribe(|phase: Phase, event: &ChangeEvent, table: &Table| {
//!     println!("{phase:?} {event:?} ({} rows)", table.row_count());
//! });
//!
//! controller.insert_row(0).unwrap();
//! controller.set_cell(0, 0, "apples").unwrap();
//! controller.rename_column_label(1, "Quantity").unwrap();
//!
//! assert_eq!(controller.display_at(0, 0).unwrap(), "apples");
//! assert_eq!(controller.display_at(0, 1).unwrap(), "");
//! assert_eq!(controller.header_at(Axis::Column, 1).unwrap(), "Quantity");
//! ```

pub mod cell;
pub mod controller;
pub mod error;
pub mod event;
pub mod notify;
pub mod table;

// Re-exports for convenience
pub use cell::{CellValue, SharedString, StringPool};
pub use controller::TableController;
pub use error::{Error, Result};
pub use event::{Axis, ChangeEvent, Phase};
pub use notify::{NotificationChannel, SubscriptionId, TableObserver};
pub use table::{placeholder_label, Table};
