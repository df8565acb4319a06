//! The mutation façade views drive

use tracing::{debug, warn};

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::event::{Axis, ChangeEvent, Phase};
use crate::notify::{NotificationChannel, SubscriptionId, TableObserver};
use crate::table::Table;

/// Owns the live [`Table`] of an editing session and is the only path through
/// which it is mutated
///
/// Every request is validated before anything is emitted, so a rejected request
/// leaves both the table and the observers untouched. Accepted structural
/// requests are bracketed by [`Phase::Begin`] and [`Phase::End`]; cell edits and
/// renames produce a single [`Phase::Changed`] notification.
#[derive(Debug, Default)]
pub struct TableController {
    table: Table,
    channel: NotificationChannel,
}

impl TableController {
    /// Create a controller over an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller over an existing table
    pub fn with_table(table: Table) -> Self {
        Self {
            table,
            channel: NotificationChannel::new(),
        }
    }

    /// Read-only access to the live table
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Consume the controller, keeping the table
    pub fn into_table(self) -> Table {
        self.table
    }

    // === Subscriptions ===

    /// Register an observer
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: TableObserver + 'static,
    {
        self.channel.subscribe(observer)
    }

    /// Remove an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.channel.unsubscribe(id)
    }

    // === View interface ===

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    pub fn header_at(&self, axis: Axis, position: usize) -> Result<&str> {
        self.table.header_at(axis, position)
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.table.cell_at(row, col)
    }

    /// Display text of a cell; empty cells render as `""`
    pub fn display_at(&self, row: usize, col: usize) -> Result<String> {
        self.table
            .cell_at(row, col)
            .map(|value| value.display_str().to_string())
    }

    // === Cell edits ===

    /// Replace one cell's value
    pub fn set_cell<V: Into<CellValue>>(&mut self, row: usize, col: usize, value: V) -> Result<()> {
        self.table.check_cell(row, col).map_err(rejected)?;
        self.table.set_cell(row, col, value)?;
        debug!(row, col, "cell edited");
        self.changed(ChangeEvent::CellChanged { row, col });
        Ok(())
    }

    /// Reset one cell to [`CellValue::Empty`]
    pub fn clear_cell(&mut self, row: usize, col: usize) -> Result<()> {
        self.set_cell(row, col, CellValue::Empty)
    }

    // === Structure ===

    pub fn insert_row(&mut self, position: usize) -> Result<()> {
        self.insert(Axis::Row, position, 1)
    }

    pub fn insert_rows(&mut self, position: usize, count: usize) -> Result<()> {
        self.insert(Axis::Row, position, count)
    }

    pub fn remove_row(&mut self, position: usize) -> Result<()> {
        self.remove(Axis::Row, position, 1)
    }

    pub fn remove_rows(&mut self, position: usize, count: usize) -> Result<()> {
        self.remove(Axis::Row, position, count)
    }

    pub fn insert_column(&mut self, position: usize) -> Result<()> {
        self.insert(Axis::Column, position, 1)
    }

    pub fn insert_columns(&mut self, position: usize, count: usize) -> Result<()> {
        self.insert(Axis::Column, position, count)
    }

    pub fn remove_column(&mut self, position: usize) -> Result<()> {
        self.remove(Axis::Column, position, 1)
    }

    pub fn remove_columns(&mut self, position: usize, count: usize) -> Result<()> {
        self.remove(Axis::Column, position, count)
    }

    // === Labels ===

    pub fn rename_row_label<S: Into<String>>(&mut self, position: usize, label: S) -> Result<()> {
        self.rename_label(Axis::Row, position, label)
    }

    pub fn rename_column_label<S: Into<String>>(
        &mut self,
        position: usize,
        label: S,
    ) -> Result<()> {
        self.rename_label(Axis::Column, position, label)
    }

    /// Replace the label at `position` along `axis`
    pub fn rename_label<S: Into<String>>(
        &mut self,
        axis: Axis,
        position: usize,
        label: S,
    ) -> Result<()> {
        self.table.check_label(axis, position).map_err(rejected)?;
        let label = label.into();
        let previous = self.table.rename_label(axis, position, label.as_str())?;
        debug!(%axis, position, from = %previous, to = %label, "header renamed");
        self.changed(ChangeEvent::HeaderChanged { axis, position });
        Ok(())
    }

    // === Whole-document replacement ===

    /// Swap in a new table, returning the old one
    ///
    /// Observers get [`ChangeEvent::Reset`] with the new dimensions: the
    /// [`Phase::Begin`] notification still sees the old table and the
    /// [`Phase::End`] notification sees the new one.
    pub fn replace_table(&mut self, table: Table) -> Table {
        let event = ChangeEvent::Reset {
            rows: table.row_count(),
            columns: table.column_count(),
        };
        self.channel.emit(Phase::Begin, &event, &self.table);
        let old = std::mem::replace(&mut self.table, table);
        debug!(
            rows = self.table.row_count(),
            columns = self.table.column_count(),
            "table replaced"
        );
        self.channel.emit(Phase::End, &event, &self.table);
        old
    }

    fn insert(&mut self, axis: Axis, position: usize, count: usize) -> Result<()> {
        self.table.check_insert(axis, position).map_err(rejected)?;
        if count == 0 {
            return Ok(());
        }
        let event = ChangeEvent::inserted(axis, position, count);
        self.structural(event, |table| match axis {
            Axis::Row => table.insert_rows(position, count),
            Axis::Column => table.insert_columns(position, count),
        })
    }

    fn remove(&mut self, axis: Axis, position: usize, count: usize) -> Result<()> {
        self.table
            .check_remove(axis, position, count)
            .map_err(rejected)?;
        if count == 0 {
            return Ok(());
        }
        let event = ChangeEvent::removed(axis, position, count);
        self.structural(event, |table| match axis {
            Axis::Row => table.remove_rows(position, count),
            Axis::Column => table.remove_columns(position, count),
        })
    }

    /// Apply an already-validated structural mutation inside a begin/end bracket
    fn structural<F>(&mut self, event: ChangeEvent, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Table) -> Result<()>,
    {
        self.channel.emit(Phase::Begin, &event, &self.table);
        mutate(&mut self.table)?;
        debug!(?event, "structure changed");
        self.channel.emit(Phase::End, &event, &self.table);
        Ok(())
    }

    fn changed(&mut self, event: ChangeEvent) {
        self.channel.emit(Phase::Changed, &event, &self.table);
    }
}

fn rejected(err: Error) -> Error {
    warn!(%err, "rejected table mutation");
    err
}
