//! A view-side copy of a table kept current from notifications alone

use std::cell::RefCell;
use std::rc::Rc;

use listmaker_core::{Axis, ChangeEvent, Phase, Table, TableObserver};

/// Display strings of a whole table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSnapshot {
    pub column_labels: Vec<String>,
    pub row_labels: Vec<String>,
    pub cells: Vec<Vec<String>>,
}

impl GridSnapshot {
    /// Read every label and cell of `table`
    pub fn of(table: &Table) -> Self {
        Self {
            column_labels: table.column_labels().to_vec(),
            row_labels: table.row_labels().to_vec(),
            cells: table.rows().map(display_row).collect(),
        }
    }
}

/// Observer that maintains a [`GridSnapshot`] incrementally
///
/// Each notification is applied as a delta: only the rows, columns, labels or
/// cells named by the event are read back from the table. This is what a
/// presentation layer does with its own cached rows.
///
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct ViewMirror {
    grid: Rc<RefCell<GridSnapshot>>,
}

impl ViewMirror {
    /// Start mirroring `table` as it is now
    pub fn new(table: &Table) -> Self {
        Self {
            grid: Rc::new(RefCell::new(GridSnapshot::of(table))),
        }
    }

    /// Current mirrored state
    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.borrow().clone()
    }

    fn apply(grid: &mut GridSnapshot, event: ChangeEvent, table: &Table) {
        match event {
            ChangeEvent::RowsInserted { start, count } => {
                for row in start..start + count {
                    let label = table.header_at(Axis::Row, row).unwrap_or_default();
                    let cells = table.row(row).map(display_row).unwrap_or_default();
                    grid.row_labels.insert(row, label.to_string());
                    grid.cells.insert(row, cells);
                }
            }
            ChangeEvent::RowsRemoved { start, count } => {
                grid.row_labels.drain(start..start + count);
                grid.cells.drain(start..start + count);
            }
            ChangeEvent::ColumnsInserted { start, count } => {
                for col in start..start + count {
                    let label = table.header_at(Axis::Column, col).unwrap_or_default();
                    grid.column_labels.insert(col, label.to_string());
                    for (row, cells) in grid.cells.iter_mut().enumerate() {
                        cells.insert(col, display_cell(table, row, col));
                    }
                }
            }
            ChangeEvent::ColumnsRemoved { start, count } => {
                grid.column_labels.drain(start..start + count);
                for cells in &mut grid.cells {
                    cells.drain(start..start + count);
                }
            }
            ChangeEvent::HeaderChanged { axis, position } => {
                let label = table.header_at(axis, position).unwrap_or_default().to_string();
                let labels = match axis {
                    Axis::Row => &mut grid.row_labels,
                    Axis::Column => &mut grid.column_labels,
                };
                if let Some(slot) = labels.get_mut(position) {
                    *slot = label;
                }
            }
            ChangeEvent::CellChanged { row, col } => {
                let text = display_cell(table, row, col);
                if let Some(slot) = grid.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
                    *slot = text;
                }
            }
            ChangeEvent::Reset { .. } => *grid = GridSnapshot::of(table),
        }
    }
}

impl TableObserver for ViewMirror {
    fn notify(&mut self, phase: Phase, event: &ChangeEvent, table: &Table) {
        // Begin carries nothing a cached grid needs; the delta is applied once
        // the table has its new shape.
        if phase != Phase::Begin {
            Self::apply(&mut self.grid.borrow_mut(), *event, table);
        }
    }
}

fn display_row(row: &[listmaker_core::CellValue]) -> Vec<String> {
    row.iter().map(|value| value.display_str().to_string()).collect()
}

fn display_cell(table: &Table, row: usize, col: usize) -> String {
    table
        .cell_at(row, col)
        .map(|value| value.display_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use listmaker_core::TableController;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mirror_follows_edits() {
        let mut controller = TableController::with_table(Table::from_rows(
            vec!["A".into(), "B".into()],
            vec![vec!["1".into(), "2".into()], vec!["3".into(), "4".into()]],
        ));
        let mirror = ViewMirror::new(controller.table());
        controller.subscribe(mirror.clone());

        controller.insert_row(1).unwrap();
        controller.set_cell(1, 1, "new").unwrap();
        controller.insert_column(2).unwrap();
        controller.rename_column_label(2, "C").unwrap();
        controller.remove_column(0).unwrap();
        controller.remove_row(0).unwrap();

        assert_eq!(mirror.snapshot(), GridSnapshot::of(controller.table()));
        assert_eq!(mirror.snapshot().column_labels, vec!["B", "C"]);
    }

    #[test]
    fn test_mirror_rebuilds_on_reset() {
        let mut controller = TableController::new();
        let mirror = ViewMirror::new(controller.table());
        controller.subscribe(mirror.clone());

        controller.replace_table(Table::with_columns(["X"]));
        assert_eq!(mirror.snapshot().column_labels, vec!["X"]);
    }
}
