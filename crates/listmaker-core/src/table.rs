//! Table type

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::event::Axis;

/// A labeled grid of cells
///
/// Rows and columns are addressed by 0-based position. Every row holds exactly
/// `column_count()` cells, and there is one row label per row and one column
/// label per column. Labels are free text: they may repeat and they never
/// affect ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column labels, one per column
    column_labels: Vec<String>,
    /// Row labels, one per row
    row_labels: Vec<String>,
    /// Row-major cell storage
    cells: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table (0 rows, 0 columns)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the given column labels and no rows
    pub fn with_columns<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            column_labels: labels.into_iter().map(Into::into).collect(),
            row_labels: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Build a table from decoded records
    ///
    /// Rows shorter than the label list are padded with [`CellValue::Empty`].
    /// A row wider than the label list widens the whole table: the extra
    /// columns get placeholder labels and every other row is padded. Row labels
    /// are the row positions as text.
    pub fn from_rows(column_labels: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let mut column_labels = column_labels;
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(column_labels.len());

        for position in column_labels.len()..width {
            column_labels.push(placeholder_label(position));
        }

        let cells: Vec<Vec<CellValue>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        let row_labels = (0..cells.len()).map(placeholder_label).collect();

        Self {
            column_labels,
            row_labels,
            cells,
        }
    }

    // === Dimensions and labels ===

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.column_labels.len()
    }

    /// Number of entries along an axis
    pub fn len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_count(),
            Axis::Column => self.column_count(),
        }
    }

    /// True if the table holds no cells
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    /// Column labels in position order
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Row labels in position order
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Label at `position` along `axis`
    pub fn header_at(&self, axis: Axis, position: usize) -> Result<&str> {
        self.labels(axis)
            .get(position)
            .map(String::as_str)
            .ok_or_else(|| Error::out_of_bounds(axis, position, self.len(axis)))
    }

    /// Position of the first row carrying `label`
    pub fn row_position(&self, label: &str) -> Option<usize> {
        self.row_labels.iter().position(|l| l == label)
    }

    /// Position of the first column carrying `label`
    pub fn column_position(&self, label: &str) -> Option<usize> {
        self.column_labels.iter().position(|l| l == label)
    }

    // === Cell access ===

    /// Value at `(row, col)`
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.check_cell(row, col)?;
        Ok(&self.cells[row][col])
    }

    /// All cells of one row
    pub fn row(&self, row: usize) -> Result<&[CellValue]> {
        self.cells
            .get(row)
            .map(Vec::as_slice)
            .ok_or(Error::RowOutOfBounds {
                position: row,
                len: self.row_count(),
            })
    }

    /// Iterate rows in position order
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Replace the value at `(row, col)`, returning the previous value
    pub fn set_cell<V: Into<CellValue>>(
        &mut self,
        row: usize,
        col: usize,
        value: V,
    ) -> Result<CellValue> {
        self.check_cell(row, col)?;
        Ok(std::mem::replace(&mut self.cells[row][col], value.into()))
    }

    /// Reset the value at `(row, col)` to [`CellValue::Empty`]
    pub fn clear_cell(&mut self, row: usize, col: usize) -> Result<CellValue> {
        self.set_cell(row, col, CellValue::Empty)
    }

    // === Structure ===

    /// Insert one all-empty row at `position` (`0..=row_count()`)
    pub fn insert_row(&mut self, position: usize) -> Result<()> {
        self.insert_rows(position, 1)
    }

    /// Insert `count` all-empty rows starting at `position`
    pub fn insert_rows(&mut self, position: usize, count: usize) -> Result<()> {
        self.check_insert(Axis::Row, position)?;
        if count == 0 {
            return Ok(());
        }
        let width = self.column_count();
        self.cells.splice(
            position..position,
            (0..count).map(|_| vec![CellValue::Empty; width]),
        );
        self.row_labels
            .splice(position..position, placeholder_labels(position, count));
        Ok(())
    }

    /// Remove the row at `position`
    pub fn remove_row(&mut self, position: usize) -> Result<()> {
        self.remove_rows(position, 1)
    }

    /// Remove `count` rows starting at `position`
    pub fn remove_rows(&mut self, position: usize, count: usize) -> Result<()> {
        self.check_remove(Axis::Row, position, count)?;
        if count == 0 {
            return Ok(());
        }
        self.cells.drain(position..position + count);
        self.row_labels.drain(position..position + count);
        Ok(())
    }

    /// Insert one all-empty column at `position` (`0..=column_count()`)
    pub fn insert_column(&mut self, position: usize) -> Result<()> {
        self.insert_columns(position, 1)
    }

    /// Insert `count` all-empty columns starting at `position`
    pub fn insert_columns(&mut self, position: usize, count: usize) -> Result<()> {
        self.check_insert(Axis::Column, position)?;
        if count == 0 {
            return Ok(());
        }
        for row in &mut self.cells {
            row.splice(
                position..position,
                std::iter::repeat(CellValue::Empty).take(count),
            );
        }
        self.column_labels
            .splice(position..position, placeholder_labels(position, count));
        Ok(())
    }

    /// Remove the column at `position`
    pub fn remove_column(&mut self, position: usize) -> Result<()> {
        self.remove_columns(position, 1)
    }

    /// Remove `count` columns starting at `position`
    pub fn remove_columns(&mut self, position: usize, count: usize) -> Result<()> {
        self.check_remove(Axis::Column, position, count)?;
        if count == 0 {
            return Ok(());
        }
        for row in &mut self.cells {
            row.drain(position..position + count);
        }
        self.column_labels.drain(position..position + count);
        Ok(())
    }

    // === Labels ===

    /// Rename the row at `position`, returning the previous label
    pub fn rename_row_label<S: Into<String>>(&mut self, position: usize, label: S) -> Result<String> {
        self.rename_label(Axis::Row, position, label)
    }

    /// Rename the column at `position`, returning the previous label
    pub fn rename_column_label<S: Into<String>>(
        &mut self,
        position: usize,
        label: S,
    ) -> Result<String> {
        self.rename_label(Axis::Column, position, label)
    }

    /// Rename the entry at `position` along `axis`, returning the previous label
    pub fn rename_label<S: Into<String>>(
        &mut self,
        axis: Axis,
        position: usize,
        label: S,
    ) -> Result<String> {
        let len = self.len(axis);
        let slot = self
            .labels_mut(axis)
            .get_mut(position)
            .ok_or_else(|| Error::out_of_bounds(axis, position, len))?;
        Ok(std::mem::replace(slot, label.into()))
    }

    // === Validation ===

    pub(crate) fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.row_count() {
            return Err(Error::RowOutOfBounds {
                position: row,
                len: self.row_count(),
            });
        }
        if col >= self.column_count() {
            return Err(Error::ColumnOutOfBounds {
                position: col,
                len: self.column_count(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_label(&self, axis: Axis, position: usize) -> Result<()> {
        let len = self.len(axis);
        if position >= len {
            return Err(Error::out_of_bounds(axis, position, len));
        }
        Ok(())
    }

    pub(crate) fn check_insert(&self, axis: Axis, position: usize) -> Result<()> {
        let len = self.len(axis);
        if position > len {
            return Err(Error::out_of_bounds(axis, position, len));
        }
        Ok(())
    }

    pub(crate) fn check_remove(&self, axis: Axis, position: usize, count: usize) -> Result<()> {
        if count == 0 {
            return self.check_insert(axis, position);
        }
        let len = self.len(axis);
        if position >= len {
            return Err(Error::out_of_bounds(axis, position, len));
        }
        let end = position.saturating_add(count);
        if end > len {
            return Err(Error::out_of_bounds(axis, end - 1, len));
        }
        Ok(())
    }

    fn labels(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Row => &self.row_labels,
            Axis::Column => &self.column_labels,
        }
    }

    fn labels_mut(&mut self, axis: Axis) -> &mut Vec<String> {
        match axis {
            Axis::Row => &mut self.row_labels,
            Axis::Column => &mut self.column_labels,
        }
    }
}

/// Label given to a row or column that was created without one
pub fn placeholder_label(position: usize) -> String {
    position.to_string()
}

fn placeholder_labels(start: usize, count: usize) -> impl Iterator<Item = String> {
    (start..start + count).map(placeholder_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn s(text: &str) -> CellValue {
        CellValue::scalar(text)
    }

    fn sample() -> Table {
        Table::from_rows(
            vec!["A".into(), "B".into()],
            vec![vec![s("1"), s("2")], vec![s("3"), s("4")]],
        )
    }

    fn grid(table: &Table) -> Vec<Vec<CellValue>> {
        table.rows().map(<[CellValue]>::to_vec).collect()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = Table::new();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_insert_row_then_remove_column() {
        let mut table = sample();

        table.insert_row(1).unwrap();
        assert_eq!(
            grid(&table),
            vec![
                vec![s("1"), s("2")],
                vec![CellValue::Empty, CellValue::Empty],
                vec![s("3"), s("4")],
            ]
        );

        table.remove_column(0).unwrap();
        assert_eq!(table.column_labels(), &["B".to_string()]);
        assert_eq!(
            grid(&table),
            vec![vec![s("2")], vec![CellValue::Empty], vec![s("4")]]
        );
    }

    #[test]
    fn test_insert_at_end_appends() {
        let mut table = sample();
        table.insert_row(2).unwrap();
        table.insert_column(2).unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_labels(), &["0", "1", "2"]);
        assert_eq!(table.column_labels(), &["A", "B", "2"]);
        assert_eq!(table.cell_at(2, 2).unwrap(), &CellValue::Empty);
        assert_eq!(table.cell_at(0, 1).unwrap(), &s("2"));
    }

    #[test]
    fn test_insert_past_end_fails() {
        let mut table = sample();
        assert_eq!(
            table.insert_row(3),
            Err(Error::RowOutOfBounds {
                position: 3,
                len: 2
            })
        );
        assert_eq!(
            table.insert_column(5),
            Err(Error::ColumnOutOfBounds {
                position: 5,
                len: 2
            })
        );
        assert_eq!(table, sample());
    }

    #[test]
    fn test_remove_row_shifts_down() {
        let mut table = sample();
        table.rename_row_label(1, "second").unwrap();
        table.remove_row(0).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.row_labels(), &["second"]);
        assert_eq!(grid(&table), vec![vec![s("3"), s("4")]]);
    }

    #[test]
    fn test_remove_from_empty_table_fails() {
        let mut table = Table::new();
        assert_eq!(
            table.remove_row(0),
            Err(Error::RowOutOfBounds {
                position: 0,
                len: 0
            })
        );
        assert!(table.remove_column(0).is_err());
    }

    #[test]
    fn test_counted_insert_and_remove() {
        let mut table = sample();
        table.insert_rows(1, 3).unwrap();
        assert_eq!(table.row_count(), 5);
        assert_eq!(table.row_labels(), &["0", "1", "2", "3", "1"]);
        assert_eq!(table.row(4).unwrap(), &[s("3"), s("4")]);

        table.remove_rows(1, 3).unwrap();
        assert_eq!(table, sample());

        assert_eq!(
            table.remove_columns(1, 2),
            Err(Error::ColumnOutOfBounds {
                position: 2,
                len: 2
            })
        );
        table.remove_columns(0, 0).unwrap();
        table.remove_columns(2, 0).unwrap();
        assert_eq!(table.column_count(), 2);

        assert_eq!(
            table.insert_columns(3, 0),
            Err(Error::ColumnOutOfBounds {
                position: 3,
                len: 2
            })
        );
        assert!(table.remove_rows(3, 0).is_err());
        assert_eq!(table, sample());
    }

    #[test]
    fn test_set_cell_returns_previous() {
        let mut table = sample();
        let previous = table.set_cell(0, 1, "x").unwrap();
        assert_eq!(previous, s("2"));
        assert_eq!(table.cell_at(0, 1).unwrap(), &s("x"));

        table.clear_cell(0, 1).unwrap();
        assert_eq!(table.cell_at(0, 1).unwrap(), &CellValue::Empty);

        assert!(table.set_cell(2, 0, "y").is_err());
        assert!(table.set_cell(0, 2, "y").is_err());
    }

    #[test]
    fn test_rename_keeps_cells_and_allows_duplicates() {
        let mut table = sample();
        let old = table.rename_column_label(1, "A").unwrap();

        assert_eq!(old, "B");
        assert_eq!(table.column_labels(), &["A", "A"]);
        assert_eq!(table.column_position("A"), Some(0));
        assert_eq!(table.column_position("B"), None);
        assert_eq!(grid(&table), grid(&sample()));
        assert!(table.rename_row_label(2, "nope").is_err());
    }

    #[test]
    fn test_header_at() {
        let table = sample();
        assert_eq!(table.header_at(Axis::Column, 1).unwrap(), "B");
        assert_eq!(table.header_at(Axis::Row, 0).unwrap(), "0");
        assert_eq!(table.row_position("1"), Some(1));
        assert!(table.header_at(Axis::Column, 2).is_err());
    }

    #[test]
    fn test_from_rows_pads_and_widens() {
        let table = Table::from_rows(
            vec!["A".into(), "B".into()],
            vec![vec![s("1")], vec![s("2"), s("3"), s("4")]],
        );

        assert_eq!(table.column_labels(), &["A", "B", "2"]);
        assert_eq!(
            grid(&table),
            vec![
                vec![s("1"), CellValue::Empty, CellValue::Empty],
                vec![s("2"), s("3"), s("4")],
            ]
        );
    }

    #[test]
    fn test_columns_on_rowless_table() {
        let mut table = Table::with_columns(["A"]);
        table.insert_column(0).unwrap();
        assert_eq!(table.column_labels(), &["0", "A"]);
        table.insert_row(0).unwrap();
        assert_eq!(table.row(0).unwrap(), &[CellValue::Empty, CellValue::Empty]);
    }
}
