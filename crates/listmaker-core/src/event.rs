//! Change events describing table mutations

use std::fmt;

/// A table dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rows (vertical header)
    Row,
    /// Columns (horizontal header)
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// What changed in a table
///
/// Positions are those of the table the event refers to: for an insertion,
/// `start..start + count` are the positions the new entries occupy after the
/// mutation; for a removal, the positions the removed entries occupied before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeEvent {
    RowsInserted { start: usize, count: usize },
    RowsRemoved { start: usize, count: usize },
    ColumnsInserted { start: usize, count: usize },
    ColumnsRemoved { start: usize, count: usize },
    HeaderChanged { axis: Axis, position: usize },
    CellChanged { row: usize, col: usize },
    /// The whole table was replaced; carries the new dimensions
    Reset { rows: usize, columns: usize },
}

impl ChangeEvent {
    /// Whether this event changes the table's dimensions
    ///
    /// Structural events are delivered as a [`Phase::Begin`] / [`Phase::End`]
    /// pair around the mutation. The others are delivered once, as
    /// [`Phase::Changed`], after the mutation.
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            ChangeEvent::HeaderChanged { .. } | ChangeEvent::CellChanged { .. }
        )
    }

    /// The axis this event applies to, if it applies to exactly one
    pub fn axis(&self) -> Option<Axis> {
        match self {
            ChangeEvent::RowsInserted { .. } | ChangeEvent::RowsRemoved { .. } => Some(Axis::Row),
            ChangeEvent::ColumnsInserted { .. } | ChangeEvent::ColumnsRemoved { .. } => {
                Some(Axis::Column)
            }
            ChangeEvent::HeaderChanged { axis, .. } => Some(*axis),
            ChangeEvent::CellChanged { .. } | ChangeEvent::Reset { .. } => None,
        }
    }

    pub(crate) fn inserted(axis: Axis, start: usize, count: usize) -> Self {
        match axis {
            Axis::Row => ChangeEvent::RowsInserted { start, count },
            Axis::Column => ChangeEvent::ColumnsInserted { start, count },
        }
    }

    pub(crate) fn removed(axis: Axis, start: usize, count: usize) -> Self {
        match axis {
            Axis::Row => ChangeEvent::RowsRemoved { start, count },
            Axis::Column => ChangeEvent::ColumnsRemoved { start, count },
        }
    }
}

/// When a notification is delivered relative to the mutation it describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Before a structural mutation; the table still has its old dimensions
    Begin,
    /// After a structural mutation
    End,
    /// After a cell edit or header rename
    Changed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_classification() {
        assert!(ChangeEvent::RowsInserted { start: 0, count: 1 }.is_structural());
        assert!(ChangeEvent::ColumnsRemoved { start: 2, count: 1 }.is_structural());
        assert!(ChangeEvent::Reset { rows: 0, columns: 0 }.is_structural());
        assert!(!ChangeEvent::CellChanged { row: 0, col: 0 }.is_structural());
        assert!(!ChangeEvent::HeaderChanged {
            axis: Axis::Row,
            position: 0
        }
        .is_structural());
    }

    #[test]
    fn test_axis_of_event() {
        assert_eq!(ChangeEvent::inserted(Axis::Row, 1, 2).axis(), Some(Axis::Row));
        assert_eq!(
            ChangeEvent::removed(Axis::Column, 0, 1),
            ChangeEvent::ColumnsRemoved { start: 0, count: 1 }
        );
        assert_eq!(ChangeEvent::CellChanged { row: 1, col: 1 }.axis(), None);
    }
}
