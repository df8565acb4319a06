//! Ready-made observers

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use listmaker_core::{ChangeEvent, Phase, Table, TableObserver};

/// Traces every notification at `trace` level
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl TableObserver for LoggingObserver {
    fn notify(&mut self, phase: Phase, event: &ChangeEvent, table: &Table) {
        trace!(
            ?phase,
            ?event,
            rows = table.row_count(),
            columns = table.column_count(),
            "table notification"
        );
    }
}

/// Records notifications in delivery order
///
/// Clones share the same log: subscribe one clone and read through another.
///
/// ```rust
/// use listmaker::{ChangeEvent, ChangeLog, Phase, TableController};
///
/// let log = ChangeLog::new();
/// let mut controller = TableController::new();
/// controller.subscribe(log.clone());
///
/// controller.insert_column(0).unwrap();
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.take()[0], (Phase::Begin, ChangeEvent::ColumnsInserted { start: 0, count: 1 }));
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    entries: Rc<RefCell<Vec<(Phase, ChangeEvent)>>>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn entries(&self) -> Vec<(Phase, ChangeEvent)> {
        self.entries.borrow().clone()
    }

    /// Drain the log
    pub fn take(&self) -> Vec<(Phase, ChangeEvent)> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TableObserver for ChangeLog {
    fn notify(&mut self, phase: Phase, event: &ChangeEvent, _table: &Table) {
        self.entries.borrow_mut().push((phase, *event));
    }
}
