//! Observer subscription and synchronous dispatch of change events

use std::fmt;

use crate::event::{ChangeEvent, Phase};
use crate::table::Table;

/// Receives change notifications from a [`TableController`](crate::TableController)
///
/// The table is handed out by shared reference, so an observer can read the
/// current state (old dimensions on [`Phase::Begin`], new ones on
/// [`Phase::End`]) but can never mutate it from inside a handler.
pub trait TableObserver {
    fn notify(&mut self, phase: Phase, event: &ChangeEvent, table: &Table);
}

impl<F> TableObserver for F
where
    F: FnMut(Phase, &ChangeEvent, &Table),
{
    fn notify(&mut self, phase: Phase, event: &ChangeEvent, table: &Table) {
        self(phase, event, table)
    }
}

/// Handle returned by [`NotificationChannel::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Ordered list of observers
///
/// Delivery is synchronous and in subscription order. Only the controller can
/// emit.
#[derive(Default)]
pub struct NotificationChannel {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn TableObserver>)>,
}

impl NotificationChannel {
    /// Create a channel with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; it receives every notification emitted from now on
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: TableObserver + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of subscribed observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True if nobody is listening
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(crate) fn emit(&mut self, phase: Phase, event: &ChangeEvent, table: &Table) {
        for (_, observer) in &mut self.observers {
            observer.notify(phase, event, table);
        }
    }
}

impl fmt::Debug for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationChannel")
            .field("observers", &self.observers.len())
            .finish()
    }
}
