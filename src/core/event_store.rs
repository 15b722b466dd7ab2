//! In-memory accumulation of recognised events for one run.
//!
//! The store is created by the run orchestrator, mutated only through
//! [`EventStore::record`], and read once through [`EventStore::snapshot`]
//! after all input has been consumed. Nothing is ever evicted.

use crate::core::event_record::{EventCategory, EventRecord};

/// Per-category record list. The count is the list length, so the two can
/// never disagree.
#[derive(Debug, Default, Clone)]
struct CategoryLog {
    details: Vec<EventRecord>,
}

/// Aggregate of every record produced during a run, grouped by category in
/// insertion order.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    logs: [CategoryLog; 3],
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` under `category`.
    pub fn record(&mut self, category: EventCategory, record: EventRecord) {
        self.logs[category.index()].details.push(record);
    }

    /// Number of records held for `category`.
    pub fn count(&self, category: EventCategory) -> usize {
        self.logs[category.index()].details.len()
    }

    /// Total records across all categories.
    pub fn total(&self) -> usize {
        self.logs.iter().map(|l| l.details.len()).sum()
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot { store: self }
    }
}

/// Borrowed, read-only view over an [`EventStore`].
#[derive(Debug, Clone, Copy)]
pub struct StoreSnapshot<'a> {
    store: &'a EventStore,
}

impl<'a> StoreSnapshot<'a> {
    /// Number of records for `category`.
    pub fn count(&self, category: EventCategory) -> usize {
        self.store.count(category)
    }

    /// All records for `category`, oldest first.
    pub fn details(&self, category: EventCategory) -> &'a [EventRecord] {
        &self.store.logs[category.index()].details
    }

    /// Up to `limit` records for `category`, most recently recorded first.
    pub fn recent(
        &self,
        category: EventCategory,
        limit: usize,
    ) -> impl Iterator<Item = &'a EventRecord> + 'a {
        self.details(category).iter().rev().take(limit)
    }

    /// Every record tagged with its category, in category order then
    /// insertion order.
    pub fn iter_all(&self) -> impl Iterator<Item = (EventCategory, &'a EventRecord)> + 'a {
        let store = self.store;
        EventCategory::ALL.into_iter().flat_map(move |cat| {
            store.logs[cat.index()]
                .details
                .iter()
                .map(move |r| (cat, r))
        })
    }
}
