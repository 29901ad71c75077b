//! Concurrent keyed table shared by the in-memory repositories.

use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

/// A concurrent map that remembers insertion order.
#[derive(Debug)]
pub struct MemoryTable<Id, Row>
where
    Id: Eq + Hash,
{
    /// Id → (insertion sequence, row).
    rows: DashMap<Id, (u64, Row)>,
    /// Next insertion sequence number.
    next_seq: AtomicU64,
}

impl<Id, Row> MemoryTable<Id, Row>
where
    Id: Eq + Hash + Clone,
    Row: Clone,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Inserts a row under a new id.
    pub fn insert(&self, id: Id, row: Row) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.rows.insert(id, (seq, row));
    }

    /// Returns a copy of the row for `id`.
    pub fn get(&self, id: &Id) -> Option<Row> {
        self.rows.get(id).map(|entry| entry.value().1.clone())
    }

    /// Returns every row, most recently inserted first.
    pub fn newest_first(&self) -> Vec<Row> {
        let mut rows: Vec<(u64, Row)> = self
            .rows
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by(|a, b| b.0.cmp(&a.0));
        rows.into_iter().map(|(_, row)| row).collect()
    }

    /// Applies `f` to the row for `id` and returns the updated copy.
    pub fn modify(&self, id: &Id, f: impl FnOnce(&mut Row)) -> Option<Row> {
        self.rows.get_mut(id).map(|mut entry| {
            f(&mut entry.value_mut().1);
            entry.value().1.clone()
        })
    }

    /// Removes the row for `id`. Returns `true` if it existed.
    pub fn remove(&self, id: &Id) -> bool {
        self.rows.remove(id).is_some()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<Id, Row> Default for MemoryTable<Id, Row>
where
    Id: Eq + Hash + Clone,
    Row: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
