//! Ordered collection of closed time entries.
//!
//! Order is insertion (clock-out) order unless reordered; aggregation never
//! depends on it.

use std::collections::HashSet;

use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    entries: Vec<TimeEntry>,
}

impl EntryStore {
    pub fn new(entries: Vec<TimeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn append(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry with this id wherever it sits in the sequence.
    pub fn remove_by_id(&mut self, id: i64) -> Option<TimeEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn replace_all(&mut self, entries: Vec<TimeEntry>) {
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Put the entries in the order given by `ids`.
    ///
    /// Accepted only when `ids` is a permutation of the stored ids; otherwise
    /// the store is left as it was.
    pub fn reorder(&mut self, ids: &[i64]) -> AppResult<()> {
        if ids.len() != self.entries.len() {
            return Err(AppError::InvalidReorder(format!(
                "expected {} ids, got {}",
                self.entries.len(),
                ids.len()
            )));
        }

        let mut wanted = ids.to_vec();
        let mut current: Vec<i64> = self.entries.iter().map(|e| e.id).collect();
        wanted.sort_unstable();
        current.sort_unstable();

        if wanted != current {
            return Err(AppError::InvalidReorder(
                "ids are not a permutation of the stored entries".into(),
            ));
        }

        let mut pool: Vec<Option<TimeEntry>> = self.entries.drain(..).map(Some).collect();
        let mut ordered = Vec::with_capacity(pool.len());

        for id in ids {
            if let Some(slot) = pool
                .iter_mut()
                .find(|slot| slot.as_ref().is_some_and(|e| e.id == *id))
                && let Some(entry) = slot.take()
            {
                ordered.push(entry);
            }
        }

        self.entries = ordered;
        Ok(())
    }

    /// Id for a new entry: the creation instant, bumped past the largest
    /// existing id so ids stay unique and increasing. When the largest id is
    /// `i64::MAX` the highest unused id is taken instead.
    pub fn next_id(&self, now_ms: i64) -> i64 {
        match self.entries.iter().map(|e| e.id).max() {
            Some(max) if max >= now_ms => max.checked_add(1).unwrap_or_else(|| self.highest_free_id()),
            _ => now_ms,
        }
    }

    fn highest_free_id(&self) -> i64 {
        let taken: HashSet<i64> = self.entries.iter().map(|e| e.id).collect();
        let mut id = i64::MAX;
        while taken.contains(&id) {
            id -= 1;
        }
        id
    }

    /// Last `n` entries in store order, most recent first.
    pub fn recent(&self, n: usize) -> Vec<&TimeEntry> {
        self.entries.iter().rev().take(n).collect()
    }

}
