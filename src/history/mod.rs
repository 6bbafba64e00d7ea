//! Saved conversions, most recent first.

use std::collections::VecDeque;

use tracing::info;

use crate::models::{HistoryEntry, HistoryRecord, RecordId};

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a record, returning the id assigned to it
    pub fn save(&mut self, record: HistoryRecord) -> RecordId {
        let entry = HistoryEntry::new(record);
        let id = entry.id;
        self.entries.push_front(entry);
        info!(%id, total = self.entries.len(), "conversion saved");
        id
    }

    /// Remove the entry at `index`; out-of-range indices are ignored
    pub fn delete_at(&mut self, index: usize) -> Option<HistoryEntry> {
        let removed = self.entries.remove(index);
        if let Some(entry) = &removed {
            info!(id = %entry.id, index, "history entry deleted");
        }
        removed
    }

    /// Remove the entry with `id`; unknown ids are ignored
    pub fn delete(&mut self, id: RecordId) -> Option<HistoryEntry> {
        let index = self.position(id)?;
        self.delete_at(index)
    }

    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        info!(count, "history cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, id: RecordId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
