//! Append-only result history

use serde::{Deserialize, Serialize};

/// One recorded result with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub ordinal: usize,
    pub result: String,
}

/// Ordered log of results; insertion order is chronological order.
///
/// Entries are never deduplicated, reordered or removed individually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result and return its ordinal
    pub fn append(&mut self, result: impl Into<String>) -> usize {
        let ordinal = self.entries.len() + 1;
        self.entries.push(HistoryEntry {
            ordinal,
            result: result.into(),
        });
        ordinal
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
