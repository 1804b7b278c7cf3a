//! Append-only in-memory conversion history.

use parking_lot::RwLock;

use super::types::ConversionRecord;

/// Append-only ledger of completed conversions.
///
/// Storage order is chronological. Appends take the write lock; reads return
/// owned snapshots taken under the read lock, so callers never observe a
/// torn ledger and never hold the lock themselves.
#[derive(Debug, Default)]
pub struct History {
    records: RwLock<Vec<ConversionRecord>>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. This is the only mutation the ledger supports.
    pub fn append(&self, record: ConversionRecord) {
        self.records.write().push(record);
    }

    /// Returns a reverse-chronological snapshot, optionally truncated to the
    /// `limit` most recent records. `None` or `Some(0)` returns everything.
    #[must_use]
    pub fn snapshot(&self, limit: Option<usize>) -> Vec<ConversionRecord> {
        self.snapshot_with_total(limit).0
    }

    /// Like [`History::snapshot`], but also returns the total ledger size as
    /// observed under the same read lock.
    #[must_use]
    pub fn snapshot_with_total(&self, limit: Option<usize>) -> (Vec<ConversionRecord>, usize) {
        let records = self.records.read();
        let total = records.len();
        let mut snapshot: Vec<ConversionRecord> = records.iter().rev().cloned().collect();
        if let Some(limit) = limit
            && limit > 0
        {
            snapshot.truncate(limit);
        }
        (snapshot, total)
    }

    /// Total number of recorded conversions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if no conversions have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
