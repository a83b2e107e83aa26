//! Ordered board snapshots.

use super::Board;
use tracing::{debug, instrument};

/// Snapshots of the board, oldest first.
///
/// Index 0 is always the empty board and the sequence is never empty, so
/// there is deliberately no `is_empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Wraps raw snapshots without validation. Must be non-empty.
    #[cfg(test)]
    pub(crate) fn from_snapshots(snapshots: Vec<Board>) -> Self {
        assert!(!snapshots.is_empty(), "history needs at least one snapshot");
        Self { snapshots }
    }

    /// Number of snapshots (moves played plus one).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Snapshot at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Board {
        // Never empty: constructed with one element and only truncated to index >= 0.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Index of the most recent snapshot.
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Iterates snapshots oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.snapshots.iter()
    }

    /// All snapshots as a slice.
    pub fn as_slice(&self) -> &[Board] {
        &self.snapshots
    }

    /// Appends a snapshot and returns its index.
    pub(crate) fn push(&mut self, board: Board) -> usize {
        self.snapshots.push(board);
        self.last_index()
    }

    /// Drops every snapshot after `index`, keeping `[0..=index]`.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub(crate) fn truncate_after(&mut self, index: usize) {
        let keep = index.saturating_add(1).min(self.snapshots.len());
        if keep < self.snapshots.len() {
            debug!(discarded = self.snapshots.len() - keep, "Discarding future snapshots");
        }
        self.snapshots.truncate(keep);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
