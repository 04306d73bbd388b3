//! Latest-committed board cell for long-lived gesture callbacks.
//!
//! Callbacks registered once (drag monitors, menu handlers) read the board
//! through this cell instead of capturing a snapshot that goes stale. The
//! owning service writes it on every commit; nothing else does.

use crate::model::board::Board;
use std::sync::{Arc, RwLock};

/// Shared single-slot cell holding the most recent committed board.
#[derive(Debug, Clone)]
pub struct SnapshotCell {
    slot: Arc<RwLock<Arc<Board>>>,
}

impl SnapshotCell {
    pub fn new(board: Board) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Arc::new(board))),
        }
    }

    /// Current board. Cheap: clones an `Arc`.
    pub fn read(&self) -> Arc<Board> {
        match self.slot.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub(crate) fn write(&self, board: Board) {
        let next = Arc::new(board);
        match self.slot.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SnapshotCell;
    use crate::model::board::{Board, Column, Item};

    #[test]
    fn clones_observe_later_writes() {
        let first = Board::new(vec![Column::new("a", "A", vec![])]).expect("valid board");
        let second = Board::new(vec![Column::new("a", "A", vec![Item::new("x", "X")])])
            .expect("valid board");

        let cell = SnapshotCell::new(first);
        let reader = cell.clone();
        assert_eq!(reader.read().item_count(), 0);

        cell.write(second);
        assert_eq!(reader.read().item_count(), 1);
    }
}
