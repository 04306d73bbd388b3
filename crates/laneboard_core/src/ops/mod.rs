//! Board state transitions.
//!
//! # Responsibility
//! - Turn one validated request into the next board snapshot.
//! - Report benign no-ops without recording an outcome.
//!
//! # Invariants
//! - Every function here is pure: `(&Board, args) -> Transition`.
//! - Errors mean a caller bug; the input board is never partially changed.

use crate::model::board::Board;
use crate::model::outcome::Outcome;

pub mod card;
pub mod column;
pub mod multi_drag;

pub use card::{move_card, reorder_card};
pub use column::reorder_column;
pub use multi_drag::{canonical_order, multi_drag_reorder};

/// Result of applying one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Next snapshot (identical to the input for no-ops).
    pub board: Board,
    /// Outcome recorded on `board`, `None` when nothing changed.
    pub outcome: Option<Outcome>,
}

impl Transition {
    pub(crate) fn changed(board: Board) -> Self {
        let outcome = board.last_operation().cloned();
        Self { board, outcome }
    }

    pub(crate) fn unchanged(board: &Board) -> Self {
        Self {
            board: board.clone(),
            outcome: None,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.outcome.is_none()
    }
}
