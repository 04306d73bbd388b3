//! Engine error contract.
//!
//! # Responsibility
//! - Describe caller/integration bugs detected by board operations.
//!
//! # Invariants
//! - An operation that returns an error leaves the committed board untouched.
//! - Benign no-ops are never reported as errors.

use crate::model::board::{ColumnId, ItemId};
use crate::order::reorder::ReorderError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Invariant violations surfaced by the board engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Column or item identifier is blank.
    EmptyId,
    /// Column id appears more than once while building a board.
    DuplicateColumnId(ColumnId),
    /// Item id appears more than once across the board.
    DuplicateItemId(ItemId),
    /// Referenced column does not exist.
    ColumnNotFound(ColumnId),
    /// Referenced item does not exist in any column.
    ItemNotFound(ItemId),
    /// Index does not address a valid slot.
    IndexOutOfBounds {
        context: &'static str,
        index: usize,
        len: usize,
    },
    /// Multi-drag was requested with no selected items.
    EmptySelection,
    /// Multi-drag dragged item is not part of the selection.
    DraggedItemNotSelected(ItemId),
    /// Drop target list does not match any supported gesture shape.
    UnexpectedDropTargets {
        source: &'static str,
        count: usize,
    },
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "identifier must not be blank"),
            Self::DuplicateColumnId(id) => write!(f, "duplicate column id: {id}"),
            Self::DuplicateItemId(id) => write!(f, "duplicate item id: {id}"),
            Self::ColumnNotFound(id) => write!(f, "column not found: {id}"),
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::IndexOutOfBounds {
                context,
                index,
                len,
            } => write!(f, "{context} index {index} out of bounds for length {len}"),
            Self::EmptySelection => write!(f, "multi-drag requires at least one selected item"),
            Self::DraggedItemNotSelected(id) => {
                write!(f, "dragged item is not part of the selection: {id}")
            }
            Self::UnexpectedDropTargets { source, count } => {
                write!(f, "unsupported drop of {source} onto {count} target(s)")
            }
        }
    }
}

impl Error for EngineError {}

impl From<ReorderError> for EngineError {
    fn from(value: ReorderError) -> Self {
        match value {
            ReorderError::StartOutOfBounds { index, len } => Self::IndexOutOfBounds {
                context: "start",
                index,
                len,
            },
            ReorderError::TargetOutOfBounds { index, len } => Self::IndexOutOfBounds {
                context: "target",
                index,
                len,
            },
        }
    }
}
