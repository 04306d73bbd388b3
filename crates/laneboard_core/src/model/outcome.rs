//! Record of the most recent applied operation.
//!
//! Downstream feedback (flash, focus restore) reads this; the engine never
//! branches on it.

use crate::model::board::{ColumnId, ItemId};
use serde::{Deserialize, Serialize};

/// Tagged description of what the last committed operation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Outcome {
    ColumnReorder {
        /// Column that was at `start_index` before the move.
        column_id: ColumnId,
        start_index: usize,
        /// Landing index of the moved column.
        finish_index: usize,
    },
    CardReorder {
        column_id: ColumnId,
        start_index: usize,
        /// Landing index of the moved item.
        finish_index: usize,
    },
    CardMove {
        finish_column_id: ColumnId,
        item_index_in_start_column: usize,
        item_index_in_finish_column: usize,
    },
    MultiCardDrag {
        /// Moved ids in their final relative order, dragged id first.
        selected_ids: Vec<ItemId>,
        dragged_id: ItemId,
        destination_column_id: ColumnId,
        final_index: usize,
    },
}

impl Outcome {
    /// Stable kind label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ColumnReorder { .. } => "column-reorder",
            Self::CardReorder { .. } => "card-reorder",
            Self::CardMove { .. } => "card-move",
            Self::MultiCardDrag { .. } => "multi-card-drag",
        }
    }
}
