//! Post-move feedback resolution.
//!
//! Turns the outcome of the last commit into the ids the presentation layer
//! should highlight once the new board is rendered.

use crate::model::board::{Board, ColumnId, ItemId};
use crate::model::outcome::Outcome;
use serde::Serialize;

/// Element to flash after a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FeedbackTarget {
    Column {
        column_id: ColumnId,
    },
    Item {
        item_id: ItemId,
        /// Set when the element remounted and lost focus.
        restore_focus: bool,
    },
}

/// Resolves `outcome` against the board it produced.
///
/// Positions that no longer hold the expected item are skipped.
pub fn feedback_for(board: &Board, outcome: &Outcome) -> Vec<FeedbackTarget> {
    match outcome {
        Outcome::ColumnReorder { column_id, .. } => board
            .column(column_id)
            .map(|column| FeedbackTarget::Column {
                column_id: column.column_id.clone(),
            })
            .into_iter()
            .collect(),
        Outcome::CardReorder {
            column_id,
            finish_index,
            ..
        } => item_at(board, column_id, *finish_index)
            .map(|item_id| FeedbackTarget::Item {
                item_id,
                restore_focus: false,
            })
            .into_iter()
            .collect(),
        Outcome::CardMove {
            finish_column_id,
            item_index_in_finish_column,
            ..
        } => item_at(board, finish_column_id, *item_index_in_finish_column)
            .map(|item_id| FeedbackTarget::Item {
                item_id,
                restore_focus: true,
            })
            .into_iter()
            .collect(),
        Outcome::MultiCardDrag {
            selected_ids,
            destination_column_id,
            final_index,
            ..
        } => selected_ids
            .iter()
            .enumerate()
            .filter(|(offset, id)| {
                item_at(board, destination_column_id, final_index + offset).as_ref() == Some(*id)
            })
            .map(|(_, id)| FeedbackTarget::Item {
                item_id: id.clone(),
                restore_focus: false,
            })
            .collect(),
    }
}

fn item_at(board: &Board, column_id: &ColumnId, index: usize) -> Option<ItemId> {
    board
        .column(column_id)
        .and_then(|column| column.items.get(index))
        .map(|item| item.id.clone())
}
