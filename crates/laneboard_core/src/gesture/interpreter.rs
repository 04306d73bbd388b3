//! Drop classification and dispatch.
//!
//! # Responsibility
//! - Map one drop event onto column reorder, card reorder, card move or a
//!   multi-item batch.
//! - Compute batch insertion indices so removal does not shift the drop point.
//!
//! # Invariants
//! - Classification reads the board and selection but never changes them.
//! - Batch moves apply only when more than one item is selected and the
//!   dragged item is part of that selection.

use crate::error::{EngineError, EngineResult};
use crate::gesture::event::{DragSource, DropEvent, DropTarget, DropTargetKind};
use crate::gesture::session::SessionToken;
use crate::model::board::{Board, ColumnId, ItemId};
use crate::model::edge::Edge;
use crate::ops::{move_card, multi_drag_reorder, reorder_card, reorder_column, Transition};
use crate::selection::SelectionSet;

/// The single operation a drop resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    /// Source belongs to another board session.
    Ignored,
    /// Released over no target.
    Cancelled,
    ReorderColumn {
        start_index: usize,
        finish_index: usize,
        edge: Option<Edge>,
    },
    ReorderCard {
        column_id: ColumnId,
        start_index: usize,
        finish_index: usize,
        edge: Option<Edge>,
    },
    MoveCard {
        start_column_id: ColumnId,
        finish_column_id: ColumnId,
        index_in_start: usize,
        index_in_finish: Option<usize>,
    },
    MultiDrag {
        selected_ids: Vec<ItemId>,
        dragged_id: ItemId,
        destination_column_id: ColumnId,
        final_index: usize,
    },
}

impl DropAction {
    /// Runs the classified operation against `board`.
    pub fn apply(&self, board: &Board) -> EngineResult<Transition> {
        match self {
            Self::Ignored | Self::Cancelled => Ok(Transition::unchanged(board)),
            Self::ReorderColumn {
                start_index,
                finish_index,
                edge,
            } => reorder_column(board, *start_index, *finish_index, *edge),
            Self::ReorderCard {
                column_id,
                start_index,
                finish_index,
                edge,
            } => reorder_card(board, column_id, *start_index, *finish_index, *edge),
            Self::MoveCard {
                start_column_id,
                finish_column_id,
                index_in_start,
                index_in_finish,
            } => move_card(
                board,
                start_column_id,
                finish_column_id,
                *index_in_start,
                *index_in_finish,
            ),
            Self::MultiDrag {
                selected_ids,
                dragged_id,
                destination_column_id,
                final_index,
            } => multi_drag_reorder(
                board,
                selected_ids,
                dragged_id,
                destination_column_id,
                *final_index,
            ),
        }
    }

    pub fn is_multi_drag(&self) -> bool {
        matches!(self, Self::MultiDrag { .. })
    }

    /// Label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Cancelled => "cancelled",
            Self::ReorderColumn { .. } => "reorder_column",
            Self::ReorderCard { .. } => "reorder_card",
            Self::MoveCard { .. } => "move_card",
            Self::MultiDrag { .. } => "multi_drag",
        }
    }
}

/// Selection to keep when a drag starts.
///
/// Dragging an item outside the current selection drags only that item.
pub fn selection_at_drag_start(selection: &SelectionSet, source: &DragSource) -> SelectionSet {
    match source {
        DragSource::Card { item_id, .. } if !selection.contains(item_id) => SelectionSet::new(),
        _ => selection.clone(),
    }
}

/// Insertion index for a batch dropped at `insertion_point` of the
/// destination's current (pre-removal) item list.
///
/// Selected items sitting before the insertion point vanish during removal,
/// so the point moves back by that many slots, never below zero.
pub fn batch_final_index(
    board: &Board,
    selection: &SelectionSet,
    destination_column_id: &ColumnId,
    insertion_point: usize,
) -> usize {
    let Some(column) = board.column(destination_column_id) else {
        return insertion_point;
    };
    let removed_before = column.items[..insertion_point.min(column.len())]
        .iter()
        .filter(|item| selection.contains(&item.id))
        .count();
    insertion_point.saturating_sub(removed_before)
}

/// Classifies one drop event for the board owned by `session`.
///
/// # Errors
/// - `UnexpectedDropTargets` when the target list has an unsupported shape.
/// - `ColumnNotFound` / `ItemNotFound` when payload ids are stale.
pub fn interpret_drop(
    board: &Board,
    selection: &SelectionSet,
    session: SessionToken,
    event: &DropEvent,
) -> EngineResult<DropAction> {
    if event.source.session() != session {
        return Ok(DropAction::Ignored);
    }
    let targets = event
        .targets
        .iter()
        .filter(|target| target.session == session)
        .collect::<Vec<_>>();
    if targets.is_empty() {
        return Ok(DropAction::Cancelled);
    }

    match &event.source {
        DragSource::Column { column_id, .. } => interpret_column_drop(board, column_id, &targets),
        DragSource::Card { item_id, .. } => {
            interpret_card_drop(board, selection, item_id, &targets)
        }
    }
}

fn interpret_column_drop(
    board: &Board,
    column_id: &ColumnId,
    targets: &[&DropTarget],
) -> EngineResult<DropAction> {
    let unexpected = || EngineError::UnexpectedDropTargets {
        source: "column",
        count: targets.len(),
    };
    let [target] = targets else {
        return Err(unexpected());
    };
    let DropTargetKind::Column {
        column_id: target_column_id,
    } = &target.kind
    else {
        return Err(unexpected());
    };

    let start_index = board
        .column_index(column_id)
        .ok_or_else(|| EngineError::ColumnNotFound(column_id.clone()))?;
    let finish_index = board
        .column_index(target_column_id)
        .ok_or_else(|| EngineError::ColumnNotFound(target_column_id.clone()))?;
    Ok(DropAction::ReorderColumn {
        start_index,
        finish_index,
        edge: target.edge,
    })
}

fn interpret_card_drop(
    board: &Board,
    selection: &SelectionSet,
    item_id: &ItemId,
    targets: &[&DropTarget],
) -> EngineResult<DropAction> {
    let unexpected = || EngineError::UnexpectedDropTargets {
        source: "card",
        count: targets.len(),
    };
    let origin = board.require_item(item_id)?;
    let batch = selection.len() > 1 && selection.contains(item_id);

    match targets {
        // Column body: append semantics.
        [column_target] => {
            let DropTargetKind::Column { column_id } = &column_target.kind else {
                return Err(unexpected());
            };
            let destination = board.require_column(column_id)?;

            if batch {
                return Ok(multi_drag_action(
                    board,
                    selection,
                    item_id,
                    column_id,
                    destination.len(),
                ));
            }
            if origin.column_id == *column_id {
                return Ok(DropAction::ReorderCard {
                    column_id: column_id.clone(),
                    start_index: origin.index,
                    finish_index: destination.len().saturating_sub(1),
                    edge: None,
                });
            }
            Ok(DropAction::MoveCard {
                start_column_id: origin.column_id,
                finish_column_id: column_id.clone(),
                index_in_start: origin.index,
                index_in_finish: Some(destination.len()),
            })
        }
        // Card inside its column: relative semantics.
        [card_target, column_target] => {
            let (
                DropTargetKind::Card {
                    item_id: target_item_id,
                },
                DropTargetKind::Column { column_id },
            ) = (&card_target.kind, &column_target.kind)
            else {
                return Err(unexpected());
            };
            let destination = board.require_column(column_id)?;
            let target_index = destination
                .index_of(target_item_id)
                .ok_or_else(|| EngineError::ItemNotFound(target_item_id.clone()))?;
            let edge = card_target.edge;
            let after = usize::from(edge == Some(Edge::After));

            if batch {
                return Ok(multi_drag_action(
                    board,
                    selection,
                    item_id,
                    column_id,
                    target_index + after,
                ));
            }
            if origin.column_id == *column_id {
                return Ok(DropAction::ReorderCard {
                    column_id: column_id.clone(),
                    start_index: origin.index,
                    finish_index: target_index,
                    edge,
                });
            }
            Ok(DropAction::MoveCard {
                start_column_id: origin.column_id,
                finish_column_id: column_id.clone(),
                index_in_start: origin.index,
                index_in_finish: Some(target_index + after),
            })
        }
        _ => Err(unexpected()),
    }
}

fn multi_drag_action(
    board: &Board,
    selection: &SelectionSet,
    dragged_id: &ItemId,
    destination_column_id: &ColumnId,
    insertion_point: usize,
) -> DropAction {
    DropAction::MultiDrag {
        selected_ids: selection.ids().to_vec(),
        dragged_id: dragged_id.clone(),
        destination_column_id: destination_column_id.clone(),
        final_index: batch_final_index(board, selection, destination_column_id, insertion_point),
    }
}
