//! Batched move of several selected items.
//!
//! # Responsibility
//! - Remove every selected item, then reinsert them contiguously at one
//!   destination slot.
//!
//! # Invariants
//! - The dragged item always leads the moved block.
//! - Remaining moved items keep their pre-removal board order (column order,
//!   then index).
//! - `final_index` is taken as-is; callers account for removal shifts.

use crate::error::{EngineError, EngineResult};
use crate::model::board::{Board, Column, ColumnId, Item, ItemId};
use crate::model::outcome::Outcome;
use crate::ops::Transition;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Orders the moving set: dragged id first, the rest by board position.
///
/// Duplicate ids collapse to their first occurrence. Ids missing from the
/// board sort last in selection order.
pub fn canonical_order(board: &Board, selected_ids: &[ItemId], dragged_id: &ItemId) -> Vec<ItemId> {
    let positions = board
        .columns()
        .enumerate()
        .flat_map(|(column_index, column)| {
            column
                .item_ids()
                .enumerate()
                .map(move |(index, id)| (id, (column_index, index)))
        })
        .collect::<HashMap<_, _>>();
    let position_of = |id: &ItemId| {
        positions
            .get(id)
            .copied()
            .unwrap_or((usize::MAX, usize::MAX))
    };

    let mut seen = HashSet::new();
    let mut ordered = selected_ids
        .iter()
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect::<Vec<_>>();

    // Stable sort: equal positions keep selection order.
    ordered.sort_by(|a, b| match (a == dragged_id, b == dragged_id) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => position_of(a).cmp(&position_of(b)),
    });
    ordered
}

/// Moves every selected item into `destination_column_id` at `final_index`.
///
/// # Errors
/// - `EmptySelection` / `DraggedItemNotSelected` for malformed selections.
/// - `ItemNotFound` / `ColumnNotFound` for unknown ids.
/// - `IndexOutOfBounds` when `final_index` exceeds the destination length
///   after removal.
pub fn multi_drag_reorder(
    board: &Board,
    selected_ids: &[ItemId],
    dragged_id: &ItemId,
    destination_column_id: &ColumnId,
    final_index: usize,
) -> EngineResult<Transition> {
    if selected_ids.is_empty() {
        return Err(EngineError::EmptySelection);
    }
    if !selected_ids.contains(dragged_id) {
        return Err(EngineError::DraggedItemNotSelected(dragged_id.clone()));
    }
    board.require_column(destination_column_id)?;
    for id in selected_ids {
        board.require_item(id)?;
    }

    let ordered_ids = canonical_order(board, selected_ids, dragged_id);
    let moving = ordered_ids
        .iter()
        .filter_map(|id| board.item(id).cloned())
        .collect::<Vec<Item>>();

    let selected = selected_ids.iter().collect::<HashSet<_>>();
    let mut filtered = board
        .columns()
        .map(|column| {
            let items = column
                .items
                .iter()
                .filter(|item| !selected.contains(&item.id))
                .cloned()
                .collect();
            column.with_items(items)
        })
        .collect::<Vec<Column>>();

    let destination = filtered
        .iter_mut()
        .find(|column| &column.column_id == destination_column_id)
        .ok_or_else(|| EngineError::ColumnNotFound(destination_column_id.clone()))?;
    if final_index > destination.items.len() {
        return Err(EngineError::IndexOutOfBounds {
            context: "multi-drag final",
            index: final_index,
            len: destination.items.len(),
        });
    }
    let tail = destination.items.split_off(final_index);
    destination.items.extend(moving);
    destination.items.extend(tail);

    let unchanged = filtered
        .iter()
        .all(|column| board.column(&column.column_id) == Some(column));
    if unchanged {
        return Ok(Transition::unchanged(board));
    }

    let outcome = Outcome::MultiCardDrag {
        selected_ids: ordered_ids,
        dragged_id: dragged_id.clone(),
        destination_column_id: destination_column_id.clone(),
        final_index,
    };
    Ok(Transition::changed(board.with_replaced_columns(filtered, outcome)))
}
