//! Column reorder.

use crate::error::{EngineError, EngineResult};
use crate::model::board::Board;
use crate::model::edge::{Axis, Edge};
use crate::model::outcome::Outcome;
use crate::ops::Transition;
use crate::order::reorder::reorder_with_edge;

/// Moves the column at `start_index` relative to the column at `finish_index`.
///
/// Records `column-reorder` with the id that sat at `start_index` before the
/// move and the index it landed on. Returns an unchanged transition when the
/// order would not change.
pub fn reorder_column(
    board: &Board,
    start_index: usize,
    finish_index: usize,
    edge: Option<Edge>,
) -> EngineResult<Transition> {
    let ordered = board.ordered_column_ids();
    let column_id = ordered
        .get(start_index)
        .cloned()
        .ok_or(EngineError::IndexOutOfBounds {
            context: "column start",
            index: start_index,
            len: ordered.len(),
        })?;

    let reordered = reorder_with_edge(ordered, start_index, finish_index, edge, Axis::Horizontal)?;
    if reordered.as_slice() == ordered {
        return Ok(Transition::unchanged(board));
    }

    let landed_at = reordered
        .iter()
        .position(|candidate| *candidate == column_id)
        .unwrap_or(start_index);
    let outcome = Outcome::ColumnReorder {
        column_id,
        start_index,
        finish_index: landed_at,
    };
    Ok(Transition::changed(board.with_column_order(reordered, outcome)))
}
