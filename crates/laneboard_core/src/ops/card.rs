//! Single-item operations: in-column reorder and cross-column move.

use crate::error::{EngineError, EngineResult};
use crate::model::board::{Board, ColumnId};
use crate::model::edge::{Axis, Edge};
use crate::model::outcome::Outcome;
use crate::ops::Transition;
use crate::order::reorder::reorder_with_edge;

/// Reorders one item inside `column_id`.
///
/// `finish_index` is the index of the drop target; the recorded outcome
/// carries the index the item actually landed on.
pub fn reorder_card(
    board: &Board,
    column_id: &ColumnId,
    start_index: usize,
    finish_index: usize,
    edge: Option<Edge>,
) -> EngineResult<Transition> {
    let column = board.require_column(column_id)?;
    let reordered = reorder_with_edge(&column.items, start_index, finish_index, edge, Axis::Vertical)?;
    if reordered == column.items {
        return Ok(Transition::unchanged(board));
    }

    let moved_id = &column.items[start_index].id;
    let landed_at = reordered
        .iter()
        .position(|item| &item.id == moved_id)
        .unwrap_or(start_index);

    let outcome = Outcome::CardReorder {
        column_id: column_id.clone(),
        start_index,
        finish_index: landed_at,
    };
    let updated = column.with_items(reordered);
    Ok(Transition::changed(board.with_replaced_columns([updated], outcome)))
}

/// Moves one item from `start_column_id` into a different column.
///
/// Inserts at `index_in_finish` when given, otherwise at the front. Moving
/// within one column is a no-op here; same-column repositioning goes through
/// [`reorder_card`].
pub fn move_card(
    board: &Board,
    start_column_id: &ColumnId,
    finish_column_id: &ColumnId,
    index_in_start: usize,
    index_in_finish: Option<usize>,
) -> EngineResult<Transition> {
    if start_column_id == finish_column_id {
        return Ok(Transition::unchanged(board));
    }

    let source = board.require_column(start_column_id)?;
    let destination = board.require_column(finish_column_id)?;
    if index_in_start >= source.len() {
        return Err(EngineError::IndexOutOfBounds {
            context: "source item",
            index: index_in_start,
            len: source.len(),
        });
    }
    let destination_index = index_in_finish.unwrap_or(0);
    if destination_index > destination.len() {
        return Err(EngineError::IndexOutOfBounds {
            context: "destination item",
            index: destination_index,
            len: destination.len(),
        });
    }

    let mut source_items = source.items.clone();
    let item = source_items.remove(index_in_start);
    let mut destination_items = destination.items.clone();
    destination_items.insert(destination_index, item);

    let outcome = Outcome::CardMove {
        finish_column_id: finish_column_id.clone(),
        item_index_in_start_column: index_in_start,
        item_index_in_finish_column: destination_index,
    };
    Ok(Transition::changed(board.with_replaced_columns(
        [
            source.with_items(source_items),
            destination.with_items(destination_items),
        ],
        outcome,
    )))
}

#[cfg(test)]
mod tests {
    use super::{move_card, reorder_card};
    use crate::error::EngineError;
    use crate::model::board::{Board, Column, ColumnId, Item};
    use crate::model::edge::Edge;
    use crate::model::outcome::Outcome;

    fn board() -> Board {
        Board::new(vec![
            Column::new(
                "todo",
                "Todo",
                vec![Item::new("a", "A"), Item::new("b", "B"), Item::new("c", "C")],
            ),
            Column::new("done", "Done", vec![Item::new("d", "D")]),
        ])
        .expect("valid board")
    }

    fn ids(board: &Board, column: &str) -> Vec<String> {
        board
            .column(&ColumnId::from(column))
            .expect("column exists")
            .item_ids()
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn reorder_records_landing_index() {
        let todo = ColumnId::from("todo");
        let transition =
            reorder_card(&board(), &todo, 0, 2, Some(Edge::Before)).expect("valid reorder");
        assert_eq!(ids(&transition.board, "todo"), vec!["b", "a", "c"]);
        assert_eq!(
            transition.outcome,
            Some(Outcome::CardReorder {
                column_id: todo,
                start_index: 0,
                finish_index: 1,
            })
        );
        assert_eq!(ids(&transition.board, "done"), vec!["d"]);
    }

    #[test]
    fn reorder_to_same_index_is_noop() {
        let board = board();
        let transition =
            reorder_card(&board, &ColumnId::from("todo"), 1, 1, None).expect("valid no-op");
        assert!(transition.is_noop());
        assert_eq!(transition.board, board);
    }

    #[test]
    fn move_defaults_to_front_of_destination() {
        let transition = move_card(
            &board(),
            &ColumnId::from("todo"),
            &ColumnId::from("done"),
            1,
            None,
        )
        .expect("valid move");
        assert_eq!(ids(&transition.board, "todo"), vec!["a", "c"]);
        assert_eq!(ids(&transition.board, "done"), vec!["b", "d"]);
        assert_eq!(
            transition.outcome,
            Some(Outcome::CardMove {
                finish_column_id: ColumnId::from("done"),
                item_index_in_start_column: 1,
                item_index_in_finish_column: 0,
            })
        );
    }

    #[test]
    fn move_within_one_column_is_noop() {
        let board = board();
        let todo = ColumnId::from("todo");
        let transition = move_card(&board, &todo, &todo, 0, Some(2)).expect("valid no-op");
        assert!(transition.is_noop());
        assert_eq!(transition.board, board);
    }

    #[test]
    fn move_rejects_unknown_column_and_bad_index() {
        let board = board();
        let missing = move_card(
            &board,
            &ColumnId::from("todo"),
            &ColumnId::from("nope"),
            0,
            None,
        )
        .expect_err("unknown destination");
        assert_eq!(missing, EngineError::ColumnNotFound(ColumnId::from("nope")));

        let too_far = move_card(
            &board,
            &ColumnId::from("todo"),
            &ColumnId::from("done"),
            0,
            Some(5),
        )
        .expect_err("destination index past end");
        assert!(matches!(too_far, EngineError::IndexOutOfBounds { index: 5, .. }));
    }
}
