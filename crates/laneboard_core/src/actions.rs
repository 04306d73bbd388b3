//! Keyboard and menu move actions.
//!
//! # Responsibility
//! - List the move actions available for one card or column and whether each
//!   is enabled at its current position.
//! - Map an action onto the same operations a drag would use.
//!
//! # Invariants
//! - Disabled actions apply as no-ops.
//! - Upward and leftward moves use `Edge::Before`; downward and rightward
//!   moves use `Edge::After`; moving to another column inserts at the front.

use crate::error::{EngineError, EngineResult};
use crate::model::board::{Board, ColumnId, ItemId};
use crate::model::edge::Edge;
use crate::ops::{move_card, reorder_card, reorder_column, Transition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardAction {
    MoveToTop,
    MoveUp,
    MoveDown,
    MoveToBottom,
    MoveToColumn { column_id: ColumnId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnAction {
    MoveLeft,
    MoveRight,
}

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableAction<A> {
    pub action: A,
    pub enabled: bool,
}

/// Menu entries for the card `item_id`, in display order.
pub fn card_actions(board: &Board, item_id: &ItemId) -> EngineResult<Vec<AvailableAction<CardAction>>> {
    let location = board.require_item(item_id)?;
    let column = board.require_column(&location.column_id)?;
    let not_first = location.index > 0;
    let not_last = location.index + 1 < column.len();

    let mut entries = vec![
        AvailableAction {
            action: CardAction::MoveToTop,
            enabled: not_first,
        },
        AvailableAction {
            action: CardAction::MoveUp,
            enabled: not_first,
        },
        AvailableAction {
            action: CardAction::MoveDown,
            enabled: not_last,
        },
        AvailableAction {
            action: CardAction::MoveToBottom,
            enabled: not_last,
        },
    ];
    entries.extend(
        board
            .ordered_column_ids()
            .iter()
            .filter(|column_id| **column_id != location.column_id)
            .map(|column_id| AvailableAction {
                action: CardAction::MoveToColumn {
                    column_id: column_id.clone(),
                },
                enabled: true,
            }),
    );
    Ok(entries)
}

/// Menu entries for the column `column_id`.
pub fn column_actions(
    board: &Board,
    column_id: &ColumnId,
) -> EngineResult<Vec<AvailableAction<ColumnAction>>> {
    let (index, count) = column_position(board, column_id)?;
    Ok(vec![
        AvailableAction {
            action: ColumnAction::MoveLeft,
            enabled: index > 0,
        },
        AvailableAction {
            action: ColumnAction::MoveRight,
            enabled: index + 1 < count,
        },
    ])
}

/// Applies `action` to the card `item_id`.
pub fn apply_card_action(board: &Board, item_id: &ItemId, action: &CardAction) -> EngineResult<Transition> {
    let location = board.require_item(item_id)?;
    let len = board.require_column(&location.column_id)?.len();
    let index = location.index;
    let last = len.saturating_sub(1);

    let reorder_to = |target: usize, edge: Edge| {
        reorder_card(board, &location.column_id, index, target, Some(edge))
    };
    match action {
        CardAction::MoveToTop if index > 0 => reorder_to(0, Edge::Before),
        CardAction::MoveUp if index > 0 => reorder_to(index - 1, Edge::Before),
        CardAction::MoveDown if index < last => reorder_to(index + 1, Edge::After),
        CardAction::MoveToBottom if index < last => reorder_to(last, Edge::After),
        CardAction::MoveToColumn { column_id } if *column_id != location.column_id => {
            move_card(board, &location.column_id, column_id, index, None)
        }
        _ => Ok(Transition::unchanged(board)),
    }
}

/// Applies `action` to the column `column_id`.
pub fn apply_column_action(
    board: &Board,
    column_id: &ColumnId,
    action: ColumnAction,
) -> EngineResult<Transition> {
    let (index, count) = column_position(board, column_id)?;
    match action {
        ColumnAction::MoveLeft if index > 0 => {
            reorder_column(board, index, index - 1, Some(Edge::Before))
        }
        ColumnAction::MoveRight if index + 1 < count => {
            reorder_column(board, index, index + 1, Some(Edge::After))
        }
        _ => Ok(Transition::unchanged(board)),
    }
}

fn column_position(board: &Board, column_id: &ColumnId) -> EngineResult<(usize, usize)> {
    let index = board
        .column_index(column_id)
        .ok_or_else(|| EngineError::ColumnNotFound(column_id.clone()))?;
    Ok((index, board.column_count()))
}

#[cfg(test)]
mod tests {
    use super::{apply_card_action, apply_column_action, card_actions, column_actions, CardAction, ColumnAction};
    use crate::model::board::{Board, Column, ColumnId, Item, ItemId};

    fn board() -> Board {
        Board::new(vec![
            Column::new(
                "todo",
                "Todo",
                vec![Item::new("a", "A"), Item::new("b", "B"), Item::new("c", "C")],
            ),
            Column::new("doing", "Doing", vec![]),
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
    fn first_card_cannot_move_up() {
        let entries = card_actions(&board(), &ItemId::from("a")).expect("a exists");
        let enabled = entries
            .iter()
            .map(|entry| (entry.action.clone(), entry.enabled))
            .collect::<Vec<_>>();
        assert_eq!(enabled[0], (CardAction::MoveToTop, false));
        assert_eq!(enabled[1], (CardAction::MoveUp, false));
        assert_eq!(enabled[3], (CardAction::MoveToBottom, true));
        assert_eq!(entries.len(), 6);
    }

    #[test]
    fn vertical_moves_land_where_expected() {
        let board = board();
        let top = apply_card_action(&board, &ItemId::from("c"), &CardAction::MoveToTop)
            .expect("valid action");
        assert_eq!(ids(&top.board, "todo"), vec!["c", "a", "b"]);

        let down = apply_card_action(&board, &ItemId::from("a"), &CardAction::MoveDown)
            .expect("valid action");
        assert_eq!(ids(&down.board, "todo"), vec!["b", "a", "c"]);

        let bottom = apply_card_action(&board, &ItemId::from("a"), &CardAction::MoveToBottom)
            .expect("valid action");
        assert_eq!(ids(&bottom.board, "todo"), vec!["b", "c", "a"]);
    }

    #[test]
    fn move_to_column_inserts_at_front() {
        let action = CardAction::MoveToColumn {
            column_id: ColumnId::from("done"),
        };
        let transition =
            apply_card_action(&board(), &ItemId::from("b"), &action).expect("valid action");
        assert_eq!(ids(&transition.board, "done"), vec!["b", "d"]);
    }

    #[test]
    fn disabled_actions_are_noops() {
        let board = board();
        let up = apply_card_action(&board, &ItemId::from("a"), &CardAction::MoveUp)
            .expect("valid action");
        assert!(up.is_noop());

        let right = apply_column_action(&board, &ColumnId::from("done"), ColumnAction::MoveRight)
            .expect("valid action");
        assert!(right.is_noop());
        assert_eq!(right.board, board);
    }

    #[test]
    fn column_moves_swap_neighbours() {
        let board = board();
        let entries = column_actions(&board, &ColumnId::from("todo")).expect("todo exists");
        assert!(!entries[0].enabled);
        assert!(entries[1].enabled);

        let moved = apply_column_action(&board, &ColumnId::from("todo"), ColumnAction::MoveRight)
            .expect("valid action");
        let order = moved
            .board
            .ordered_column_ids()
            .iter()
            .map(ColumnId::as_str)
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["doing", "todo", "done"]);
    }
}
