//! Deterministic sample boards for demos and tests.
//!
//! Items are generated from a position counter, never from randomness, so the
//! same call always yields the same board.

use crate::error::EngineResult;
use crate::model::board::{Board, Column, Item};

const NAMES: &[&str] = &[
    "Alexander", "Aliza", "Alvin", "Angie", "Arjun", "Blair", "Claudia", "Colin", "Ed", "Effie",
    "Eliot", "Fabian", "Gael", "Gerard", "Hasan", "Helena", "Ivan", "Katina", "Lara", "Leo",
    "Lydia", "Maribel", "Milo", "Myra", "Narul", "Norah", "Oliver", "Rahul", "Renato", "Steve",
    "Tanya", "Tori", "Vania",
];

const ROLES: &[&str] = &[
    "Engineer",
    "Senior Engineer",
    "Principal Engineer",
    "Engineering Manager",
    "Designer",
    "Senior Designer",
    "Lead Designer",
    "Design Manager",
    "Content Designer",
    "Product Manager",
    "Program Manager",
];

const SAMPLE_ITEMS_PER_COLUMN: usize = 10;

/// Person card for one generator position.
pub fn person_at(position: usize) -> Item {
    let name = NAMES[position % NAMES.len()];
    let role = ROLES[position % ROLES.len()];
    Item::new(format!("id:{position}"), name).with_detail(role)
}

/// `amount` consecutive person cards starting at `start`.
pub fn people_from(start: usize, amount: usize) -> Vec<Item> {
    (start..start + amount).map(person_at).collect()
}

/// Three product columns with ten people each, ids `id:1` to `id:30`.
pub fn sample_board() -> EngineResult<Board> {
    let columns = [
        ("confluence", "Confluence"),
        ("jira", "Jira"),
        ("trello", "Trello"),
    ]
    .into_iter()
    .enumerate()
    .map(|(offset, (column_id, title))| {
        Column::new(
            column_id,
            title,
            people_from(1 + offset * SAMPLE_ITEMS_PER_COLUMN, SAMPLE_ITEMS_PER_COLUMN),
        )
    })
    .collect();
    Board::new(columns)
}

/// `column_count` columns named `column-<n>` with `items_per_column` people each.
pub fn generated_board(column_count: usize, items_per_column: usize) -> EngineResult<Board> {
    let columns = (0..column_count)
        .map(|index| {
            Column::new(
                format!("column-{index}"),
                format!("Column {index}"),
                people_from(1 + index * items_per_column, items_per_column),
            )
        })
        .collect();
    Board::new(columns)
}

#[cfg(test)]
mod tests {
    use super::{generated_board, person_at, sample_board};
    use crate::model::board::ColumnId;

    #[test]
    fn sample_board_is_stable() {
        let board = sample_board().expect("sample board is valid");
        assert_eq!(board.column_count(), 3);
        assert_eq!(board.item_count(), 30);
        let jira = board
            .column(&ColumnId::from("jira"))
            .expect("jira column exists");
        assert_eq!(jira.items[0].id.as_str(), "id:11");
        assert_eq!(person_at(1), person_at(1));
    }

    #[test]
    fn generated_board_uses_numbered_columns() {
        let board = generated_board(4, 2).expect("generated board is valid");
        let ids = board
            .ordered_column_ids()
            .iter()
            .map(ColumnId::as_str)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["column-0", "column-1", "column-2", "column-3"]);
        assert_eq!(board.item_count(), 8);
    }
}
