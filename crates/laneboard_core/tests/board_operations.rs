use laneboard_core::{Board, BoardService, Column, ColumnId, Edge, EngineError, Item, Outcome};

fn board() -> Board {
    Board::new(vec![
        Column::new(
            "todo",
            "Todo",
            vec![Item::new("t1", "Write"), Item::new("t2", "Review"), Item::new("t3", "Ship")],
        ),
        Column::new("doing", "Doing", vec![Item::new("d1", "Fix")]),
        Column::new("done", "Done", vec![]),
    ])
    .expect("fixture board is valid")
}

fn item_ids(service: &BoardService, column: &str) -> Vec<String> {
    service
        .board()
        .column(&ColumnId::from(column))
        .expect("column exists")
        .item_ids()
        .map(|id| id.to_string())
        .collect()
}

fn column_order(service: &BoardService) -> Vec<String> {
    service.columns().map(|column| column.column_id.to_string()).collect()
}

#[test]
fn board_rejects_duplicate_ids() {
    let duplicate_column = Board::new(vec![
        Column::new("a", "A", vec![]),
        Column::new("a", "Again", vec![]),
    ])
    .expect_err("duplicate column id");
    assert_eq!(duplicate_column, EngineError::DuplicateColumnId(ColumnId::from("a")));

    let duplicate_item = Board::new(vec![
        Column::new("a", "A", vec![Item::new("x", "X")]),
        Column::new("b", "B", vec![Item::new("x", "X")]),
    ])
    .expect_err("duplicate item id");
    assert!(matches!(duplicate_item, EngineError::DuplicateItemId(_)));
}

#[test]
fn column_reorder_records_outcome() {
    let mut service = BoardService::new(board());
    let outcome = service
        .reorder_column(0, 2, Some(Edge::After))
        .expect("valid reorder")
        .expect("order changed");

    assert_eq!(column_order(&service), vec!["doing", "done", "todo"]);
    assert_eq!(
        outcome,
        Outcome::ColumnReorder {
            column_id: ColumnId::from("todo"),
            start_index: 0,
            finish_index: 2,
        }
    );
    assert_eq!(service.last_operation(), Some(&outcome));
}

#[test]
fn card_reorder_before_edge_lands_before_target() {
    let mut service = BoardService::new(board());
    service
        .reorder_card(&ColumnId::from("todo"), 2, 0, Some(Edge::Before))
        .expect("valid reorder");
    assert_eq!(item_ids(&service, "todo"), vec!["t3", "t1", "t2"]);
}

#[test]
fn noop_operations_keep_last_operation() {
    let mut service = BoardService::new(board());
    service
        .move_card(&ColumnId::from("todo"), &ColumnId::from("done"), 0, None)
        .expect("valid move");
    let recorded = service.last_operation().cloned();

    let same_column = service
        .move_card(&ColumnId::from("todo"), &ColumnId::from("todo"), 0, Some(1))
        .expect("same column is a no-op");
    assert_eq!(same_column, None);

    let same_index = service
        .reorder_card(&ColumnId::from("todo"), 1, 1, None)
        .expect("same index is a no-op");
    assert_eq!(same_index, None);
    assert_eq!(service.last_operation().cloned(), recorded);
}

#[test]
fn move_round_trip_restores_both_columns() {
    let mut service = BoardService::new(board());
    let original = service.board().clone();

    service
        .move_card(&ColumnId::from("todo"), &ColumnId::from("doing"), 1, Some(1))
        .expect("valid move");
    assert_eq!(item_ids(&service, "doing"), vec!["d1", "t2"]);
    service
        .move_card(&ColumnId::from("doing"), &ColumnId::from("todo"), 1, Some(1))
        .expect("valid move back");

    let restored = service.board();
    for column in original.columns() {
        assert_eq!(restored.column(&column.column_id), Some(column));
    }
}

#[test]
fn move_into_empty_column() {
    let mut service = BoardService::new(board());
    let outcome = service
        .move_card(&ColumnId::from("doing"), &ColumnId::from("done"), 0, Some(0))
        .expect("valid move")
        .expect("board changed");
    assert!(item_ids(&service, "doing").is_empty());
    assert_eq!(item_ids(&service, "done"), vec!["d1"]);
    assert_eq!(outcome.kind(), "card-move");
}

#[test]
fn unknown_column_is_rejected_without_changes() {
    let mut service = BoardService::new(board());
    let before = service.board().clone();
    let err = service
        .reorder_card(&ColumnId::from("backlog"), 0, 1, None)
        .expect_err("unknown column");
    assert_eq!(err, EngineError::ColumnNotFound(ColumnId::from("backlog")));
    assert_eq!(*service.board(), before);
}

#[test]
fn outcome_serializes_with_kebab_case_tag() {
    let mut service = BoardService::new(board());
    let outcome = service
        .move_card(&ColumnId::from("todo"), &ColumnId::from("doing"), 0, Some(1))
        .expect("valid move")
        .expect("board changed");
    let json = serde_json::to_value(&outcome).expect("outcome serializes");
    assert_eq!(json["type"], "card-move");
    assert_eq!(json["finish_column_id"], "doing");
    assert_eq!(json["item_index_in_finish_column"], 1);
}
