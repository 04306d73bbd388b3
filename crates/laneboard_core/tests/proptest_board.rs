use laneboard_core::{
    generated_board, reorder_with_edge, Axis, Board, BoardService, ColumnId, DragSource,
    DropEvent, DropTarget, Edge, ItemId,
};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

#[derive(Debug, Clone)]
enum Step {
    ReorderColumn(usize, usize, Option<Edge>),
    ReorderCard(usize, usize, usize, Option<Edge>),
    MoveCard(usize, usize, usize, usize),
    MultiDrag(Vec<usize>, usize, usize),
    Drop {
        dragged: usize,
        selection: Vec<usize>,
        target: DropAt,
    },
}

#[derive(Debug, Clone)]
enum DropAt {
    Card(usize, Option<Edge>),
    ColumnBody(usize),
}

fn arb_edge() -> impl Strategy<Value = Option<Edge>> {
    prop_oneof![Just(None), Just(Some(Edge::Before)), Just(Some(Edge::After))]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..4usize, 0..4usize, arb_edge()).prop_map(|(a, b, e)| Step::ReorderColumn(a, b, e)),
        (0..4usize, 0..8usize, 0..8usize, arb_edge())
            .prop_map(|(c, a, b, e)| Step::ReorderCard(c, a, b, e)),
        (0..4usize, 0..4usize, 0..8usize, 0..8usize)
            .prop_map(|(s, f, a, b)| Step::MoveCard(s, f, a, b)),
        (prop::collection::vec(0..16usize, 1..5), 0..4usize, 0..4usize)
            .prop_map(|(picks, dest, at)| Step::MultiDrag(picks, dest, at)),
        (0..16usize, prop::collection::vec(0..16usize, 0..4), arb_drop_at()).prop_map(
            |(dragged, selection, target)| Step::Drop {
                dragged,
                selection,
                target,
            }
        ),
    ]
}

fn arb_drop_at() -> impl Strategy<Value = DropAt> {
    prop_oneof![
        (0..16usize, arb_edge()).prop_map(|(pick, edge)| DropAt::Card(pick, edge)),
        (0..4usize).prop_map(DropAt::ColumnBody),
    ]
}

fn sorted_item_ids(board: &Board) -> Vec<ItemId> {
    let mut ids = board.item_ids().into_iter().cloned().collect::<Vec<_>>();
    ids.sort();
    ids
}

fn column_id(board: &Board, index: usize) -> ColumnId {
    board.ordered_column_ids()[index % board.column_count()].clone()
}

fn item_at(board: &Board, pick: usize) -> ItemId {
    let all = board.item_ids();
    all[pick % all.len()].clone()
}

/// Selects `selection`, drags `dragged` onto `target` and checks where the
/// dragged block landed.
fn drop_and_check(
    service: &mut BoardService,
    dragged: usize,
    selection: &[usize],
    target: &DropAt,
) -> Result<(), TestCaseError> {
    let board = service.board().clone();
    let session = service.session();
    let dragged = item_at(&board, dragged);

    service.clear_selection();
    for pick in selection {
        service
            .toggle_selection_in_group(&item_at(&board, *pick))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
    }
    service.begin_drag(DragSource::card(session, dragged.clone()));
    let moving = service.selection().len().max(1);

    let (targets, destination, anchor) = match target {
        DropAt::Card(pick, edge) => {
            let target_id = item_at(&board, *pick);
            let location = board
                .locate_item(&target_id)
                .ok_or_else(|| TestCaseError::fail("target is on the board"))?;
            let targets = vec![
                DropTarget::card(session, target_id.clone(), *edge),
                DropTarget::column(session, location.column_id.clone(), None),
            ];
            let anchor = (*edge)
                .filter(|_| target_id != dragged && !service.selection().contains(&target_id))
                .map(|edge| (target_id, edge));
            (targets, location.column_id, anchor)
        }
        DropAt::ColumnBody(index) => {
            let column = column_id(&board, *index);
            (vec![DropTarget::column(session, column.clone(), None)], column, None)
        }
    };

    let outcome = service
        .drop(&DropEvent::new(DragSource::card(session, dragged.clone()), targets))
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    if moving > 1 {
        prop_assert!(service.selection().is_empty());
    }
    if outcome.is_none() {
        return Ok(());
    }

    let landed = service
        .board()
        .locate_item(&dragged)
        .ok_or_else(|| TestCaseError::fail("dragged item is still on the board"))?;
    prop_assert_eq!(&landed.column_id, &destination);
    if let Some((target_id, edge)) = anchor {
        let target = service
            .board()
            .locate_item(&target_id)
            .ok_or_else(|| TestCaseError::fail("target item is still on the board"))?;
        match edge {
            Edge::Before => prop_assert_eq!(landed.index + moving, target.index),
            Edge::After => prop_assert_eq!(target.index + 1, landed.index),
        }
    }
    Ok(())
}

fn apply(service: &mut BoardService, step: &Step) -> Result<(), TestCaseError> {
    if let Step::Drop {
        dragged,
        selection,
        target,
    } = step
    {
        return drop_and_check(service, *dragged, selection, target);
    }

    let board = service.board().clone();
    // Out-of-range steps are expected to fail; only conservation matters here.
    let _ = match step {
        Step::ReorderColumn(a, b, edge) => service.reorder_column(*a, *b, *edge),
        Step::ReorderCard(c, a, b, edge) => {
            service.reorder_card(&column_id(&board, *c), *a, *b, *edge)
        }
        Step::MoveCard(s, f, a, b) => service.move_card(
            &column_id(&board, *s),
            &column_id(&board, *f),
            *a,
            Some(*b),
        ),
        Step::MultiDrag(picks, dest, at) => {
            let all = board.item_ids();
            let selected = picks
                .iter()
                .filter_map(|pick| all.get(*pick).map(|id| (*id).clone()))
                .collect::<Vec<_>>();
            match selected.first().cloned() {
                Some(dragged) => {
                    service.multi_drag_reorder(&selected, &dragged, &column_id(&board, *dest), *at)
                }
                None => Ok(None),
            }
        }
        Step::Drop { .. } => Ok(None),
    };
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn item_ids_are_conserved(steps in prop::collection::vec(arb_step(), 1..24)) {
        let board = generated_board(4, 4).expect("generated board is valid");
        let expected = sorted_item_ids(&board);
        let mut service = BoardService::new(board);

        for step in &steps {
            apply(&mut service, step)?;
            prop_assert_eq!(sorted_item_ids(service.board()), expected.clone());
            prop_assert_eq!(service.board().column_count(), 4);
        }
    }

    #[test]
    fn reorder_with_edge_is_a_permutation(
        len in 1..12usize,
        start_seed in 0..64usize,
        target_seed in 0..64usize,
        edge in arb_edge(),
    ) {
        let list = (0..len).collect::<Vec<_>>();
        let start = start_seed % len;
        let target = target_seed % len;
        let mut reordered = reorder_with_edge(&list, start, target, edge, Axis::Vertical)
            .expect("indices in range");
        if start == target && edge.is_none() {
            prop_assert_eq!(&reordered, &list);
        }
        reordered.sort_unstable();
        prop_assert_eq!(reordered, list);
    }

    #[test]
    fn move_round_trip_restores_columns(
        from_index in 0..5usize,
        to_index in 0..6usize,
    ) {
        let board = generated_board(2, 5).expect("generated board is valid");
        let mut service = BoardService::new(board.clone());
        let left = ColumnId::from("column-0");
        let right = ColumnId::from("column-1");

        service
            .move_card(&left, &right, from_index, Some(to_index))
            .expect("indices in range");
        service
            .move_card(&right, &left, to_index, Some(from_index))
            .expect("indices in range");

        for column in board.columns() {
            prop_assert_eq!(service.board().column(&column.column_id), Some(column));
        }
    }
}
