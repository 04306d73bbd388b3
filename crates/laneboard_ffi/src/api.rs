//! FFI board API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one process-wide board to Dart via FRB as sync calls.
//! - Flatten engine types into plain envelopes (strings, indices, flags).
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Every gesture built here carries the board's own session token.
//! - Failures come back as `ok=false` envelopes; the board is untouched.

use laneboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, sample_board,
    feedback_for, AvailableAction, BoardService, CardAction, ColumnAction, ColumnId, DragSource,
    DropEvent, DropTarget, Edge, EngineResult, FeedbackTarget, HitboxEdge, ItemId, LoggingConfig,
    Outcome,
};
use log::info;
use std::sync::{Mutex, MutexGuard, OnceLock};

static BOARD: OnceLock<Mutex<Option<BoardService>>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes engine logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(&LoggingConfig::new(level, log_dir.trim())) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One card as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardItemView {
    pub item_id: String,
    pub label: String,
    pub detail: Option<String>,
}

/// One column as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumnView {
    pub column_id: String,
    pub title: String,
    pub items: Vec<BoardItemView>,
}

/// Full board state envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshotResponse {
    pub ok: bool,
    pub message: String,
    pub columns: Vec<BoardColumnView>,
    pub selected_ids: Vec<String>,
    pub last_operation: Option<OutcomeView>,
    pub is_dragging_card: bool,
}

/// Mutation envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    pub ok: bool,
    /// `false` for accepted no-ops (same slot, cancelled drop, disabled action).
    pub changed: bool,
    pub outcome: Option<OutcomeView>,
    pub message: String,
}

/// Flattened [`Outcome`].
///
/// Field use per `kind`:
/// - `column-reorder` / `card-reorder`: `column_id`, `start_index`, `finish_index`.
/// - `card-move`: `column_id` is the finish column, `start_index` the index in
///   the start column, `finish_index` the index in the finish column.
/// - `multi-card-drag`: `column_id` is the destination, `item_ids` the moved
///   ids dragged-first, `dragged_id`, `finish_index` the final index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeView {
    pub kind: String,
    pub column_id: String,
    pub start_index: Option<u32>,
    pub finish_index: u32,
    pub item_ids: Vec<String>,
    pub dragged_id: Option<String>,
}

impl From<&Outcome> for OutcomeView {
    fn from(outcome: &Outcome) -> Self {
        let kind = outcome.kind().to_string();
        match outcome {
            Outcome::ColumnReorder {
                column_id,
                start_index,
                finish_index,
            }
            | Outcome::CardReorder {
                column_id,
                start_index,
                finish_index,
            } => Self {
                kind,
                column_id: column_id.to_string(),
                start_index: Some(*start_index as u32),
                finish_index: *finish_index as u32,
                item_ids: Vec::new(),
                dragged_id: None,
            },
            Outcome::CardMove {
                finish_column_id,
                item_index_in_start_column,
                item_index_in_finish_column,
            } => Self {
                kind,
                column_id: finish_column_id.to_string(),
                start_index: Some(*item_index_in_start_column as u32),
                finish_index: *item_index_in_finish_column as u32,
                item_ids: Vec::new(),
                dragged_id: None,
            },
            Outcome::MultiCardDrag {
                selected_ids,
                dragged_id,
                destination_column_id,
                final_index,
            } => Self {
                kind,
                column_id: destination_column_id.to_string(),
                start_index: None,
                finish_index: *final_index as u32,
                item_ids: selected_ids.iter().map(ToString::to_string).collect(),
                dragged_id: Some(dragged_id.to_string()),
            },
        }
    }
}

/// Element to flash after the last commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    /// `column` or `item`.
    pub kind: String,
    pub id: String,
    pub restore_focus: bool,
}

/// One context menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuActionView {
    /// Same names [`board_card_action`] and [`board_column_action`] accept.
    pub action: String,
    /// Target column for `move_to_column`.
    pub column_id: Option<String>,
    pub enabled: bool,
}

/// Menu envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuActionsResponse {
    pub ok: bool,
    pub actions: Vec<MenuActionView>,
    pub message: String,
}

impl BoardActionResponse {
    fn from_result(operation: &str, result: EngineResult<Option<Outcome>>) -> Self {
        match result {
            Ok(Some(outcome)) => Self {
                ok: true,
                changed: true,
                outcome: Some(OutcomeView::from(&outcome)),
                message: format!("{operation} applied."),
            },
            Ok(None) => Self {
                ok: true,
                changed: false,
                outcome: None,
                message: format!("{operation} left the board unchanged."),
            },
            Err(err) => Self::failure(format!("{operation} failed: {err}")),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            outcome: None,
            message: message.into(),
        }
    }
}

/// Selection envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResponse {
    pub ok: bool,
    pub selected_ids: Vec<String>,
    pub message: String,
}

/// Replaces the board with the deterministic sample board.
#[flutter_rust_bridge::frb(sync)]
pub fn board_load_sample() -> BoardSnapshotResponse {
    match sample_board() {
        Ok(board) => {
            info!("event=board_load module=ffi status=ok source=sample");
            *lock_board() = Some(BoardService::new(board));
            board_snapshot()
        }
        Err(err) => snapshot_failure(format!("board_load_sample failed: {err}")),
    }
}

/// Current board, loading the sample board on first use.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardSnapshotResponse {
    match with_board(|service| Ok(to_snapshot(service))) {
        Ok(snapshot) => snapshot,
        Err(message) => snapshot_failure(message),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_reorder_column(start_index: u32, finish_index: u32, edge: Option<String>) -> BoardActionResponse {
    run_action("board_reorder_column", |service| {
        let edge = parse_edge(edge.as_deref())?;
        Ok(service.reorder_column(start_index as usize, finish_index as usize, edge))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_reorder_card(
    column_id: String,
    start_index: u32,
    finish_index: u32,
    edge: Option<String>,
) -> BoardActionResponse {
    run_action("board_reorder_card", |service| {
        let edge = parse_edge(edge.as_deref())?;
        Ok(service.reorder_card(
            &ColumnId::new(column_id),
            start_index as usize,
            finish_index as usize,
            edge,
        ))
    })
}

/// Moves one card across columns; `index_in_finish=None` inserts at the front.
#[flutter_rust_bridge::frb(sync)]
pub fn board_move_card(
    start_column_id: String,
    finish_column_id: String,
    index_in_start: u32,
    index_in_finish: Option<u32>,
) -> BoardActionResponse {
    run_action("board_move_card", |service| {
        Ok(service.move_card(
            &ColumnId::new(start_column_id),
            &ColumnId::new(finish_column_id),
            index_in_start as usize,
            index_in_finish.map(|index| index as usize),
        ))
    })
}

/// Applies a click to the selection.
///
/// `mode`: `single` (plain click), `group` (modifier click) or `range`
/// (shift click).
#[flutter_rust_bridge::frb(sync)]
pub fn board_select(item_id: String, mode: String) -> SelectionResponse {
    let result = with_board(|service| {
        let item_id = ItemId::new(item_id);
        let selection = match mode.trim() {
            "single" => service.toggle_selection(&item_id),
            "group" => service.toggle_selection_in_group(&item_id),
            "range" => service.multi_select_to(&item_id),
            other => return Err(format!("unsupported selection mode `{other}`")),
        };
        selection
            .map(|selection| selection.ids().iter().map(ToString::to_string).collect())
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(selected_ids) => SelectionResponse {
            ok: true,
            selected_ids,
            message: "Selection updated.".to_string(),
        },
        Err(message) => SelectionResponse {
            ok: false,
            selected_ids: Vec::new(),
            message: format!("board_select failed: {message}"),
        },
    }
}

/// Records the start of a card drag. Returns `false` on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn board_begin_card_drag(item_id: String) -> bool {
    with_board(|service| {
        let source = DragSource::card(service.session(), item_id);
        Ok(service.begin_drag(source))
    })
    .unwrap_or(false)
}

/// Records the start of a column drag. Returns `false` on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn board_begin_column_drag(column_id: String) -> bool {
    with_board(|service| {
        let source = DragSource::column(service.session(), column_id);
        Ok(service.begin_drag(source))
    })
    .unwrap_or(false)
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_cancel_drag() {
    let _ = with_board(|service| {
        service.cancel_drag();
        Ok(())
    });
}

/// Drops a dragged card.
///
/// `target_item_id=None` means the card was released over the body of
/// `target_column_id`; `target_column_id=None` means no target (cancel).
#[flutter_rust_bridge::frb(sync)]
pub fn board_drop_card(
    item_id: String,
    target_column_id: Option<String>,
    target_item_id: Option<String>,
    edge: Option<String>,
) -> BoardActionResponse {
    run_action("board_drop_card", |service| {
        let session = service.session();
        let edge = parse_edge(edge.as_deref())?;
        let mut targets = Vec::new();
        if let Some(column_id) = target_column_id {
            if let Some(target_item_id) = target_item_id {
                targets.push(DropTarget::card(session, target_item_id, edge));
            }
            targets.push(DropTarget::column(session, column_id, None));
        }
        let event = DropEvent::new(DragSource::card(session, item_id), targets);
        Ok(service.drop(&event))
    })
}

/// Drops a dragged column onto `target_column_id` (`None` cancels).
#[flutter_rust_bridge::frb(sync)]
pub fn board_drop_column(
    column_id: String,
    target_column_id: Option<String>,
    edge: Option<String>,
) -> BoardActionResponse {
    run_action("board_drop_column", |service| {
        let session = service.session();
        let edge = parse_edge(edge.as_deref())?;
        let targets = target_column_id
            .map(|target| DropTarget::column(session, target, edge))
            .into_iter()
            .collect();
        let event = DropEvent::new(DragSource::column(session, column_id), targets);
        Ok(service.drop(&event))
    })
}

/// Runs a card menu action.
///
/// `action`: `move_to_top|move_up|move_down|move_to_bottom|move_to_column`;
/// `move_to_column` requires `column_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_card_action(item_id: String, action: String, column_id: Option<String>) -> BoardActionResponse {
    run_action("board_card_action", |service| {
        let action = match (action.trim(), column_id) {
            ("move_to_top", _) => CardAction::MoveToTop,
            ("move_up", _) => CardAction::MoveUp,
            ("move_down", _) => CardAction::MoveDown,
            ("move_to_bottom", _) => CardAction::MoveToBottom,
            ("move_to_column", Some(column_id)) => CardAction::MoveToColumn {
                column_id: ColumnId::new(column_id),
            },
            ("move_to_column", None) => return Err("move_to_column requires column_id".to_string()),
            (other, _) => return Err(format!("unsupported card action `{other}`")),
        };
        Ok(service.apply_card_action(&ItemId::new(item_id), &action))
    })
}

/// Runs a column menu action (`move_left|move_right`).
#[flutter_rust_bridge::frb(sync)]
pub fn board_column_action(column_id: String, action: String) -> BoardActionResponse {
    run_action("board_column_action", |service| {
        let action = match action.trim() {
            "move_left" => ColumnAction::MoveLeft,
            "move_right" => ColumnAction::MoveRight,
            other => return Err(format!("unsupported column action `{other}`")),
        };
        Ok(service.apply_column_action(&ColumnId::new(column_id), action))
    })
}

/// Batch move of `selected_ids` into `destination_column_id` at `final_index`.
///
/// Clears the selection whether or not the board changed.
#[flutter_rust_bridge::frb(sync)]
pub fn board_multi_drag_reorder(
    selected_ids: Vec<String>,
    dragged_id: String,
    destination_column_id: String,
    final_index: u32,
) -> BoardActionResponse {
    run_action("board_multi_drag_reorder", |service| {
        let selected_ids: Vec<ItemId> = selected_ids.into_iter().map(ItemId::new).collect();
        Ok(service.multi_drag_reorder(
            &selected_ids,
            &ItemId::new(dragged_id),
            &ColumnId::new(destination_column_id),
            final_index as usize,
        ))
    })
}

/// Elements to flash for the last committed operation; empty when nothing
/// was committed yet.
#[flutter_rust_bridge::frb(sync)]
pub fn board_last_feedback() -> Vec<FeedbackView> {
    with_board(|service| {
        let Some(outcome) = service.last_operation() else {
            return Ok(Vec::new());
        };
        Ok(feedback_for(service.board(), outcome)
            .into_iter()
            .map(|target| match target {
                FeedbackTarget::Column { column_id } => FeedbackView {
                    kind: "column".to_string(),
                    id: column_id.to_string(),
                    restore_focus: false,
                },
                FeedbackTarget::Item {
                    item_id,
                    restore_focus,
                } => FeedbackView {
                    kind: "item".to_string(),
                    id: item_id.to_string(),
                    restore_focus,
                },
            })
            .collect())
    })
    .unwrap_or_default()
}

/// Card menu entries in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_card_actions(item_id: String) -> MenuActionsResponse {
    menu_response(
        "board_card_actions",
        with_board(|service| {
            service
                .card_actions(&ItemId::new(item_id))
                .map(|entries| entries.iter().map(card_action_view).collect())
                .map_err(|err| err.to_string())
        }),
    )
}

/// Column menu entries in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_column_actions(column_id: String) -> MenuActionsResponse {
    menu_response(
        "board_column_actions",
        with_board(|service| {
            service
                .column_actions(&ColumnId::new(column_id))
                .map(|entries| {
                    entries
                        .iter()
                        .map(|entry| MenuActionView {
                            action: match entry.action {
                                ColumnAction::MoveLeft => "move_left",
                                ColumnAction::MoveRight => "move_right",
                            }
                            .to_string(),
                            column_id: None,
                            enabled: entry.enabled,
                        })
                        .collect()
                })
                .map_err(|err| err.to_string())
        }),
    )
}

fn card_action_view(entry: &AvailableAction<CardAction>) -> MenuActionView {
    let (action, column_id) = match &entry.action {
        CardAction::MoveToTop => ("move_to_top", None),
        CardAction::MoveUp => ("move_up", None),
        CardAction::MoveDown => ("move_down", None),
        CardAction::MoveToBottom => ("move_to_bottom", None),
        CardAction::MoveToColumn { column_id } => ("move_to_column", Some(column_id.to_string())),
    };
    MenuActionView {
        action: action.to_string(),
        column_id,
        enabled: entry.enabled,
    }
}

fn menu_response(operation: &str, result: Result<Vec<MenuActionView>, String>) -> MenuActionsResponse {
    match result {
        Ok(actions) => MenuActionsResponse {
            ok: true,
            actions,
            message: "Menu resolved.".to_string(),
        },
        Err(message) => MenuActionsResponse {
            ok: false,
            actions: Vec::new(),
            message: format!("{operation} failed: {message}"),
        },
    }
}

fn lock_board() -> MutexGuard<'static, Option<BoardService>> {
    let cell = BOARD.get_or_init(|| Mutex::new(None));
    match cell.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn with_board<T>(f: impl FnOnce(&mut BoardService) -> Result<T, String>) -> Result<T, String> {
    let mut guard = lock_board();
    if guard.is_none() {
        let board = sample_board().map_err(|err| format!("sample board failed: {err}"))?;
        *guard = Some(BoardService::new(board));
    }
    match guard.as_mut() {
        Some(service) => f(service),
        None => Err("board is not loaded".to_string()),
    }
}

fn run_action(
    operation: &str,
    f: impl FnOnce(&mut BoardService) -> Result<EngineResult<Option<Outcome>>, String>,
) -> BoardActionResponse {
    match with_board(f) {
        Ok(result) => BoardActionResponse::from_result(operation, result),
        Err(message) => BoardActionResponse::failure(format!("{operation} failed: {message}")),
    }
}

/// Accepts logical edges (`before|after`) and hitbox edges
/// (`top|bottom|left|right`).
fn parse_edge(edge: Option<&str>) -> Result<Option<Edge>, String> {
    let Some(raw) = edge.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    let parsed = match raw.to_ascii_lowercase().as_str() {
        "before" => Edge::Before,
        "after" => Edge::After,
        "top" => HitboxEdge::Top.into(),
        "bottom" => HitboxEdge::Bottom.into(),
        "left" => HitboxEdge::Left.into(),
        "right" => HitboxEdge::Right.into(),
        other => return Err(format!("unsupported edge `{other}`")),
    };
    Ok(Some(parsed))
}

fn to_snapshot(service: &BoardService) -> BoardSnapshotResponse {
    let columns = service
        .columns()
        .map(|column| BoardColumnView {
            column_id: column.column_id.to_string(),
            title: column.title.clone(),
            items: column
                .items
                .iter()
                .map(|item| BoardItemView {
                    item_id: item.id.to_string(),
                    label: item.label.clone(),
                    detail: item.detail.clone(),
                })
                .collect(),
        })
        .collect();
    BoardSnapshotResponse {
        ok: true,
        message: "Board loaded.".to_string(),
        columns,
        selected_ids: service
            .selection()
            .ids()
            .iter()
            .map(ToString::to_string)
            .collect(),
        last_operation: service.last_operation().map(OutcomeView::from),
        is_dragging_card: service.is_dragging_card(),
    }
}

fn snapshot_failure(message: String) -> BoardSnapshotResponse {
    BoardSnapshotResponse {
        ok: false,
        message,
        columns: Vec::new(),
        selected_ids: Vec::new(),
        last_operation: None,
        is_dragging_card: false,
    }
}
