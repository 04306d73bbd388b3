//! Board use-case service.
//!
//! # Responsibility
//! - Own the committed board, the selection, the session token and the
//!   active drag for one board instance.
//! - Route direct calls, drops and menu actions through the pure operations
//!   and commit their results.
//!
//! # Invariants
//! - A commit replaces the board and refreshes the snapshot cell together;
//!   a rejected or no-op operation touches neither.
//! - The selection is cleared after every batch drop.
//! - Drops from another session never end this board's active drag.

use crate::actions::{self, AvailableAction, CardAction, ColumnAction};
use crate::error::EngineResult;
use crate::gesture::{interpret_drop, selection_at_drag_start, DragSource, DropAction, DropEvent, SessionToken};
use crate::model::board::{Board, Column, ColumnId, ItemId};
use crate::model::edge::Edge;
use crate::model::outcome::Outcome;
use crate::ops::{self, Transition};
use crate::selection::SelectionSet;
use crate::snapshot::SnapshotCell;
use log::{debug, info, warn};

/// Stateful facade over one board instance.
#[derive(Debug)]
pub struct BoardService {
    board: Board,
    selection: SelectionSet,
    session: SessionToken,
    snapshot: SnapshotCell,
    active_drag: Option<DragSource>,
}

impl BoardService {
    /// Creates a service with a fresh session token and an empty selection.
    pub fn new(board: Board) -> Self {
        Self::with_session(board, SessionToken::generate())
    }

    pub fn with_session(board: Board, session: SessionToken) -> Self {
        debug!(
            "event=board_open module=service status=ok columns={} items={}",
            board.column_count(),
            board.item_count()
        );
        Self {
            snapshot: SnapshotCell::new(board.clone()),
            board,
            selection: SelectionSet::new(),
            session,
            active_drag: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.board.columns()
    }

    pub fn last_operation(&self) -> Option<&Outcome> {
        self.board.last_operation()
    }

    pub fn session(&self) -> SessionToken {
        self.session
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Shared handle to the latest committed board.
    pub fn snapshot_cell(&self) -> SnapshotCell {
        self.snapshot.clone()
    }

    pub fn active_drag(&self) -> Option<&DragSource> {
        self.active_drag.as_ref()
    }

    pub fn is_dragging_card(&self) -> bool {
        matches!(self.active_drag, Some(DragSource::Card { .. }))
    }

    pub fn reorder_column(
        &mut self,
        start_index: usize,
        finish_index: usize,
        edge: Option<Edge>,
    ) -> EngineResult<Option<Outcome>> {
        let result = ops::reorder_column(&self.board, start_index, finish_index, edge);
        self.commit("reorder_column", result)
    }

    pub fn reorder_card(
        &mut self,
        column_id: &ColumnId,
        start_index: usize,
        finish_index: usize,
        edge: Option<Edge>,
    ) -> EngineResult<Option<Outcome>> {
        let result = ops::reorder_card(&self.board, column_id, start_index, finish_index, edge);
        self.commit("reorder_card", result)
    }

    pub fn move_card(
        &mut self,
        start_column_id: &ColumnId,
        finish_column_id: &ColumnId,
        index_in_start: usize,
        index_in_finish: Option<usize>,
    ) -> EngineResult<Option<Outcome>> {
        let result = ops::move_card(
            &self.board,
            start_column_id,
            finish_column_id,
            index_in_start,
            index_in_finish,
        );
        self.commit("move_card", result)
    }

    /// Batch move; the selection is cleared whether or not the board changed.
    pub fn multi_drag_reorder(
        &mut self,
        selected_ids: &[ItemId],
        dragged_id: &ItemId,
        destination_column_id: &ColumnId,
        final_index: usize,
    ) -> EngineResult<Option<Outcome>> {
        let result = ops::multi_drag_reorder(
            &self.board,
            selected_ids,
            dragged_id,
            destination_column_id,
            final_index,
        );
        let committed = self.commit("multi_drag", result)?;
        self.selection = SelectionSet::new();
        Ok(committed)
    }

    pub fn toggle_selection(&mut self, item_id: &ItemId) -> EngineResult<&SelectionSet> {
        let next = self.selection.toggle_selection(&self.board, item_id);
        self.select("toggle", next)
    }

    pub fn toggle_selection_in_group(&mut self, item_id: &ItemId) -> EngineResult<&SelectionSet> {
        let next = self.selection.toggle_selection_in_group(&self.board, item_id);
        self.select("toggle_in_group", next)
    }

    pub fn multi_select_to(&mut self, item_id: &ItemId) -> EngineResult<&SelectionSet> {
        let next = self.selection.multi_select_to(&self.board, item_id);
        self.select("range", next)
    }

    pub fn clear_selection(&mut self) {
        self.selection = SelectionSet::new();
    }

    /// Records a drag start. Returns `false` for sources of another session.
    pub fn begin_drag(&mut self, source: DragSource) -> bool {
        if source.session() != self.session {
            debug!(
                "event=drag_start module=service status=ignored reason=foreign_session source={}",
                source.kind()
            );
            return false;
        }
        self.selection = selection_at_drag_start(&self.selection, &source);
        debug!(
            "event=drag_start module=service status=ok source={} selected={}",
            source.kind(),
            self.selection.len()
        );
        self.active_drag = Some(source);
        true
    }

    /// Classifies and applies one drop, ending the active drag.
    ///
    /// An accepted batch drop clears the selection; a rejected one keeps it.
    pub fn drop(&mut self, event: &DropEvent) -> EngineResult<Option<Outcome>> {
        if event.source.session() == self.session {
            self.active_drag = None;
        }

        let action = match interpret_drop(&self.board, &self.selection, self.session, event) {
            Ok(action) => action,
            Err(err) => {
                warn!(
                    "event=drop module=service status=rejected source={} error={}",
                    event.source.kind(),
                    err
                );
                return Err(err);
            }
        };
        if matches!(action, DropAction::Ignored | DropAction::Cancelled) {
            debug!(
                "event=drop module=service status={} source={}",
                action.kind(),
                event.source.kind()
            );
            return Ok(None);
        }

        let result = action.apply(&self.board);
        let committed = self.commit(action.kind(), result)?;
        if action.is_multi_drag() {
            self.selection = SelectionSet::new();
        }
        Ok(committed)
    }

    /// Ends the active drag without touching the board.
    pub fn cancel_drag(&mut self) {
        if let Some(source) = self.active_drag.take() {
            debug!(
                "event=drag_cancel module=service status=ok source={}",
                source.kind()
            );
        }
    }

    pub fn card_actions(&self, item_id: &ItemId) -> EngineResult<Vec<AvailableAction<CardAction>>> {
        actions::card_actions(&self.board, item_id)
    }

    pub fn column_actions(
        &self,
        column_id: &ColumnId,
    ) -> EngineResult<Vec<AvailableAction<ColumnAction>>> {
        actions::column_actions(&self.board, column_id)
    }

    pub fn apply_card_action(
        &mut self,
        item_id: &ItemId,
        action: &CardAction,
    ) -> EngineResult<Option<Outcome>> {
        let result = actions::apply_card_action(&self.board, item_id, action);
        self.commit("card_action", result)
    }

    pub fn apply_column_action(
        &mut self,
        column_id: &ColumnId,
        action: ColumnAction,
    ) -> EngineResult<Option<Outcome>> {
        let result = actions::apply_column_action(&self.board, column_id, action);
        self.commit("column_action", result)
    }

    fn commit(
        &mut self,
        operation: &'static str,
        result: EngineResult<Transition>,
    ) -> EngineResult<Option<Outcome>> {
        let transition = match result {
            Ok(transition) => transition,
            Err(err) => {
                warn!(
                    "event=board_commit module=service status=rejected operation={} error={}",
                    operation, err
                );
                return Err(err);
            }
        };
        let Some(outcome) = transition.outcome else {
            debug!(
                "event=board_commit module=service status=noop operation={}",
                operation
            );
            return Ok(None);
        };

        self.snapshot.write(transition.board.clone());
        self.board = transition.board;
        self.selection = self.selection.retain_present(&self.board);
        info!(
            "event=board_commit module=service status=ok operation={} outcome={}",
            operation,
            outcome.kind()
        );
        Ok(Some(outcome))
    }

    fn select(
        &mut self,
        mode: &'static str,
        next: EngineResult<SelectionSet>,
    ) -> EngineResult<&SelectionSet> {
        match next {
            Ok(selection) => {
                debug!(
                    "event=selection_change module=service status=ok mode={} selected={}",
                    mode,
                    selection.len()
                );
                self.selection = selection;
                Ok(&self.selection)
            }
            Err(err) => {
                warn!(
                    "event=selection_change module=service status=rejected mode={} error={}",
                    mode, err
                );
                Err(err)
            }
        }
    }
}
