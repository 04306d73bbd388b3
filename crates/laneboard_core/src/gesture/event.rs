//! Gesture reporter payloads.

use crate::gesture::session::SessionToken;
use crate::model::board::{ColumnId, ItemId};
use crate::model::edge::Edge;
use serde::{Deserialize, Serialize};

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragSource {
    Column {
        column_id: ColumnId,
        session: SessionToken,
    },
    Card {
        item_id: ItemId,
        session: SessionToken,
    },
}

impl DragSource {
    pub fn column(session: SessionToken, column_id: impl Into<ColumnId>) -> Self {
        Self::Column {
            column_id: column_id.into(),
            session,
        }
    }

    pub fn card(session: SessionToken, item_id: impl Into<ItemId>) -> Self {
        Self::Card {
            item_id: item_id.into(),
            session,
        }
    }

    pub fn session(&self) -> SessionToken {
        match self {
            Self::Column { session, .. } | Self::Card { session, .. } => *session,
        }
    }

    /// Label used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Column { .. } => "column",
            Self::Card { .. } => "card",
        }
    }
}

/// Element kind a pointer was released over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropTargetKind {
    /// A column, or the body of its card list.
    Column { column_id: ColumnId },
    /// A specific card.
    Card { item_id: ItemId },
}

/// One entry of the nested drop-target list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    pub kind: DropTargetKind,
    #[serde(default)]
    pub edge: Option<Edge>,
    pub session: SessionToken,
}

impl DropTarget {
    pub fn column(session: SessionToken, column_id: impl Into<ColumnId>, edge: Option<Edge>) -> Self {
        Self {
            kind: DropTargetKind::Column {
                column_id: column_id.into(),
            },
            edge,
            session,
        }
    }

    pub fn card(session: SessionToken, item_id: impl Into<ItemId>, edge: Option<Edge>) -> Self {
        Self {
            kind: DropTargetKind::Card {
                item_id: item_id.into(),
            },
            edge,
            session,
        }
    }
}

/// Terminal drop delivered by the gesture reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    pub source: DragSource,
    /// Innermost target first.
    #[serde(default)]
    pub targets: Vec<DropTarget>,
}

impl DropEvent {
    pub fn new(source: DragSource, targets: Vec<DropTarget>) -> Self {
        Self { source, targets }
    }

    /// Drop released over nothing.
    pub fn cancelled(source: DragSource) -> Self {
        Self::new(source, Vec::new())
    }
}
