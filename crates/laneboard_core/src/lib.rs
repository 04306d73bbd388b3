//! Kanban board engine.
//!
//! Pure column/item operations, Finder-style selection and drag gesture
//! interpretation, with a stateful [`BoardService`] on top.

pub mod actions;
pub mod error;
pub mod feedback;
pub mod gesture;
pub mod logging;
pub mod menu;
pub mod model;
pub mod ops;
pub mod order;
pub mod registry;
pub mod selection;
pub mod service;
pub mod snapshot;

pub use actions::{AvailableAction, CardAction, ColumnAction};
pub use error::{EngineError, EngineResult};
pub use feedback::{feedback_for, FeedbackTarget};
pub use gesture::{DragSource, DropAction, DropEvent, DropTarget, DropTargetKind, SessionToken};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use menu::MenuSlot;
pub use model::board::{Board, Column, ColumnId, Item, ItemId, ItemLocation};
pub use model::edge::{Axis, Edge, HitboxEdge};
pub use model::outcome::Outcome;
pub use model::sample::{generated_board, sample_board};
pub use ops::Transition;
pub use order::reorder::{reorder, reorder_destination_index, reorder_with_edge, ReorderError};
pub use registry::{Disposer, Registry};
pub use selection::SelectionSet;
pub use service::BoardService;
pub use snapshot::SnapshotCell;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
