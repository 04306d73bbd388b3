//! Drag gesture interpretation.
//!
//! # Responsibility
//! - Model what the gesture reporter delivers (source, nested drop targets).
//! - Classify one terminal drop into exactly one board operation.
//!
//! # Invariants
//! - Sources and targets from another board session never change state.
//! - A drop with no targets is a cancellation.

pub mod event;
pub mod interpreter;
pub mod session;

pub use event::{DragSource, DropEvent, DropTarget, DropTargetKind};
pub use interpreter::{batch_final_index, interpret_drop, selection_at_drag_start, DropAction};
pub use session::SessionToken;
