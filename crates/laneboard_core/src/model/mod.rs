//! Board domain model.
//!
//! # Responsibility
//! - Define the snapshot shapes every operation consumes and produces.
//! - Keep identity (`ColumnId`, `ItemId`) separate from display payload.
//!
//! # Invariants
//! - Snapshots are values; operations build new ones instead of mutating.

pub mod board;
pub mod edge;
pub mod outcome;
pub mod sample;
