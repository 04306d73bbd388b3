//! Board use-case services.
//!
//! # Responsibility
//! - Hold the mutable state around the pure operations.
//! - Keep FFI and CLI layers free of board bookkeeping.

pub mod board_service;

pub use board_service::BoardService;
