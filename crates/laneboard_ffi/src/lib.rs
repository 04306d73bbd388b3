//! Flutter-facing bindings for the board engine.

pub mod api;
