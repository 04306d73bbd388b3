//! Ordered-sequence primitives shared by every board operation.

pub mod reorder;
