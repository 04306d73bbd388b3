//! Edge-aware single-element reorder.
//!
//! # Invariants
//! - Output is always a permutation of the input with one element relocated.
//! - `start_index == index_of_target` never changes the order.
//! - Index arithmetic assumes the moving element is removed before insertion.

use crate::model::edge::{Axis, Edge};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Out-of-range input to the reorder primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderError {
    StartOutOfBounds { index: usize, len: usize },
    TargetOutOfBounds { index: usize, len: usize },
}

impl Display for ReorderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartOutOfBounds { index, len } => {
                write!(f, "start index {index} out of bounds for length {len}")
            }
            Self::TargetOutOfBounds { index, len } => {
                write!(f, "target index {index} out of bounds for length {len}")
            }
        }
    }
}

impl Error for ReorderError {}

/// Landing index for the element at `start_index` dropped on `index_of_target`.
///
/// `edge = None` lands exactly on `index_of_target`. `axis` only records which
/// geometry produced the edge.
pub fn reorder_destination_index(
    start_index: usize,
    index_of_target: usize,
    edge: Option<Edge>,
    _axis: Axis,
) -> usize {
    if start_index == index_of_target {
        return start_index;
    }
    let Some(edge) = edge else {
        return index_of_target;
    };

    let moving_forward = start_index < index_of_target;
    match (moving_forward, edge) {
        // Removal shifts the target down by one.
        (true, Edge::Before) => index_of_target - 1,
        (true, Edge::After) => index_of_target,
        (false, Edge::Before) => index_of_target,
        (false, Edge::After) => index_of_target + 1,
    }
}

/// Moves `list[start_index]` so it lands at `finish_index` (clamped to the end).
pub fn reorder<T: Clone>(list: &[T], start_index: usize, finish_index: usize) -> Vec<T> {
    let mut result = list.to_vec();
    if start_index >= result.len() {
        return result;
    }
    let removed = result.remove(start_index);
    let finish_index = finish_index.min(result.len());
    result.insert(finish_index, removed);
    result
}

/// Reorders `list` relative to a drop target and its edge.
///
/// `index_of_target` may equal `list.len()` to mean "append".
///
/// # Errors
/// - `StartOutOfBounds` when `start_index >= list.len()`.
/// - `TargetOutOfBounds` when `index_of_target > list.len()`.
pub fn reorder_with_edge<T: Clone>(
    list: &[T],
    start_index: usize,
    index_of_target: usize,
    edge: Option<Edge>,
    axis: Axis,
) -> Result<Vec<T>, ReorderError> {
    let len = list.len();
    if start_index >= len {
        return Err(ReorderError::StartOutOfBounds {
            index: start_index,
            len,
        });
    }
    if index_of_target > len {
        return Err(ReorderError::TargetOutOfBounds {
            index: index_of_target,
            len,
        });
    }

    let destination = reorder_destination_index(start_index, index_of_target, edge, axis);
    Ok(reorder(list, start_index, destination.min(len - 1)))
}

#[cfg(test)]
mod tests {
    use super::{reorder, reorder_destination_index, reorder_with_edge, ReorderError};
    use crate::model::edge::{Axis, Edge};

    const LIST: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

    fn apply(start: usize, target: usize, edge: Option<Edge>) -> String {
        reorder_with_edge(&LIST, start, target, edge, Axis::Vertical)
            .expect("indices are in range")
            .into_iter()
            .collect()
    }

    #[test]
    fn forward_move_respects_edge() {
        assert_eq!(apply(0, 3, Some(Edge::Before)), "bcade");
        assert_eq!(apply(0, 3, Some(Edge::After)), "bcdae");
    }

    #[test]
    fn backward_move_respects_edge() {
        assert_eq!(apply(4, 1, Some(Edge::Before)), "aebcd");
        assert_eq!(apply(4, 1, Some(Edge::After)), "abecd");
    }

    #[test]
    fn no_edge_lands_exactly_on_target() {
        assert_eq!(apply(1, 3, None), "acdbe");
        assert_eq!(apply(3, 0, None), "dabce");
    }

    #[test]
    fn self_target_is_identity_for_any_edge() {
        assert_eq!(apply(2, 2, None), "abcde");
        assert_eq!(apply(2, 2, Some(Edge::After)), "abcde");
        assert_eq!(reorder_destination_index(2, 2, Some(Edge::Before), Axis::Horizontal), 2);
    }

    #[test]
    fn append_target_moves_to_end() {
        assert_eq!(apply(1, 5, None), "acdeb");
        assert_eq!(apply(1, 5, Some(Edge::After)), "acdeb");
    }

    #[test]
    fn adjacent_after_and_before_are_noops() {
        assert_eq!(apply(1, 2, Some(Edge::Before)), "abcde");
        assert_eq!(apply(2, 1, Some(Edge::After)), "abcde");
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let start = reorder_with_edge(&LIST, 5, 0, None, Axis::Vertical)
            .expect_err("start past end must fail");
        assert_eq!(start, ReorderError::StartOutOfBounds { index: 5, len: 5 });

        let target = reorder_with_edge(&LIST, 0, 6, None, Axis::Vertical)
            .expect_err("target past append slot must fail");
        assert_eq!(target, ReorderError::TargetOutOfBounds { index: 6, len: 5 });

        let empty: [char; 0] = [];
        assert!(reorder_with_edge(&empty, 0, 0, None, Axis::Vertical).is_err());
    }

    #[test]
    fn plain_reorder_clamps_finish() {
        assert_eq!(reorder(&[1, 2, 3], 0, 10), vec![2, 3, 1]);
    }
}
