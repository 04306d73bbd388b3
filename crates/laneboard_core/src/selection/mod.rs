//! Finder-style selection model.
//!
//! # Responsibility
//! - Maintain the ordered set of selected item ids.
//! - Implement single select, toggle-in-group and range selection.
//!
//! # Invariants
//! - Ids are unique; insertion order is meaningful (last = most recent).
//! - Every entry point rejects ids that are not on the board, so a selection
//!   derived through this API never names a missing item.

use crate::error::EngineResult;
use crate::model::board::{Board, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered, unique sequence of selected item ids.
///
/// Deserializes through [`SelectionSet::from_ids`], so repeated ids collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ItemId>")]
pub struct SelectionSet(Vec<ItemId>);

impl From<Vec<ItemId>> for SelectionSet {
    fn from(ids: Vec<ItemId>) -> Self {
        Self::from_ids(ids)
    }
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection, keeping the first occurrence of repeated ids.
    pub fn from_ids(ids: impl IntoIterator<Item = ItemId>) -> Self {
        let mut seen = HashSet::new();
        Self(ids.into_iter().filter(|id| seen.insert(id.clone())).collect())
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.0.contains(id)
    }

    /// Most recently added id.
    pub fn last(&self) -> Option<&ItemId> {
        self.0.last()
    }

    /// Plain click.
    ///
    /// Unselected or part of a group: becomes the only selection. Sole
    /// selected item: deselects.
    pub fn toggle_selection(&self, board: &Board, id: &ItemId) -> EngineResult<Self> {
        board.require_item(id)?;
        if self.contains(id) && self.len() == 1 {
            return Ok(Self::new());
        }
        Ok(Self(vec![id.clone()]))
    }

    /// Modifier click: add to or remove from the group.
    pub fn toggle_selection_in_group(&self, board: &Board, id: &ItemId) -> EngineResult<Self> {
        board.require_item(id)?;
        let mut ids = self.0.clone();
        match ids.iter().position(|selected| selected == id) {
            Some(index) => {
                ids.remove(index);
            }
            None => ids.push(id.clone()),
        }
        Ok(Self(ids))
    }

    /// Shift click: range selection toward `id`.
    pub fn multi_select_to(&self, board: &Board, id: &ItemId) -> EngineResult<Self> {
        let target = board.require_item(id)?;
        let column = board.require_column(&target.column_id)?;
        let through_target = || {
            Self(
                column.items[..=target.index]
                    .iter()
                    .map(|item| item.id.clone())
                    .collect(),
            )
        };

        let Some(last) = self.last() else {
            return Ok(through_target());
        };
        let anchor = board.require_item(last)?;
        if anchor.column_id != target.column_id {
            return Ok(through_target());
        }
        if anchor.index == target.index {
            return Ok(self.clone());
        }

        let forward = target.index > anchor.index;
        let (start, end) = if forward {
            (anchor.index, target.index)
        } else {
            (target.index, anchor.index)
        };
        let mut additions = column.items[start..=end]
            .iter()
            .map(|item| &item.id)
            .filter(|candidate| !self.contains(candidate))
            .cloned()
            .collect::<Vec<_>>();
        if !forward {
            additions.reverse();
        }

        let mut ids = self.0.clone();
        ids.extend(additions);
        Ok(Self(ids))
    }

    /// Drops ids that are no longer on `board`.
    pub fn retain_present(&self, board: &Board) -> Self {
        Self(
            self.0
                .iter()
                .filter(|id| board.contains_item(id))
                .cloned()
                .collect(),
        )
    }
}
