//! Board snapshot model.
//!
//! # Responsibility
//! - Define the immutable board value replaced by every operation.
//! - Answer position queries (home column, index) used by operations.
//!
//! # Invariants
//! - Every item id appears in exactly one column.
//! - `ordered_column_ids` is a permutation of the keys of `columns`.
//! - Ids are never rewritten; only order changes between snapshots.

use crate::error::{EngineError, EngineResult};
use crate::model::outcome::Outcome;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt::{Display, Formatter};

/// Stable column identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

/// Stable item identifier, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(ColumnId);
string_id!(ItemId);

/// One card on the board.
///
/// The engine only looks at `id`; the rest is display payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Named, ordered container of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub column_id: ColumnId,
    pub title: String,
    pub items: Vec<Item>,
}

impl Column {
    pub fn new(column_id: impl Into<ColumnId>, title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            column_id: column_id.into(),
            title: title.into(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of one item inside this column.
    pub fn index_of(&self, item_id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == item_id)
    }

    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }

    /// Same column identity with a new item order.
    pub(crate) fn with_items(&self, items: Vec<Item>) -> Self {
        Self {
            column_id: self.column_id.clone(),
            title: self.title.clone(),
            items,
        }
    }
}

/// Where an item currently sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLocation {
    pub column_id: ColumnId,
    /// Position of the home column in board order.
    pub column_index: usize,
    /// Position of the item inside its home column.
    pub index: usize,
}

/// Immutable board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: BTreeMap<ColumnId, Column>,
    ordered_column_ids: Vec<ColumnId>,
    last_operation: Option<Outcome>,
}

impl Board {
    /// Builds a board from columns in display order.
    ///
    /// # Errors
    /// - `EmptyId` for blank column or item ids.
    /// - `DuplicateColumnId` / `DuplicateItemId` when identity is not unique.
    pub fn new(columns: Vec<Column>) -> EngineResult<Self> {
        let mut seen_items = HashSet::new();
        let mut map = BTreeMap::new();
        let mut ordered_column_ids = Vec::with_capacity(columns.len());

        for column in columns {
            if column.column_id.is_blank() {
                return Err(EngineError::EmptyId);
            }
            for item in &column.items {
                if item.id.is_blank() {
                    return Err(EngineError::EmptyId);
                }
                if !seen_items.insert(item.id.clone()) {
                    return Err(EngineError::DuplicateItemId(item.id.clone()));
                }
            }
            if map.contains_key(&column.column_id) {
                return Err(EngineError::DuplicateColumnId(column.column_id));
            }
            ordered_column_ids.push(column.column_id.clone());
            map.insert(column.column_id.clone(), column);
        }

        Ok(Self {
            columns: map,
            ordered_column_ids,
            last_operation: None,
        })
    }

    pub fn ordered_column_ids(&self) -> &[ColumnId] {
        &self.ordered_column_ids
    }

    /// Columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.ordered_column_ids
            .iter()
            .filter_map(|column_id| self.columns.get(column_id))
    }

    pub fn column_count(&self) -> usize {
        self.ordered_column_ids.len()
    }

    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.get(column_id)
    }

    /// Like [`Board::column`] but treats absence as an invariant violation.
    pub fn require_column(&self, column_id: &ColumnId) -> EngineResult<&Column> {
        self.column(column_id)
            .ok_or_else(|| EngineError::ColumnNotFound(column_id.clone()))
    }

    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.ordered_column_ids
            .iter()
            .position(|candidate| candidate == column_id)
    }

    /// Most recent applied operation, if any.
    pub fn last_operation(&self) -> Option<&Outcome> {
        self.last_operation.as_ref()
    }

    /// Finds the home column and index of one item.
    pub fn locate_item(&self, item_id: &ItemId) -> Option<ItemLocation> {
        self.columns()
            .enumerate()
            .find_map(|(column_index, column)| {
                column.index_of(item_id).map(|index| ItemLocation {
                    column_id: column.column_id.clone(),
                    column_index,
                    index,
                })
            })
    }

    /// Like [`Board::locate_item`] but treats absence as an invariant violation.
    pub fn require_item(&self, item_id: &ItemId) -> EngineResult<ItemLocation> {
        self.locate_item(item_id)
            .ok_or_else(|| EngineError::ItemNotFound(item_id.clone()))
    }

    pub fn contains_item(&self, item_id: &ItemId) -> bool {
        self.columns
            .values()
            .any(|column| column.index_of(item_id).is_some())
    }

    pub fn item(&self, item_id: &ItemId) -> Option<&Item> {
        self.columns
            .values()
            .flat_map(|column| column.items.iter())
            .find(|item| &item.id == item_id)
    }

    /// All item ids in display order (column order, then index).
    pub fn item_ids(&self) -> Vec<&ItemId> {
        self.columns().flat_map(Column::item_ids).collect()
    }

    pub fn item_count(&self) -> usize {
        self.columns.values().map(Column::len).sum()
    }

    /// Next snapshot with a new column order.
    pub(crate) fn with_column_order(&self, ordered_column_ids: Vec<ColumnId>, outcome: Outcome) -> Self {
        Self {
            columns: self.columns.clone(),
            ordered_column_ids,
            last_operation: Some(outcome),
        }
    }

    /// Next snapshot with some columns replaced by id.
    ///
    /// Callers only pass columns that already exist on this board.
    pub(crate) fn with_replaced_columns(
        &self,
        replacements: impl IntoIterator<Item = Column>,
        outcome: Outcome,
    ) -> Self {
        let mut columns = self.columns.clone();
        for column in replacements {
            columns.insert(column.column_id.clone(), column);
        }
        Self {
            columns,
            ordered_column_ids: self.ordered_column_ids.clone(),
            last_operation: Some(outcome),
        }
    }
}
