//! Drop edge hints.

use serde::{Deserialize, Serialize};

/// Side of a target element a dragged element should land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Before,
    After,
}

/// Geometry the caller used to pick an edge. Does not affect arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Raw closest edge reported by hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitboxEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl HitboxEdge {
    /// Axis this hit-box edge belongs to.
    pub fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

impl From<HitboxEdge> for Edge {
    fn from(value: HitboxEdge) -> Self {
        match value {
            HitboxEdge::Top | HitboxEdge::Left => Self::Before,
            HitboxEdge::Bottom | HitboxEdge::Right => Self::After,
        }
    }
}
