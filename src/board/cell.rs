//! Grid coordinates and cells.

use serde::{Deserialize, Serialize};

/// A grid coordinate.
///
/// Signed so that movement deltas can step off the board and be rejected
/// by `Board::is_in_bounds` instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a delta.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// 4-directional step distance to another position.
    #[must_use]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One board cell.
///
/// Collecting gold clears `has_gold` but keeps `gold`, so a display layer
/// can still show what the cell held.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub position: Position,
    pub has_gold: bool,
    pub gold: u32,
}

impl Cell {
    /// Create an empty cell.
    #[must_use]
    pub const fn empty(position: Position) -> Self {
        Self {
            position,
            has_gold: false,
            gold: 0,
        }
    }

    /// Gold currently available for collection.
    #[must_use]
    pub fn available_gold(&self) -> Option<u32> {
        self.has_gold.then_some(self.gold)
    }

    /// Place gold in this cell.
    pub fn place_gold(&mut self, amount: u32) {
        self.has_gold = true;
        self.gold = amount;
    }

    /// Take the available gold, leaving the cell without gold.
    pub fn take_gold(&mut self) -> Option<u32> {
        let amount = self.available_gold()?;
        self.has_gold = false;
        Some(amount)
    }
}
