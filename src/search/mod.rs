//! Target selection: how an agent decides which gold cell to walk toward.
//!
//! Selectors are trait-based so an agent's algorithm is just data in its
//! profile:
//! - `NearestGold`: uniform-cost frontier search over 4-neighbour steps
//! - `RichestGold`: greedy scan for the largest pile on the board

mod nearest;
mod richest;

pub use nearest::NearestGold;
pub use richest::RichestGold;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};

/// Picks a target cell for an agent standing at `from`.
pub trait TargetSelector: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Choose a gold-bearing cell, or `None` if there is nothing to chase.
    fn select(&self, board: &Board, from: Position) -> Option<Position>;
}

/// Target-selection algorithm assigned to an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Closest gold by step distance.
    NearestGold,
    /// Largest gold amount anywhere on the board.
    RichestGold,
}

impl Strategy {
    /// The selector implementing this strategy.
    #[must_use]
    pub fn selector(self) -> &'static dyn TargetSelector {
        match self {
            Strategy::NearestGold => &NearestGold,
            Strategy::RichestGold => &RichestGold,
        }
    }

    /// Run this strategy.
    #[must_use]
    pub fn select(self, board: &Board, from: Position) -> Option<Position> {
        self.selector().select(board, from)
    }
}
