//! Richest-gold scan.

use super::TargetSelector;
use crate::board::{Board, Position};

/// Selects the cell holding the most gold, wherever the agent stands.
///
/// Ties go to the first cell in row-major order (lowest `x`, then lowest `y`).
#[derive(Clone, Copy, Debug, Default)]
pub struct RichestGold;

impl RichestGold {
    /// Scan the whole board for the largest available pile.
    #[must_use]
    pub fn search(board: &Board) -> Option<(Position, u32)> {
        let mut best: Option<(Position, u32)> = None;

        for cell in board.cells() {
            let Some(amount) = cell.available_gold() else {
                continue;
            };
            if best.map_or(true, |(_, top)| amount > top) {
                best = Some((cell.position, amount));
            }
        }

        best
    }
}

impl TargetSelector for RichestGold {
    fn name(&self) -> &'static str {
        "richest-gold"
    }

    fn select(&self, board: &Board, _from: Position) -> Option<Position> {
        Self::search(board).map(|(position, _)| position)
    }
}
