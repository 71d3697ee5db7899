//! The square board and its gold placement.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::cell::{Cell, Position};
use crate::core::{GameError, GameResult, GameRng};

/// Square grid of cells, stored row-major by `x` then `y`.
///
/// The board exclusively owns its cells. Agents and searches refer to cells
/// by `Position` only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with no gold.
    ///
    /// Panics if `size` does not fit an `i32` coordinate.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size <= i32::MAX as usize, "Board size must fit an i32 coordinate");

        let cells = (0..size)
            .flat_map(|x| (0..size).map(move |y| Cell::empty(Position::new(x as i32, y as i32))))
            .collect();

        Self { size, cells }
    }

    /// Generate a board with exactly `gold_cells` cells holding gold.
    ///
    /// Picks uniformly random cells and seeds each one not already holding
    /// gold with an amount drawn from `gold_range`, retrying on collision.
    pub fn generate(
        size: usize,
        gold_cells: usize,
        gold_range: RangeInclusive<u32>,
        rng: &mut GameRng,
    ) -> GameResult<Self> {
        if gold_cells > size * size {
            return Err(GameError::InvalidConfig(format!(
                "{gold_cells} gold cells do not fit a {size}x{size} board"
            )));
        }
        if gold_range.is_empty() {
            return Err(GameError::InvalidConfig(format!(
                "gold range {}..={} is empty",
                gold_range.start(),
                gold_range.end()
            )));
        }

        let mut board = Self::empty(size);
        let mut remaining = gold_cells;
        let mut collisions = 0u32;

        while remaining > 0 {
            let index = rng.gen_range_usize(0..board.cells.len());
            let cell = &mut board.cells[index];

            if cell.has_gold {
                collisions += 1;
                continue;
            }

            cell.place_gold(rng.gen_amount(gold_range.clone()));
            remaining -= 1;
        }

        trace!(size, gold_cells, collisions, "board generated");
        Ok(board)
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a coordinate lies on the board.
    #[must_use]
    pub fn is_in_bounds(&self, position: Position) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(position.x as i64)) && (0..size).contains(&(position.y as i64))
    }

    /// Row-major index of an in-bounds position.
    pub(crate) fn index_of(&self, position: Position) -> GameResult<usize> {
        if !self.is_in_bounds(position) {
            return Err(GameError::OutOfBounds {
                x: position.x,
                y: position.y,
                size: self.size,
            });
        }
        Ok(position.x as usize * self.size + position.y as usize)
    }

    /// Position of a row-major index.
    pub(crate) fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.size) as i32, (index % self.size) as i32)
    }

    /// Get the cell at a coordinate.
    pub fn cell_at(&self, position: Position) -> GameResult<&Cell> {
        let index = self.index_of(position)?;
        Ok(&self.cells[index])
    }

    /// Get the cell at a coordinate mutably.
    pub fn cell_at_mut(&mut self, position: Position) -> GameResult<&mut Cell> {
        let index = self.index_of(position)?;
        Ok(&mut self.cells[index])
    }

    /// Cell by row-major index.
    pub(crate) fn cell_by_index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Put gold in a specific cell, replacing whatever it held.
    pub fn place_gold(&mut self, position: Position, amount: u32) -> GameResult<()> {
        self.cell_at_mut(position)?.place_gold(amount);
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Rows of cells, one slice per `x`.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of cells currently holding gold.
    #[must_use]
    pub fn gold_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.has_gold).count()
    }

    /// Total gold still available on the board.
    #[must_use]
    pub fn remaining_gold(&self) -> u64 {
        self.cells.iter().filter_map(Cell::available_gold).map(u64::from).sum()
    }
}
