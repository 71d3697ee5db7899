//! The game board: a square grid of cells, some holding gold.
//!
//! Boards are generated from an explicit `GameRng`, so the same seed always
//! produces the same gold layout.

mod cell;
mod grid;

pub use cell::{Cell, Position};
pub use grid::Board;
