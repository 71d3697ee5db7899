//! Nearest-gold search.
//!
//! A Dijkstra-style expansion over the grid with unit edge weights. The
//! frontier is a min-heap keyed by best-known distance; improved distances
//! are pushed as new entries instead of decreasing keys in place, and stale
//! entries are discarded when popped because their cell is already visited.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::TargetSelector;
use crate::board::{Board, Position};

/// 4-neighbour offsets, in expansion order.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Selects the gold cell with the shortest 4-directional path from the agent.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestGold;

impl NearestGold {
    /// Search outward from `from` and return the first gold cell visited
    /// together with its step distance.
    ///
    /// Ties between equally near cells are broken by heap order, not by
    /// coordinate. Returns `None` when `from` is off the board or no gold
    /// remains.
    #[must_use]
    pub fn search(board: &Board, from: Position) -> Option<(Position, u32)> {
        let start = board.index_of(from).ok()?;
        let cell_count = board.size() * board.size();

        let mut distances = vec![u32::MAX; cell_count];
        let mut visited = vec![false; cell_count];
        let mut frontier = BinaryHeap::new();

        distances[start] = 0;
        frontier.push(Reverse((0u32, start)));

        while let Some(Reverse((distance, index))) = frontier.pop() {
            if visited[index] {
                continue;
            }
            visited[index] = true;

            if board.cell_by_index(index).has_gold {
                return Some((board.position_of(index), distance));
            }

            let current = board.position_of(index);
            for (dx, dy) in DIRECTIONS {
                let Ok(neighbor) = board.index_of(current.offset(dx, dy)) else {
                    continue;
                };
                if visited[neighbor] {
                    continue;
                }

                let next = distance + 1;
                if next < distances[neighbor] {
                    distances[neighbor] = next;
                    frontier.push(Reverse((next, neighbor)));
                }
            }
        }

        None
    }
}

impl TargetSelector for NearestGold {
    fn name(&self) -> &'static str {
        "nearest-gold"
    }

    fn select(&self, board: &Board, from: Position) -> Option<Position> {
        Self::search(board, from).map(|(position, _)| position)
    }
}
