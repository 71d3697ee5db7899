//! The simulation engine.
//!
//! - `GameEngine`: owns the board, both agents and the RNG; runs turns
//! - `movement`: step-limited walking toward a target
//! - `GameSummary` / `GameSnapshot`: read-only views for display
//! - `SharedGame`: lock-guarded handle for concurrent callers

mod game;
pub mod movement;
mod shared;
mod summary;

pub use game::{GameEngine, TurnOutcome, TurnRecord};
pub use movement::{MoveReport, MovementRules};
pub use shared::SharedGame;
pub use summary::{AgentStats, GameSnapshot, GameSummary};
