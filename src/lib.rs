//! # gold-rush
//!
//! Simulation engine for a two-agent gold collection game on a square grid.
//!
//! Each turn an agent pays a query cost to learn a target cell, then walks
//! up to a fixed number of steps toward it, paying per step and collecting
//! the target's gold on arrival. An agent that cannot pay is eliminated; the
//! game is over once both are.
//!
//! ## Design Principles
//!
//! 1. **Explicit randomness**: boards come from a seedable `GameRng` owned by
//!    the engine, so every game can be replayed from its seed.
//!
//! 2. **Single ownership**: the `Board` owns every cell. Agents and searches
//!    hold `Position`s, never references into the grid.
//!
//! 3. **Configuration over constants**: every rule value lives in
//!    `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Agent identity, agents, RNG, configuration, errors
//! - `board`: Cells and the grid
//! - `search`: Target selectors (nearest gold, richest gold)
//! - `engine`: Turn state machine, movement, summary, shared handle
//!
//! The engine has no presentation layer; callers drive it through
//! `GameEngine` (or `SharedGame`) and read `GameSnapshot`s.

pub mod core;
pub mod board;
pub mod search;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Agent, AgentId, AgentMap, AgentProfile,
    GameConfig, GameError, GameResult,
    GameRng, GameRngState,
};

pub use crate::board::{Board, Cell, Position};

pub use crate::search::{NearestGold, RichestGold, Strategy, TargetSelector};

pub use crate::engine::{
    AgentStats, GameEngine, GameSnapshot, GameSummary,
    MoveReport, MovementRules, SharedGame, TurnOutcome, TurnRecord,
};
