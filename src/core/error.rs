//! Engine error taxonomy.
//!
//! Running out of currency is not an error: elimination is a normal state
//! transition reported through `Agent::is_eliminated` and `TurnOutcome`.

use thiserror::Error;

/// Errors surfaced by the engine to its caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// An operation needing game state ran before `initialize`.
    #[error("game has not been initialized; call initialize() first")]
    NotInitialized,

    /// A coordinate outside the board was dereferenced.
    #[error("cell ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i32, y: i32, size: usize },

    /// A raw agent tag did not name a known agent.
    #[error("unknown agent tag '{0}'")]
    UnknownAgent(char),

    /// Configuration values violate an engine invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

/// Result alias used throughout the engine.
pub type GameResult<T> = Result<T, GameError>;
