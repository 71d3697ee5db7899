//! Thread-safe handle for serving one game to concurrent callers.
//!
//! Each operation holds the lock for its whole duration, so a turn's target
//! search and movement never interleave with another caller's turn.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::game::{GameEngine, TurnOutcome};
use super::summary::{GameSnapshot, GameSummary};
use crate::core::{AgentId, GameResult};

/// Cloneable, lock-guarded `GameEngine`.
#[derive(Clone, Debug)]
pub struct SharedGame {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn initialize(&self) -> GameResult<()> {
        self.lock().initialize()
    }

    pub fn make_move(&self, id: AgentId) -> GameResult<TurnOutcome> {
        self.lock().make_move(id)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.lock().is_over()
    }

    pub fn summary(&self) -> GameResult<GameSummary> {
        self.lock().summary()
    }

    pub fn snapshot(&self) -> GameResult<GameSnapshot> {
        self.lock().snapshot()
    }

    /// Run `f` against the engine under the lock.
    pub fn with_engine<R>(&self, f: impl FnOnce(&GameEngine) -> R) -> R {
        f(&self.lock())
    }

    // The engine is consistent between calls, so a panic in another holder
    // leaves nothing half-applied.
    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
