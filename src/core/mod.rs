//! Core engine types: agent identity, agents, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod identity;
pub mod agent;
pub mod rng;
pub mod config;
pub mod error;

pub use identity::{AgentId, AgentMap};
pub use agent::Agent;
pub use rng::{GameRng, GameRngState};
pub use config::{AgentProfile, GameConfig};
pub use error::{GameError, GameResult};
