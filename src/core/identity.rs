//! Agent identification and per-agent data storage.
//!
//! ## AgentId
//!
//! The game always has exactly two agents, tagged `A` and `B`.
//!
//! ## AgentMap
//!
//! Fixed two-slot storage indexed by `AgentId` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::GameError;

/// Agent identity tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgentId {
    A,
    B,
}

impl AgentId {
    /// Both agents, in turn-listing order.
    pub const ALL: [AgentId; 2] = [AgentId::A, AgentId::B];

    /// Get the 0-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            AgentId::A => 0,
            AgentId::B => 1,
        }
    }

    /// The single-character tag.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            AgentId::A => 'A',
            AgentId::B => 'B',
        }
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.tag())
    }
}

impl TryFrom<char> for AgentId {
    type Error = GameError;

    /// Resolve a raw tag as a request handler would receive it.
    ///
    /// ```
    /// use gold_rush::core::AgentId;
    ///
    /// assert_eq!(AgentId::try_from('b'), Ok(AgentId::B));
    /// assert!(AgentId::try_from('x').is_err());
    /// ```
    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag.to_ascii_uppercase() {
            'A' => Ok(AgentId::A),
            'B' => Ok(AgentId::B),
            _ => Err(GameError::UnknownAgent(tag)),
        }
    }
}

/// Per-agent data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use gold_rush::core::{AgentId, AgentMap};
///
/// let mut spent: AgentMap<u32> = AgentMap::new(|_| 0);
/// spent[AgentId::B] += 10;
/// assert_eq!(spent[AgentId::A], 0);
/// assert_eq!(spent[AgentId::B], 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentMap<T> {
    data: [T; 2],
}

impl<T> AgentMap<T> {
    /// Create a new AgentMap with values from a factory function.
    pub fn new(factory: impl Fn(AgentId) -> T) -> Self {
        Self {
            data: [factory(AgentId::A), factory(AgentId::B)],
        }
    }

    /// Get a reference to an agent's data.
    #[must_use]
    pub fn get(&self, agent: AgentId) -> &T {
        &self.data[agent.index()]
    }

    /// Get a mutable reference to an agent's data.
    pub fn get_mut(&mut self, agent: AgentId) -> &mut T {
        &mut self.data[agent.index()]
    }

    /// Iterate over (AgentId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &T)> {
        AgentId::ALL.into_iter().zip(self.data.iter())
    }

    /// Map each entry into a new AgentMap.
    pub fn map<U>(&self, f: impl Fn(AgentId, &T) -> U) -> AgentMap<U> {
        AgentMap::new(|id| f(id, self.get(id)))
    }
}

impl<T> Index<AgentId> for AgentMap<T> {
    type Output = T;

    fn index(&self, agent: AgentId) -> &Self::Output {
        self.get(agent)
    }
}

impl<T> IndexMut<AgentId> for AgentMap<T> {
    fn index_mut(&mut self, agent: AgentId) -> &mut Self::Output {
        self.get_mut(agent)
    }
}
