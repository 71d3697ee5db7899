//! End-of-game reporting and read-only views for a presentation layer.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Agent, AgentMap};

/// One agent's totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStats {
    pub steps_taken: u32,
    pub currency_spent: u32,
    pub currency_collected: u32,
    pub final_currency: u32,
    pub eliminated: bool,
}

impl From<&Agent> for AgentStats {
    fn from(agent: &Agent) -> Self {
        Self {
            steps_taken: agent.steps_taken(),
            currency_spent: agent.currency_spent(),
            currency_collected: agent.currency_collected(),
            final_currency: agent.currency(),
            eliminated: agent.is_eliminated(),
        }
    }
}

/// Per-agent report. `Display` renders one line per agent.
///
/// ```
/// use gold_rush::board::Position;
/// use gold_rush::core::{Agent, AgentMap};
/// use gold_rush::engine::GameSummary;
///
/// let agents = AgentMap::new(|id| Agent::new(id, Position::new(0, 0), 100));
/// let summary = GameSummary::from_agents(&agents);
/// assert_eq!(
///     summary.to_string(),
///     "Agent A: Steps = 0, Gold Spent = 0, Gold Collected = 0\n\
///      Agent B: Steps = 0, Gold Spent = 0, Gold Collected = 0"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub agents: AgentMap<AgentStats>,
}

impl GameSummary {
    /// Collect totals from both agents.
    #[must_use]
    pub fn from_agents(agents: &AgentMap<Agent>) -> Self {
        Self {
            agents: agents.map(|_, agent| AgentStats::from(agent)),
        }
    }
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (id, stats)) in self.agents.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}: Steps = {}, Gold Spent = {}, Gold Collected = {}",
                id, stats.steps_taken, stats.currency_spent, stats.currency_collected
            )?;
        }
        Ok(())
    }
}

/// Everything a display needs, captured at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub agents: AgentMap<Agent>,
    pub turn: u32,
    pub is_over: bool,
    /// Present once the game is over.
    pub summary: Option<GameSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::core::AgentId;

    #[test]
    fn test_stats_from_agent() {
        let mut agent = Agent::new(AgentId::A, Position::new(0, 0), 20);
        agent.attempt_move(Position::new(1, 1), 5);
        agent.pay(20);

        let stats = AgentStats::from(&agent);
        assert_eq!(stats.steps_taken, 1);
        assert_eq!(stats.currency_spent, 5);
        assert_eq!(stats.final_currency, 15);
        assert!(stats.eliminated);
    }

    #[test]
    fn test_summary_serde() {
        let agents = AgentMap::new(|id| Agent::new(id, Position::new(1, 2), 100));
        let summary = GameSummary::from_agents(&agents);

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: GameSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
