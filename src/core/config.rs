//! Game configuration.
//!
//! Every rule constant of the game is a named parameter here. The defaults
//! reproduce the classic setup: a 30x30 board, 20% of cells holding 10-50
//! gold, both agents starting with 100 currency.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::identity::AgentId;
use crate::search::Strategy;

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: usize = 30;
/// Default fraction of cells seeded with gold.
pub const DEFAULT_GOLD_FRACTION: f64 = 0.20;
/// Default smallest gold amount in a cell.
pub const DEFAULT_GOLD_MIN: u32 = 10;
/// Default largest gold amount in a cell.
pub const DEFAULT_GOLD_MAX: u32 = 50;
/// Default starting currency for each agent.
pub const DEFAULT_STARTING_CURRENCY: u32 = 100;
/// Default cost of a single movement step.
pub const DEFAULT_MOVE_COST: u32 = 5;
/// Default number of steps an agent may take per turn.
pub const DEFAULT_STEP_BUDGET: u32 = 4;
/// Default query cost for agent A.
pub const DEFAULT_QUERY_COST_A: u32 = 5;
/// Default query cost for agent B.
pub const DEFAULT_QUERY_COST_B: u32 = 10;

/// How a single agent plays: what it pays per query and how it picks targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Currency spent once per turn to learn a target.
    pub query_cost: u32,
    /// Target-selection algorithm.
    pub strategy: Strategy,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,

    /// Fraction of cells holding gold after generation, in `[0, 1]`.
    pub gold_fraction: f64,

    /// Inclusive lower bound of a cell's gold amount.
    pub gold_min: u32,

    /// Inclusive upper bound of a cell's gold amount.
    pub gold_max: u32,

    /// Currency each agent starts with.
    pub starting_currency: u32,

    /// Currency per movement step.
    pub move_cost: u32,

    /// Maximum movement iterations per turn.
    pub step_budget: u32,

    /// Agent A's query cost and strategy.
    pub agent_a: AgentProfile,

    /// Agent B's query cost and strategy.
    pub agent_b: AgentProfile,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            gold_fraction: DEFAULT_GOLD_FRACTION,
            gold_min: DEFAULT_GOLD_MIN,
            gold_max: DEFAULT_GOLD_MAX,
            starting_currency: DEFAULT_STARTING_CURRENCY,
            move_cost: DEFAULT_MOVE_COST,
            step_budget: DEFAULT_STEP_BUDGET,
            agent_a: AgentProfile {
                query_cost: DEFAULT_QUERY_COST_A,
                strategy: Strategy::NearestGold,
            },
            agent_b: AgentProfile {
                query_cost: DEFAULT_QUERY_COST_B,
                strategy: Strategy::RichestGold,
            },
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    ///
    /// ```
    /// use gold_rush::core::GameConfig;
    ///
    /// let config = GameConfig::from_toml_str("board_size = 12\nseed = 7").unwrap();
    /// assert_eq!(config.board_size, 12);
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.move_cost, 5);
    /// ```
    pub fn from_toml_str(text: &str) -> GameResult<Self> {
        let config: GameConfig =
            toml::from_str(text).map_err(|e| GameError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration against the engine's invariants.
    pub fn validate(&self) -> GameResult<()> {
        if self.board_size == 0 {
            return Err(GameError::InvalidConfig("board_size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.gold_fraction) {
            return Err(GameError::InvalidConfig(format!(
                "gold_fraction {} is outside [0, 1]",
                self.gold_fraction
            )));
        }
        if self.gold_min > self.gold_max {
            return Err(GameError::InvalidConfig(format!(
                "gold_min {} exceeds gold_max {}",
                self.gold_min, self.gold_max
            )));
        }
        if self.step_budget == 0 {
            return Err(GameError::InvalidConfig("step_budget must be positive".into()));
        }
        Ok(())
    }

    /// Number of cells seeded with gold: `floor(size² · fraction)`.
    #[must_use]
    pub fn gold_cell_target(&self) -> usize {
        let total = self.board_size * self.board_size;
        ((total as f64 * self.gold_fraction).floor() as usize).min(total)
    }

    /// Get an agent's profile.
    #[must_use]
    pub fn profile(&self, agent: AgentId) -> &AgentProfile {
        match agent {
            AgentId::A => &self.agent_a,
            AgentId::B => &self.agent_b,
        }
    }

    /// Set the board side length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the gold fill fraction.
    #[must_use]
    pub fn with_gold_fraction(mut self, fraction: f64) -> Self {
        self.gold_fraction = fraction;
        self
    }

    /// Set the inclusive gold amount range.
    #[must_use]
    pub fn with_gold_range(mut self, min: u32, max: u32) -> Self {
        self.gold_min = min;
        self.gold_max = max;
        self
    }

    /// Set the starting currency.
    #[must_use]
    pub fn with_starting_currency(mut self, currency: u32) -> Self {
        self.starting_currency = currency;
        self
    }

    /// Set the per-step movement cost.
    #[must_use]
    pub fn with_move_cost(mut self, cost: u32) -> Self {
        self.move_cost = cost;
        self
    }

    /// Set the per-turn step budget.
    #[must_use]
    pub fn with_step_budget(mut self, budget: u32) -> Self {
        self.step_budget = budget;
        self
    }

    /// Replace an agent's profile.
    #[must_use]
    pub fn with_profile(mut self, agent: AgentId, profile: AgentProfile) -> Self {
        match agent {
            AgentId::A => self.agent_a = profile,
            AgentId::B => self.agent_b = profile,
        }
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
