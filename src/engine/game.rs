//! The simulation engine: board + two agents + the turn state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::movement::{self, MoveReport, MovementRules};
use super::summary::{GameSnapshot, GameSummary};
use crate::board::{Board, Position};
use crate::core::{
    Agent, AgentId, AgentMap, GameConfig, GameError, GameResult, GameRng, GameRngState,
};

/// Result of one `make_move` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The agent was already out; nothing changed.
    AlreadyEliminated,
    /// The agent could not pay for its query and is now out.
    EliminatedOnQuery,
    /// The query was paid for but found no gold.
    NoTarget,
    /// The agent walked toward a target.
    Moved(MoveReport),
}

/// One entry of the turn log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub agent: AgentId,
    pub target: Option<Position>,
    pub outcome: TurnOutcome,
}

/// Mutable game state owned by the engine.
#[derive(Clone, Debug)]
struct GameState {
    board: Board,
    agents: AgentMap<Agent>,
    turn: u32,
    history: Vec<TurnRecord>,
}

impl GameState {
    fn is_over(&self) -> bool {
        self.agents.iter().all(|(_, agent)| agent.is_eliminated())
    }
}

/// Two-agent gold collection engine.
///
/// Single-threaded: each call runs to completion. Wrap in `SharedGame` to
/// serve concurrent callers.
///
/// ```
/// use gold_rush::core::{AgentId, GameConfig};
/// use gold_rush::engine::GameEngine;
///
/// let mut engine = GameEngine::new(GameConfig::default().with_seed(42)).unwrap();
/// engine.initialize().unwrap();
///
/// while !engine.is_over() {
///     for id in AgentId::ALL {
///         engine.make_move(id).unwrap();
///     }
/// }
/// println!("{}", engine.summary().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    state: Option<GameState>,
}

impl GameEngine {
    /// Create an engine. No game exists until `initialize` is called.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        Ok(Self {
            config,
            rng,
            state: None,
        })
    }

    /// Create an engine around an explicit board and agents.
    ///
    /// The board's size overrides `config.board_size`.
    pub fn from_parts(
        config: GameConfig,
        board: Board,
        agents: AgentMap<Agent>,
    ) -> GameResult<Self> {
        let config = config.with_board_size(board.size());
        let mut engine = Self::new(config)?;

        for (slot, agent) in agents.iter() {
            if agent.id() != slot {
                return Err(GameError::InvalidConfig(format!(
                    "{} stored in the slot for {slot}",
                    agent.id()
                )));
            }
            board.cell_at(agent.position())?;
        }

        engine.state = Some(GameState {
            board,
            agents,
            turn: 0,
            history: Vec::new(),
        });
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the engine's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Checkpoint of the engine's RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rewind or fast-forward the RNG to a checkpoint from `rng_state`.
    ///
    /// The next `initialize` then generates the board the checkpointed
    /// engine would have generated.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Start a fresh game: regenerate the board and reset both agents.
    pub fn initialize(&mut self) -> GameResult<()> {
        let size = self.config.board_size;
        let board = Board::generate(
            size,
            self.config.gold_cell_target(),
            self.config.gold_min..=self.config.gold_max,
            &mut self.rng,
        )?;

        let far = size as i32 - 1;
        let currency = self.config.starting_currency;
        let agents = AgentMap::new(|id| {
            let start = match id {
                AgentId::A => Position::new(0, 0),
                AgentId::B => Position::new(far, far),
            };
            Agent::new(id, start, currency)
        });

        info!(
            seed = self.rng.seed(),
            size,
            gold_cells = board.gold_cell_count(),
            "game initialized"
        );

        self.state = Some(GameState {
            board,
            agents,
            turn: 0,
            history: Vec::new(),
        });
        Ok(())
    }

    /// Play one turn for `id`: pay the query, pick a target, walk toward it.
    ///
    /// A turn for an eliminated agent is a no-op.
    pub fn make_move(&mut self, id: AgentId) -> GameResult<TurnOutcome> {
        let profile = *self.config.profile(id);
        let rules = MovementRules::from(&self.config);
        let state = self.state.as_mut().ok_or(GameError::NotInitialized)?;

        if state.agents[id].is_eliminated() {
            return Ok(TurnOutcome::AlreadyEliminated);
        }

        state.turn += 1;
        let agent = &mut state.agents[id];
        let mut target = None;

        let outcome = if !agent.pay(profile.query_cost) {
            info!(agent = %id, currency = agent.currency(), "eliminated: cannot afford query");
            TurnOutcome::EliminatedOnQuery
        } else {
            target = profile.strategy.select(&state.board, agent.position());
            debug!(
                agent = %id,
                strategy = profile.strategy.selector().name(),
                from = %agent.position(),
                target = ?target,
                "target selected"
            );

            match target {
                None => TurnOutcome::NoTarget,
                Some(cell) => {
                    let report = movement::move_toward(agent, &mut state.board, cell, rules)?;
                    if report.eliminated {
                        info!(agent = %id, position = %agent.position(), "eliminated: cannot afford step");
                    }
                    TurnOutcome::Moved(report)
                }
            }
        };

        state.history.push(TurnRecord {
            turn: state.turn,
            agent: id,
            target,
            outcome: outcome.clone(),
        });

        if state.is_over() {
            info!(turns = state.turn, summary = %GameSummary::from_agents(&state.agents), "game over");
        }
        Ok(outcome)
    }

    /// Whether both agents are eliminated. `false` before initialization.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.as_ref().is_some_and(GameState::is_over)
    }

    /// Per-agent totals. Meaningful once the game is over.
    pub fn summary(&self) -> GameResult<GameSummary> {
        Ok(GameSummary::from_agents(&self.state()?.agents))
    }

    pub fn board(&self) -> GameResult<&Board> {
        Ok(&self.state()?.board)
    }

    pub fn agent(&self, id: AgentId) -> GameResult<&Agent> {
        Ok(&self.state()?.agents[id])
    }

    pub fn agents(&self) -> GameResult<&AgentMap<Agent>> {
        Ok(&self.state()?.agents)
    }

    /// Turns played since initialization, not counting no-op turns.
    pub fn turn(&self) -> GameResult<u32> {
        Ok(self.state()?.turn)
    }

    pub fn history(&self) -> GameResult<&[TurnRecord]> {
        Ok(&self.state()?.history)
    }

    /// Copy of the current state for display.
    pub fn snapshot(&self) -> GameResult<GameSnapshot> {
        let state = self.state()?;
        let is_over = state.is_over();

        Ok(GameSnapshot {
            board: state.board.clone(),
            agents: state.agents.clone(),
            turn: state.turn,
            is_over,
            summary: is_over.then(|| GameSummary::from_agents(&state.agents)),
        })
    }

    fn state(&self) -> GameResult<&GameState> {
        self.state.as_ref().ok_or(GameError::NotInitialized)
    }
}
