//! Step-limited movement toward a target cell.
//!
//! Direction is fixed once per phase: each step moves by the sign of the
//! offset to the target on both axes at once, so the agent walks a straight
//! (possibly diagonal) line and may overshoot an axis it has already
//! matched. The next turn's query re-aims it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Position};
use crate::core::{Agent, GameConfig, GameResult};

/// Per-turn movement parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRules {
    /// Maximum loop iterations per phase.
    pub step_budget: u32,
    /// Currency per successful step.
    pub move_cost: u32,
}

impl From<&GameConfig> for MovementRules {
    fn from(config: &GameConfig) -> Self {
        Self {
            step_budget: config.step_budget,
            move_cost: config.move_cost,
        }
    }
}

/// What happened during one movement phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Cell the agent was walking toward.
    pub target: Position,
    /// Steps taken and paid for.
    pub steps: u32,
    /// Iterations spent on off-board steps.
    pub skipped: u32,
    /// Whether the agent ended on the target.
    pub reached: bool,
    /// Gold picked up at the target.
    pub collected: Option<u32>,
    /// Whether a step was unaffordable.
    pub eliminated: bool,
}

impl MoveReport {
    fn new(target: Position) -> Self {
        Self {
            target,
            steps: 0,
            skipped: 0,
            reached: false,
            collected: None,
            eliminated: false,
        }
    }
}

/// Walk `agent` toward `target` for at most `rules.step_budget` iterations.
///
/// An off-board step is skipped without charge but still uses up an
/// iteration. The phase ends early when a step is unaffordable (the agent
/// is eliminated) or when the agent lands on the target, at which point it
/// collects the target's gold. An agent already on its target collects
/// without moving.
pub fn move_toward(
    agent: &mut Agent,
    board: &mut Board,
    target: Position,
    rules: MovementRules,
) -> GameResult<MoveReport> {
    let mut report = MoveReport::new(target);
    let start = agent.position();

    if start == target {
        report.reached = true;
        report.collected = agent.collect_gold(board.cell_at_mut(target)?);
        return Ok(report);
    }

    let dx = (target.x - start.x).signum();
    let dy = (target.y - start.y).signum();

    for _ in 0..rules.step_budget {
        let next = agent.position().offset(dx, dy);
        if !board.is_in_bounds(next) {
            report.skipped += 1;
            continue;
        }

        if !agent.attempt_move(next, rules.move_cost) {
            report.eliminated = true;
            break;
        }
        report.steps += 1;

        if next == target {
            report.reached = true;
            report.collected = agent.collect_gold(board.cell_at_mut(target)?);
            break;
        }
    }

    debug!(
        agent = %agent.id(),
        %start,
        end = %agent.position(),
        %target,
        steps = report.steps,
        skipped = report.skipped,
        "movement phase finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AgentId;

    const RULES: MovementRules = MovementRules {
        step_budget: 4,
        move_cost: 5,
    };

    fn agent_at(x: i32, y: i32, currency: u32) -> Agent {
        Agent::new(AgentId::A, Position::new(x, y), currency)
    }

    #[test]
    fn test_diagonal_reach_and_collect() {
        let mut board = Board::empty(30);
        board.place_gold(Position::new(2, 2), 30).unwrap();
        let mut agent = agent_at(0, 0, 95);

        let report = move_toward(&mut agent, &mut board, Position::new(2, 2), RULES).unwrap();

        assert!(report.reached);
        assert_eq!(report.steps, 2);
        assert_eq!(report.collected, Some(30));
        assert_eq!(agent.position(), Position::new(2, 2));
        assert_eq!(agent.currency(), 95 - 10 + 30);
        assert_eq!(agent.steps_taken(), 2);
        assert!(!board.cell_at(Position::new(2, 2)).unwrap().has_gold);
    }

    #[test]
    fn test_budget_caps_steps() {
        let mut board = Board::empty(30);
        board.place_gold(Position::new(10, 0), 30).unwrap();
        let mut agent = agent_at(0, 0, 100);

        let report = move_toward(&mut agent, &mut board, Position::new(10, 0), RULES).unwrap();

        assert!(!report.reached);
        assert_eq!(report.steps, 4);
        assert_eq!(agent.position(), Position::new(4, 0));
        assert_eq!(agent.currency(), 80);
        assert!(board.cell_at(Position::new(10, 0)).unwrap().has_gold);
    }

    #[test]
    fn test_overshoots_matched_axis() {
        let mut board = Board::empty(30);
        board.place_gold(Position::new(1, 3), 30).unwrap();
        let mut agent = agent_at(0, 0, 100);

        let report = move_toward(&mut agent, &mut board, Position::new(1, 3), RULES).unwrap();

        assert!(!report.reached);
        assert_eq!(agent.position(), Position::new(4, 4));
        assert_eq!(report.collected, None);
    }

    #[test]
    fn test_off_board_steps_are_skipped_free() {
        let mut board = Board::empty(30);
        board.place_gold(Position::new(29, 5), 30).unwrap();
        let mut agent = agent_at(28, 0, 100);

        let report = move_toward(&mut agent, &mut board, Position::new(29, 5), RULES).unwrap();

        assert_eq!(report.steps, 1);
        assert_eq!(report.skipped, 3);
        assert_eq!(agent.position(), Position::new(29, 1));
        assert_eq!(agent.currency(), 95);
        assert!(!agent.is_eliminated());
    }

    #[test]
    fn test_unaffordable_step_eliminates() {
        let mut board = Board::empty(30);
        board.place_gold(Position::new(3, 3), 30).unwrap();
        let mut agent = agent_at(0, 0, 7);

        let report = move_toward(&mut agent, &mut board, Position::new(3, 3), RULES).unwrap();

        assert!(report.eliminated);
        assert_eq!(report.steps, 1);
        assert_eq!(agent.position(), Position::new(1, 1));
        assert_eq!(agent.currency(), 2);
        assert!(agent.is_eliminated());
    }

    #[test]
    fn test_zero_currency_first_step_eliminates() {
        let mut board = Board::empty(30);
        board.place_gold(Position::new(1, 1), 30).unwrap();
        let mut agent = agent_at(0, 0, 0);

        let report = move_toward(&mut agent, &mut board, Position::new(1, 1), RULES).unwrap();

        assert!(report.eliminated);
        assert_eq!(agent.steps_taken(), 0);
        assert_eq!(agent.position(), Position::new(0, 0));
    }

    #[test]
    fn test_already_on_target_collects() {
        let mut board = Board::empty(30);
        board.place_gold(Position::new(5, 5), 12).unwrap();
        let mut agent = agent_at(5, 5, 20);

        let report = move_toward(&mut agent, &mut board, Position::new(5, 5), RULES).unwrap();

        assert!(report.reached);
        assert_eq!(report.steps, 0);
        assert_eq!(report.collected, Some(12));
        assert_eq!(agent.currency(), 32);
        assert_eq!(agent.steps_taken(), 0);
    }

    #[test]
    fn test_passing_over_gold_does_not_collect() {
        let mut board = Board::empty(30);
        board.place_gold(Position::new(1, 1), 40).unwrap();
        board.place_gold(Position::new(3, 3), 10).unwrap();
        let mut agent = agent_at(0, 0, 100);

        let report = move_toward(&mut agent, &mut board, Position::new(3, 3), RULES).unwrap();

        assert_eq!(report.collected, Some(10));
        assert!(board.cell_at(Position::new(1, 1)).unwrap().has_gold);
    }
}
