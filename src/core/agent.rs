//! Agents and their currency accounting.
//!
//! Every payment flows through `Agent::pay`; movement goes through
//! `Agent::attempt_move`, which pays and steps in one go. A payment the
//! agent cannot afford eliminates it instead of charging anything.

use serde::{Deserialize, Serialize};

use super::identity::AgentId;
use crate::board::{Cell, Position};

/// A player moving on the board.
///
/// Counters only ever grow and `eliminated` only ever goes from `false`
/// to `true`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    position: Position,
    currency: u32,
    eliminated: bool,
    steps_taken: u32,
    currency_spent: u32,
    currency_collected: u32,
}

impl Agent {
    /// Create a fresh agent.
    #[must_use]
    pub fn new(id: AgentId, position: Position, currency: u32) -> Self {
        Self {
            id,
            position,
            currency,
            eliminated: false,
            steps_taken: 0,
            currency_spent: 0,
            currency_collected: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn currency(&self) -> u32 {
        self.currency
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    #[must_use]
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    #[must_use]
    pub fn currency_spent(&self) -> u32 {
        self.currency_spent
    }

    #[must_use]
    pub fn currency_collected(&self) -> u32 {
        self.currency_collected
    }

    /// Pay `cost`, or become eliminated if the balance is short.
    ///
    /// Returns `false` on elimination; nothing is deducted in that case.
    pub fn pay(&mut self, cost: u32) -> bool {
        if self.currency < cost {
            self.eliminated = true;
            return false;
        }
        self.currency -= cost;
        self.currency_spent += cost;
        true
    }

    /// Pay `cost` and step to `to`.
    ///
    /// On failure the agent is eliminated and stays where it was.
    pub fn attempt_move(&mut self, to: Position, cost: u32) -> bool {
        if !self.pay(cost) {
            return false;
        }
        self.position = to;
        self.steps_taken += 1;
        true
    }

    /// Collect whatever gold `cell` holds.
    ///
    /// Returns the amount collected, or `None` if the cell had none.
    /// Balances saturate at `u32::MAX`.
    pub fn collect_gold(&mut self, cell: &mut Cell) -> Option<u32> {
        let amount = cell.take_gold()?;
        self.currency_collected = self.currency_collected.saturating_add(amount);
        self.currency = self.currency.saturating_add(amount);
        Some(amount)
    }
}
