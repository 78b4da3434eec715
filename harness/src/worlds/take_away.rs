//! `TakeAway`: a counter game for any number of agents.
//!
//! Agents take turns removing between 1 and `max_take` counters from a
//! shared pile. Whoever takes the last counter wins. The game is a win when
//! agent 0 took it and a loss when any other agent did.

use std::fmt;

use waypoint_adversarial::GameState;

/// Score for a game agent 0 has won.
pub const WIN_SCORE: i64 = 1000;

/// Score for a game agent 0 has lost.
pub const LOSE_SCORE: i64 = -1000;

/// Remove this many counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Take(pub u32);

impl fmt::Display for Take {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "take{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TakeAway {
    remaining: u32,
    max_take: u32,
    agents: usize,
    last_taker: Option<usize>,
}

impl TakeAway {
    #[must_use]
    pub fn new(remaining: u32, max_take: u32, agents: usize) -> Self {
        Self {
            remaining,
            max_take,
            agents,
            last_taker: None,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Static evaluation from agent 0's point of view.
    ///
    /// Finished games score [`WIN_SCORE`] or [`LOSE_SCORE`]. Otherwise the
    /// pile is judged with the two-player rule: a pile that is a multiple of
    /// `max_take + 1` is lost for the agent about to move, which at a cutoff
    /// is agent 0.
    #[must_use]
    pub fn evaluate(&self) -> i64 {
        if self.is_win() {
            return WIN_SCORE;
        }
        if self.is_lose() {
            return LOSE_SCORE;
        }
        if self.remaining % self.max_take.saturating_add(1) == 0 {
            -1
        } else {
            1
        }
    }
}

impl GameState for TakeAway {
    type Action = Take;

    fn legal_actions(&self, _agent: usize) -> Vec<Take> {
        (1..=self.max_take.min(self.remaining)).map(Take).collect()
    }

    fn generate_successor(&self, agent: usize, action: &Take) -> Self {
        Self {
            remaining: self.remaining.saturating_sub(action.0),
            last_taker: Some(agent),
            ..self.clone()
        }
    }

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn is_win(&self) -> bool {
        self.remaining == 0 && self.last_taker == Some(0)
    }

    fn is_lose(&self) -> bool {
        self.remaining == 0 && matches!(self.last_taker, Some(a) if a != 0)
    }
}
