//! Game search policy types.

use std::str::FromStr;

use crate::error::GameError;

/// Ply depth used when none is configured.
pub const DEFAULT_DEPTH: u32 = 2;

/// Whether subtrees that cannot affect the result are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Plain minimax: every move up to the horizon is explored.
    #[default]
    Disabled,
    /// Alpha-beta bounds. Same value and action, less work.
    AlphaBeta,
}

impl Pruning {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "minimax",
            Self::AlphaBeta => "alphabeta",
        }
    }
}

impl FromStr for Pruning {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" | "none" | "disabled" => Ok(Self::Disabled),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Self::AlphaBeta),
            _ => Err(GameError::UnknownPruning { name: s.to_string() }),
        }
    }
}

/// Depth and pruning configuration for [`choose_action`](crate::decision::choose_action).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePolicy {
    /// Plies to search. Each ply is one move by every agent.
    pub depth: u32,
    pub pruning: Pruning,
}

impl GamePolicy {
    #[must_use]
    pub fn minimax(depth: u32) -> Self {
        Self {
            depth,
            pruning: Pruning::Disabled,
        }
    }

    #[must_use]
    pub fn alpha_beta(depth: u32) -> Self {
        Self {
            depth,
            pruning: Pruning::AlphaBeta,
        }
    }

    /// Total agent-moves explored before the cutoff.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoAgents`] for an empty game and
    /// [`GameError::HorizonOverflow`] if the product does not fit `u32`.
    pub fn horizon(&self, num_agents: usize) -> Result<u32, GameError> {
        if num_agents == 0 {
            return Err(GameError::NoAgents);
        }
        u32::try_from(num_agents)
            .ok()
            .and_then(|n| self.depth.checked_mul(n))
            .ok_or(GameError::HorizonOverflow {
                depth: self.depth,
                num_agents,
            })
    }

    /// Check that this policy can search a game with `num_agents` agents.
    ///
    /// # Errors
    ///
    /// Same as [`GamePolicy::horizon`].
    pub fn validate(&self, num_agents: usize) -> Result<(), GameError> {
        self.horizon(num_agents).map(|_| ())
    }

    /// Snapshot of this policy for report binding.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "depth": self.depth,
            "pruning": self.pruning.as_str(),
        })
    }
}

impl Default for GamePolicy {
    fn default() -> Self {
        Self::minimax(DEFAULT_DEPTH)
    }
}
