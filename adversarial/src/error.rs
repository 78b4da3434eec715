//! Typed game-search errors.
//!
//! Only pre-flight failures are errors. "No legal move" at the root is a
//! normal outcome reported as `Decision::action == None`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The state reports zero agents, so there is nobody to move.
    NoAgents,
    /// `depth × num_agents` does not fit the move counter.
    HorizonOverflow { depth: u32, num_agents: usize },
    /// A pruning mode name did not parse.
    UnknownPruning { name: String },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAgents => write!(f, "game state has no agents"),
            Self::HorizonOverflow { depth, num_agents } => write!(
                f,
                "search horizon overflows: depth {depth} with {num_agents} agents"
            ),
            Self::UnknownPruning { name } => {
                write!(f, "unknown pruning mode: {name:?} (expected minimax or alphabeta)")
            }
        }
    }
}

impl std::error::Error for GameError {}
