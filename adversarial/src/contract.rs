//! Game state contract trait.

/// Trait for turn-based games searched by the minimax engine.
///
/// # Contract
///
/// - `legal_actions` must be deterministic: the same state and agent yield
///   the same actions in the same order. Ties between equally valued moves
///   are resolved by this order.
/// - Agent 0 is the maximizer; agents `1..num_agents()` are minimizers.
/// - `generate_successor` is only called with actions returned by
///   `legal_actions` for the same agent.
pub trait GameState: Sized {
    type Action: Clone;

    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    fn generate_successor(&self, agent: usize, action: &Self::Action) -> Self;

    fn num_agents(&self) -> usize;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Whether the game is over, regardless of the remaining depth.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// The agent to move after `agent`, and the depth it moves at.
///
/// Depth only drops once the last agent of a round has moved.
#[must_use]
pub fn next_turn(agent: usize, depth: u32, num_agents: usize) -> (usize, u32) {
    if agent + 1 >= num_agents {
        (0, depth.saturating_sub(1))
    } else {
        (agent + 1, depth)
    }
}
