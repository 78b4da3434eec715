//! Minimax and alpha-beta value functions.
//!
//! Both recurse over `(state, agent, depth)` with a countdown depth: a call
//! is terminal when the game is won or lost, or when `depth == 0`, and depth
//! drops by one after the last agent of a round has moved (see
//! [`next_turn`]).
//!
//! An agent with no legal actions at a non-terminal state is scored by the
//! evaluator, the same as a cutoff.

use crate::contract::{next_turn, GameState};
use crate::evaluator::{Evaluator, NEG_INFINITY, POS_INFINITY};

/// Work counters for one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Value-function calls, one per state reached.
    pub states_visited: u64,
    /// Static evaluations performed.
    pub evaluations: u64,
    /// Times alpha-beta returned before exploring every sibling.
    pub cutoffs: u64,
}

/// Plain minimax value of `state` with `agent` to move and `depth` plies left.
pub fn minimax_value<G, E>(
    state: &G,
    agent: usize,
    depth: u32,
    evaluator: &E,
    stats: &mut SearchStats,
) -> i64
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
{
    stats.states_visited += 1;
    let Some(actions) = playable_actions(state, agent, depth) else {
        return evaluate(state, evaluator, stats);
    };

    let (next_agent, next_depth) = next_turn(agent, depth, state.num_agents());
    let children = actions.iter().map(|action| {
        let successor = state.generate_successor(agent, action);
        minimax_value(&successor, next_agent, next_depth, evaluator, stats)
    });

    if agent == 0 {
        children.fold(NEG_INFINITY, i64::max)
    } else {
        children.fold(POS_INFINITY, i64::min)
    }
}

/// Minimax value under alpha-beta bounds.
///
/// `alpha` is the best value the maximizer can already guarantee on the
/// current path, `beta` the best the minimizer can. The maximizer stops as
/// soon as its running value strictly exceeds `beta`; the minimizer stops as
/// soon as its running value is strictly below `alpha`. Called with the full
/// window `(NEG_INFINITY, POS_INFINITY)` it returns exactly
/// [`minimax_value`].
#[allow(clippy::similar_names)]
pub fn alpha_beta_value<G, E>(
    state: &G,
    agent: usize,
    depth: u32,
    mut alpha: i64,
    mut beta: i64,
    evaluator: &E,
    stats: &mut SearchStats,
) -> i64
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
{
    stats.states_visited += 1;
    let Some(actions) = playable_actions(state, agent, depth) else {
        return evaluate(state, evaluator, stats);
    };

    let (next_agent, next_depth) = next_turn(agent, depth, state.num_agents());

    if agent == 0 {
        let mut value = NEG_INFINITY;
        for action in &actions {
            let successor = state.generate_successor(agent, action);
            value = value.max(alpha_beta_value(
                &successor, next_agent, next_depth, alpha, beta, evaluator, stats,
            ));
            if value > beta {
                stats.cutoffs += 1;
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    } else {
        let mut value = POS_INFINITY;
        for action in &actions {
            let successor = state.generate_successor(agent, action);
            value = value.min(alpha_beta_value(
                &successor, next_agent, next_depth, alpha, beta, evaluator, stats,
            ));
            if value < alpha {
                stats.cutoffs += 1;
                return value;
            }
            beta = beta.min(value);
        }
        value
    }
}

/// Legal actions to recurse over, or `None` when `state` must be evaluated.
fn playable_actions<G: GameState>(state: &G, agent: usize, depth: u32) -> Option<Vec<G::Action>> {
    if depth == 0 || state.is_terminal() || state.num_agents() == 0 {
        return None;
    }
    let actions = state.legal_actions(agent);
    if actions.is_empty() {
        None
    } else {
        Some(actions)
    }
}

fn evaluate<G, E>(state: &G, evaluator: &E, stats: &mut SearchStats) -> i64
where
    E: Evaluator<G> + ?Sized,
{
    stats.evaluations += 1;
    evaluator.evaluate(state)
}
