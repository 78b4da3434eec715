//! Top-level move selection for agent 0.

use std::fmt::Display;

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};

use crate::contract::{next_turn, GameState};
use crate::error::GameError;
use crate::evaluator::{Evaluator, NEG_INFINITY, POS_INFINITY};
use crate::minimax::{alpha_beta_value, minimax_value, SearchStats};
use crate::policy::{GamePolicy, Pruning};

/// Outcome of [`choose_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision<A> {
    /// Best action for agent 0, or `None` when it has no legal action.
    pub action: Option<A>,
    /// Minimax value of `action`.
    pub value: Option<i64>,
    pub policy: GamePolicy,
    pub stats: SearchStats,
}

impl<A> Decision<A> {
    /// Whether agent 0 had no move to make.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.action.is_none()
    }
}

impl<A: Display> Decision<A> {
    /// Convert to a `serde_json::Value` suitable for canonical serialization.
    #[must_use]
    pub fn to_report_json(&self) -> serde_json::Value {
        serde_json::json!({
            "action": self.action.as_ref().map(ToString::to_string),
            "policy": self.policy.to_json(),
            "stats": {
                "cutoffs": self.stats.cutoffs,
                "evaluations": self.stats.evaluations,
                "states_visited": self.stats.states_visited,
            },
            "value": self.value,
        })
    }

    /// Serialize the report to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_report_json())
    }
}

/// Choose agent 0's move from `state` under `policy`.
///
/// Each legal action is scored by the value of its successor, searched from
/// agent 1 at the full depth. The strictly greatest value wins; ties go to
/// the action enumerated first. Alpha-beta picks the same action as plain
/// minimax.
///
/// # Errors
///
/// Returns [`GameError`] only when `policy` cannot search this game (no
/// agents, or an overflowing horizon).
pub fn choose_action<G, E>(
    state: &G,
    policy: &GamePolicy,
    evaluator: &E,
) -> Result<Decision<G::Action>, GameError>
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
{
    let num_agents = state.num_agents();
    policy.validate(num_agents)?;

    let mut stats = SearchStats::default();
    let mut best: Option<(G::Action, i64)> = None;
    let mut alpha = NEG_INFINITY;
    let (next_agent, next_depth) = next_turn(0, policy.depth, num_agents);

    for action in state.legal_actions(0) {
        let successor = state.generate_successor(0, &action);
        let value = match policy.pruning {
            Pruning::Disabled => {
                minimax_value(&successor, next_agent, next_depth, evaluator, &mut stats)
            }
            Pruning::AlphaBeta => alpha_beta_value(
                &successor,
                next_agent,
                next_depth,
                alpha,
                POS_INFINITY,
                evaluator,
                &mut stats,
            ),
        };
        alpha = alpha.max(value);
        if best.as_ref().map_or(true, |(_, v)| value > *v) {
            best = Some((action, value));
        }
    }

    let (action, value) = match best {
        Some((action, value)) => (Some(action), Some(value)),
        None => (None, None),
    };

    log::debug!(
        "{} depth {}: value {:?} after {} states ({} evaluations, {} cutoffs)",
        policy.pruning.as_str(),
        policy.depth,
        value,
        stats.states_visited,
        stats.evaluations,
        stats.cutoffs,
    );

    Ok(Decision {
        action,
        value,
        policy: *policy,
        stats,
    })
}
