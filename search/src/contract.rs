//! Search problem contract trait.

use std::hash::Hash;

/// One outgoing edge of a state: the state reached, the action that reaches
/// it, and the incremental cost of taking that action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub step_cost: i64,
}

impl<S, A> Successor<S, A> {
    #[must_use]
    pub fn new(state: S, action: A, step_cost: i64) -> Self {
        Self {
            state,
            action,
            step_cost,
        }
    }
}

/// Trait for domains that can be searched.
///
/// # Contract
///
/// - `successors` must be deterministic: the same state yields the same
///   successors in the same order. Depth-first and breadth-first results
///   depend on that order.
/// - Step costs should be non-negative. A negative step is still expanded
///   and counted in
///   [`SearchStats::negative_step_costs`](crate::search::SearchStats::negative_step_costs),
///   but uniform-cost plans are then not guaranteed optimal.
/// - States are compared by `Eq`/`Hash` only. The visited set never observes
///   iteration order.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone + PartialEq;

    fn start_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerate `(successor, action, step_cost)` triples from `state`.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of executing `actions` from the start state.
    ///
    /// Returns `None` if some action is not available where it is taken. The
    /// default replays the actions through [`SearchProblem::successors`];
    /// domains with a closed-form cost may override it.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<i64> {
        let mut state = self.start_state();
        let mut total: i64 = 0;
        for action in actions {
            let next = self
                .successors(&state)
                .into_iter()
                .find(|s| s.action == *action)?;
            total = total.saturating_add(next.step_cost);
            state = next.state;
        }
        Some(total)
    }
}
