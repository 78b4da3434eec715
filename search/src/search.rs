//! Search entry point and expansion loop.

use std::collections::HashSet;

use crate::algorithm::Algorithm;
use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::node::{NodeArena, NodeId};
use crate::policy::{DedupPolicy, SearchPolicy};

/// Why the expansion loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A popped node satisfied the goal test.
    GoalReached { node_id: NodeId },
    /// Frontier emptied without finding a goal: no solution exists in the
    /// reachable state space.
    FrontierExhausted,
    /// `max_expansions` budget was hit before a goal was popped.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    /// Stable snake-case tag used in reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expansions: u64,
    /// Nodes created, root included.
    pub nodes_created: u64,
    /// Popped nodes discarded because their state was already expanded.
    pub duplicates_at_pop: u64,
    /// Successors never pushed because their state was already expanded
    /// (only under [`DedupPolicy::SkipExpandedOnPush`]).
    pub duplicates_at_push: u64,
    /// Successors pushed with a negative step cost. Uniform-cost plans are
    /// not guaranteed optimal when this is non-zero.
    pub negative_step_costs: u64,
    pub frontier_high_water: u64,
}

/// Result of a search execution.
///
/// Always carries the full node arena, however the search terminated. Use
/// [`SearchResult::plan`] for the action sequence.
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    pub algorithm: Algorithm,
    pub policy: SearchPolicy,
    pub nodes: NodeArena<S, A>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl<S, A> SearchResult<S, A> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    #[must_use]
    pub fn goal_node(&self) -> Option<NodeId> {
        match self.termination {
            TerminationReason::GoalReached { node_id } => Some(node_id),
            _ => None,
        }
    }

    /// Actions from the start state to the goal. `None` means no solution.
    ///
    /// A start state that is already a goal gives `Some(vec![])`.
    #[must_use]
    pub fn plan(&self) -> Option<Vec<A>>
    where
        A: Clone,
    {
        self.goal_node().map(|id| self.nodes.actions_to(id))
    }

    /// Cumulative cost of the plan, as tracked by the search.
    #[must_use]
    pub fn path_cost(&self) -> Option<i64> {
        self.goal_node().map(|id| self.nodes[id].path_cost)
    }

    #[must_use]
    pub fn goal_state(&self) -> Option<&S> {
        self.goal_node().map(|id| &self.nodes[id].state)
    }
}

/// Run graph search from the problem's start state.
///
/// All runtime outcomes (goal found, no solution, budget exhaustion) return
/// `Ok(SearchResult)`; inspect
/// [`SearchResult::termination`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures.
pub fn search<P: SearchProblem>(
    problem: &P,
    algorithm: Algorithm,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    policy.validate()?;

    let result = match algorithm {
        Algorithm::DepthFirst => graph_search(problem, algorithm, StackFrontier::new(), policy),
        Algorithm::BreadthFirst => graph_search(problem, algorithm, QueueFrontier::new(), policy),
        Algorithm::UniformCost => {
            graph_search(problem, algorithm, PriorityFrontier::new(), policy)
        }
    };

    log::debug!(
        "{algorithm} search terminated: {} after {} expansions ({} nodes, frontier high water {})",
        result.termination.as_str(),
        result.stats.expansions,
        result.stats.nodes_created,
        result.stats.frontier_high_water,
    );

    Ok(result)
}

/// Search the deepest nodes in the search tree first.
///
/// Returns `None` when no goal is reachable.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    plan_with_defaults(problem, Algorithm::DepthFirst)
}

/// Search the shallowest nodes in the search tree first.
///
/// Returns `None` when no goal is reachable.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    plan_with_defaults(problem, Algorithm::BreadthFirst)
}

/// Search the node of least total cost first.
///
/// Returns `None` when no goal is reachable. Negative step costs are
/// expanded like any other, without an optimality guarantee.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    plan_with_defaults(problem, Algorithm::UniformCost)
}

fn plan_with_defaults<P: SearchProblem>(
    problem: &P,
    algorithm: Algorithm,
) -> Option<Vec<P::Action>> {
    search(problem, algorithm, &SearchPolicy::default())
        .ok()
        .and_then(|result| result.plan())
}

/// The expansion loop shared by every algorithm. Goal testing and duplicate
/// detection both happen when a node is popped.
fn graph_search<P, F>(
    problem: &P,
    algorithm: Algorithm,
    mut frontier: F,
    policy: &SearchPolicy,
) -> SearchResult<P::State, P::Action>
where
    P: SearchProblem,
    F: Frontier,
{
    let mut nodes: NodeArena<P::State, P::Action> = NodeArena::new();
    let mut visited: HashSet<P::State> = HashSet::new();
    let mut stats = SearchStats::default();

    let root = nodes.push_root(problem.start_state());
    stats.nodes_created += 1;
    frontier.push(root, 0);

    let termination = loop {
        let Some(node_id) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };

        let state = nodes[node_id].state.clone();
        if problem.is_goal(&state) {
            break TerminationReason::GoalReached { node_id };
        }
        if visited.contains(&state) {
            stats.duplicates_at_pop += 1;
            continue;
        }
        if policy
            .max_expansions
            .is_some_and(|max| stats.expansions >= max)
        {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let successors = problem.successors(&state);
        visited.insert(state);
        stats.expansions += 1;
        log::trace!(
            "expand {node_id} (cost {}, depth {}): {} successors",
            nodes[node_id].path_cost,
            nodes[node_id].depth,
            successors.len()
        );

        for successor in successors {
            if policy.dedup == DedupPolicy::SkipExpandedOnPush
                && visited.contains(&successor.state)
            {
                stats.duplicates_at_push += 1;
                continue;
            }
            let child = nodes.push_child(
                node_id,
                successor.state,
                successor.action,
                successor.step_cost,
            );
            stats.nodes_created += 1;
            if successor.step_cost < 0 {
                stats.negative_step_costs += 1;
                if algorithm.is_cost_ordered() {
                    log::warn!(
                        "negative step cost {} into node {child} under {algorithm}",
                        successor.step_cost
                    );
                }
            }
            frontier.push(child, nodes[child].path_cost);
        }
    };

    stats.frontier_high_water = frontier.high_water();

    SearchResult {
        algorithm,
        policy: *policy,
        nodes,
        termination,
        stats,
    }
}
