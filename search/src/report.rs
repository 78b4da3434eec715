//! Canonical JSON report of a search run.
//!
//! The report carries everything needed to audit a run without the node
//! arena: algorithm, policy, termination, counters, and the plan with its
//! tracked cost. Actions are rendered through `Display`.

use std::fmt::Display;

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};

use crate::search::{SearchResult, SearchStats, TerminationReason};

impl<S, A: Clone + Display> SearchResult<S, A> {
    /// Convert to a `serde_json::Value` suitable for canonical serialization.
    #[must_use]
    pub fn to_report_json(&self) -> serde_json::Value {
        let plan = self
            .plan()
            .map(|actions| actions.iter().map(ToString::to_string).collect::<Vec<_>>());
        serde_json::json!({
            "algorithm": self.algorithm.as_str(),
            "node_count": self.nodes.len() as u64,
            "path_cost": self.path_cost(),
            "plan": plan,
            "policy": self.policy.to_json(),
            "stats": stats_to_json(&self.stats),
            "termination_reason": termination_reason_to_json(&self.termination),
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

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "duplicates_at_pop": s.duplicates_at_pop,
        "duplicates_at_push": s.duplicates_at_push,
        "expansions": s.expansions,
        "frontier_high_water": s.frontier_high_water,
        "negative_step_costs": s.negative_step_costs,
        "nodes_created": s.nodes_created,
    })
}

fn termination_reason_to_json(r: &TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id.as_u64(), "type": r.as_str()})
        }
        TerminationReason::FrontierExhausted | TerminationReason::ExpansionBudgetExceeded => {
            serde_json::json!({"type": r.as_str()})
        }
    }
}
