//! `WeightedGraph`: an explicit adjacency-list search problem.
//!
//! States are node names, actions are edge labels. Successors come out in
//! the order edges were added, so depth-first and breadth-first results are
//! fixed by construction order.

use std::collections::{BTreeMap, BTreeSet};

use waypoint_search::{SearchProblem, Successor};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge {
    action: String,
    to: String,
    cost: i64,
}

/// Directed graph with labelled, weighted edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    start: String,
    goals: BTreeSet<String>,
    edges: BTreeMap<String, Vec<Edge>>,
}

impl WeightedGraph {
    #[must_use]
    pub fn new(start: &str) -> Self {
        Self {
            start: start.to_string(),
            goals: BTreeSet::new(),
            edges: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_goal(mut self, goal: &str) -> Self {
        self.goals.insert(goal.to_string());
        self
    }

    /// Add the edge `from --action/cost--> to`.
    #[must_use]
    pub fn with_edge(mut self, from: &str, action: &str, to: &str, cost: i64) -> Self {
        self.edges.entry(from.to_string()).or_default().push(Edge {
            action: action.to_string(),
            to: to.to_string(),
            cost,
        });
        self
    }

    /// Number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Start `A`, goal `B`, one edge `moveToB` of cost 5.
    #[must_use]
    pub fn two_node() -> Self {
        Self::new("A").with_goal("B").with_edge("A", "moveToB", "B", 5)
    }

    /// Two routes to `G`: a short expensive one through `B` and a longer
    /// cheap one through `C` and `D`. BFS and UCS disagree here.
    #[must_use]
    pub fn detour() -> Self {
        Self::new("S")
            .with_goal("G")
            .with_edge("S", "toB", "B", 1)
            .with_edge("S", "toC", "C", 1)
            .with_edge("B", "toG", "G", 10)
            .with_edge("C", "toD", "D", 1)
            .with_edge("D", "toG", "G", 1)
    }

    /// `L x L` lattice of unit-cost right/down edges, with the goal in the
    /// far corner. Many equal-cost paths and heavy revisiting.
    #[must_use]
    pub fn lattice(side: usize) -> Self {
        let name = |r: usize, c: usize| format!("n{r}_{c}");
        let last = side.saturating_sub(1);
        let mut graph = Self::new(&name(0, 0)).with_goal(&name(last, last));
        for r in 0..side {
            for c in 0..side {
                if c < last {
                    graph = graph.with_edge(&name(r, c), "right", &name(r, c + 1), 1);
                }
                if r < last {
                    graph = graph.with_edge(&name(r, c), "down", &name(r + 1, c), 1);
                }
            }
        }
        graph
    }
}

impl SearchProblem for WeightedGraph {
    type State = String;
    type Action = String;

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &String) -> Vec<Successor<String, String>> {
        self.edges.get(state).map_or_else(Vec::new, |edges| {
            edges
                .iter()
                .map(|e| Successor::new(e.to.clone(), e.action.clone(), e.cost))
                .collect()
        })
    }
}
