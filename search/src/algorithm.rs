//! Search algorithm selector.

use std::str::FromStr;

use crate::error::SearchError;

/// Which frontier discipline drives the expansion loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// LIFO stack. Complete on finite graphs, not optimal.
    DepthFirst,
    /// FIFO queue. Optimal when every step costs the same.
    BreadthFirst,
    /// Min-priority by cumulative path cost, FIFO among equal costs.
    /// Optimal for non-negative step costs.
    UniformCost,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::UniformCost,
    ];

    /// Short name used in reports (`dfs`, `bfs`, `ucs`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
        }
    }

    /// Whether the frontier orders nodes by path cost.
    #[must_use]
    pub const fn is_cost_ordered(self) -> bool {
        matches!(self, Self::UniformCost)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth_first" | "depthfirstsearch" => Ok(Self::DepthFirst),
            "bfs" | "breadth-first" | "breadth_first" | "breadthfirstsearch" => {
                Ok(Self::BreadthFirst)
            }
            "ucs" | "uniform-cost" | "uniform_cost" | "uniformcostsearch" => Ok(Self::UniformCost),
            _ => Err(SearchError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}
