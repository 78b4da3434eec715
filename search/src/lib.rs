//! Waypoint Search: deterministic uninformed graph search.
//!
//! Depth-first, breadth-first and uniform-cost search share one expansion
//! loop and differ only in the frontier they pop from.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (canon, hashing)    (frontier, nodes)    (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`](contract::SearchProblem): what a domain must provide
//! - [`NodeArena`](node::NodeArena): parent-linked search nodes addressed by
//!   [`NodeId`](node::NodeId)
//! - [`Frontier`](frontier::Frontier): stack, queue and cost-ordered disciplines
//! - [`SearchPolicy`](policy::SearchPolicy): expansion budget and dedup configuration
//! - [`SearchResult`](search::SearchResult): plan plus the data needed to audit it

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;

pub use algorithm::Algorithm;
pub use contract::{SearchProblem, Successor};
pub use search::{
    breadth_first_search, depth_first_search, search, uniform_cost_search, SearchResult,
    TerminationReason,
};
