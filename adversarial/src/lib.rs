//! Waypoint Adversarial: fixed-depth game-tree search for multi-agent games.
//!
//! Agent 0 maximizes; every other agent minimizes, in round-robin order. A
//! ply is one move by every agent, so a depth-`d` search looks
//! `d × num_agents` moves ahead before falling back to the evaluator.
//!
//! # Key types
//!
//! - [`GameState`](contract::GameState): what a game must provide
//! - [`Evaluator`](evaluator::Evaluator): static scoring at the cutoff
//! - [`GamePolicy`](policy::GamePolicy): depth and pruning configuration
//! - [`choose_action`](decision::choose_action): the agent-0 move under that policy

#![forbid(unsafe_code)]

pub mod contract;
pub mod decision;
pub mod error;
pub mod evaluator;
pub mod minimax;
pub mod policy;

pub use contract::GameState;
pub use decision::{choose_action, Decision};
pub use evaluator::Evaluator;
pub use policy::{GamePolicy, Pruning};
