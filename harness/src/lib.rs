//! Waypoint Harness: fixture worlds and verified engine runs.
//!
//! The harness runs a world through one of the engines, re-checks the
//! answer independently of the engine (plan replay, cost recomputation,
//! pruning cross-check), and packages the result as an in-memory set of
//! content-hashed canonical JSON reports.
//!
//! The harness does NOT implement search logic; it delegates to the
//! engines. Worlds provide domain data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod artifacts;
pub mod runner;
pub mod worlds;
