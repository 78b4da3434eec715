//! Waypoint Kernel: canonical bytes and content hashing shared by every engine.
//!
//! The engines (`waypoint_search`, `waypoint_adversarial`) never hash or
//! serialize on their own; anything that ends up in a run report is turned into
//! bytes here so that identical runs produce identical digests.
//!
//! # Module Dependency Direction
//!
//! `proof::hash_domain` ← `proof::hash`, and `proof::canon` stands alone.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proof;
