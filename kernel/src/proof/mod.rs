//! Canonical JSON bytes and domain-separated SHA-256 hashing.

pub mod canon;
pub mod hash;
pub mod hash_domain;
