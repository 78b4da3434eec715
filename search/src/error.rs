//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime outcomes,
//! including "no solution", are expressed via
//! [`crate::search::TerminationReason`] and always produce a `SearchResult`.

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy cannot drive a search (e.g. a zero expansion budget).
    InvalidPolicy { detail: String },
    /// An algorithm name did not match any known discipline.
    UnknownAlgorithm { name: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::UnknownAlgorithm { name } => {
                write!(f, "unknown search algorithm: {name:?} (expected dfs, bfs or ucs)")
            }
        }
    }
}

impl std::error::Error for SearchError {}
