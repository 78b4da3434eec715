//! Search policy types.

use crate::error::SearchError;

/// Search budget and dedup configuration.
///
/// The default is an unbounded search that detects duplicates at expansion
/// time, exactly as the textbook graph-search skeleton does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` means unbounded.
    pub max_expansions: Option<u64>,
    /// When duplicate states are filtered out.
    pub dedup: DedupPolicy,
}

impl SearchPolicy {
    /// Policy with an expansion budget and default dedup.
    #[must_use]
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..Self::default()
        }
    }

    /// Check that this policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget,
    /// which could never expand the root.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Snapshot of this policy for report binding.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "dedup": self.dedup.as_str(),
            "max_expansions": self.max_expansions,
        })
    }
}

/// When duplicate states are filtered out of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// Every successor is pushed; a popped node whose state was already
    /// expanded is discarded.
    #[default]
    AtExpansion,
    /// Additionally skip pushing successors whose state was already expanded.
    /// Produces the same plan with less frontier churn.
    SkipExpandedOnPush,
}

impl DedupPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AtExpansion => "at_expansion",
            Self::SkipExpandedOnPush => "skip_expanded_on_push",
        }
    }
}
