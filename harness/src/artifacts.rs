//! In-memory report artifact sets: the output of a harness run.
//!
//! Every artifact is a named canonical JSON report hashed with
//! [`DOMAIN_REPORT_ARTIFACT`]. Two runs with identical report bytes have
//! identical artifact sets.

use std::collections::BTreeMap;

use waypoint_kernel::proof::canon::canonical_json_bytes;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;

/// Domain prefix for per-artifact content hashes.
pub const DOMAIN_REPORT_ARTIFACT: HashDomain = HashDomain::ReportArtifact;

/// A single named report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    /// Logical name (e.g. `"search_report"`).
    pub name: String,
    /// Canonical JSON bytes.
    pub content: Vec<u8>,
    /// `canonical_hash(DOMAIN_REPORT_ARTIFACT, content)`.
    pub content_hash: ContentHash,
}

/// All reports of one run, indexed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub artifacts: BTreeMap<String, ReportArtifact>,
}

impl ArtifactSet {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ReportArtifact> {
        self.artifacts.get(name)
    }

    /// Raw bytes of the named artifact.
    #[must_use]
    pub fn content(&self, name: &str) -> Option<&[u8]> {
        self.artifacts.get(name).map(|a| a.content.as_slice())
    }

    /// Content hash of the named artifact.
    #[must_use]
    pub fn hash(&self, name: &str) -> Option<&ContentHash> {
        self.artifacts.get(name).map(|a| &a.content_hash)
    }

    /// Parse the named artifact as JSON.
    #[must_use]
    pub fn json(&self, name: &str) -> Option<serde_json::Value> {
        self.content(name)
            .and_then(|bytes| serde_json::from_slice(bytes).ok())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Error assembling an artifact set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactError {
    /// Two artifacts share a name.
    DuplicateName { name: String },
    /// The name is empty.
    EmptyName,
}

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "duplicate artifact name: {name}"),
            Self::EmptyName => write!(f, "artifact name is empty"),
        }
    }
}

impl std::error::Error for ArtifactError {}

/// Build an [`ArtifactSet`] from `(name, canonical bytes)` pairs.
///
/// # Errors
///
/// Returns [`ArtifactError`] for an empty or repeated name.
pub fn build_artifact_set(
    artifacts: Vec<(String, Vec<u8>)>,
) -> Result<ArtifactSet, ArtifactError> {
    let mut map = BTreeMap::new();

    for (name, content) in artifacts {
        if name.is_empty() {
            return Err(ArtifactError::EmptyName);
        }
        if map.contains_key(&name) {
            return Err(ArtifactError::DuplicateName { name });
        }
        let content_hash = canonical_hash(DOMAIN_REPORT_ARTIFACT, &content);
        map.insert(
            name.clone(),
            ReportArtifact {
                name,
                content,
                content_hash,
            },
        );
    }

    Ok(ArtifactSet { artifacts: map })
}

/// Error from artifact set integrity verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactVerifyError {
    /// An artifact's stored hash does not match its bytes.
    ContentHashMismatch {
        artifact: String,
        expected: String,
        actual: String,
    },
    /// An artifact is not canonical JSON.
    ArtifactNotCanonical { artifact: String },
}

impl std::fmt::Display for ArtifactVerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContentHashMismatch {
                artifact,
                expected,
                actual,
            } => write!(
                f,
                "content hash mismatch for {artifact}: expected {expected}, got {actual}"
            ),
            Self::ArtifactNotCanonical { artifact } => {
                write!(f, "artifact {artifact} is not canonical JSON")
            }
        }
    }
}

impl std::error::Error for ArtifactVerifyError {}

/// Check that every artifact's hash matches its bytes and that the bytes
/// are canonical JSON.
///
/// # Errors
///
/// Returns the first [`ArtifactVerifyError`] encountered, in name order.
pub fn verify_artifact_set(set: &ArtifactSet) -> Result<(), ArtifactVerifyError> {
    for artifact in set.artifacts.values() {
        let recomputed = canonical_hash(DOMAIN_REPORT_ARTIFACT, &artifact.content);
        if recomputed != artifact.content_hash {
            return Err(ArtifactVerifyError::ContentHashMismatch {
                artifact: artifact.name.clone(),
                expected: artifact.content_hash.as_str().to_string(),
                actual: recomputed.as_str().to_string(),
            });
        }
        if !is_canonical_json(&artifact.content) {
            return Err(ArtifactVerifyError::ArtifactNotCanonical {
                artifact: artifact.name.clone(),
            });
        }
    }
    Ok(())
}

fn is_canonical_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|v| canonical_json_bytes(&v).ok())
        .is_some_and(|canon| canon == bytes)
}
