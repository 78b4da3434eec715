//! Harness runner: drives an engine, checks its answer independently, and
//! packages the result as an [`ArtifactSet`].
//!
//! # Pipelines
//!
//! ```text
//! run_search:     policy.validate() → search() → replay plan → cost_of_actions()
//!                 → search_report + verification → artifact set
//! run_game_move:  choose_action() → [plain minimax cross-check when pruning]
//!                 → decision_report + verification → artifact set
//! run_training:   train() → training_report + weights → artifact set
//! ```
//!
//! The runner never alters an engine result. A check that fails is a
//! [`RunError`]; "no solution" and "no legal move" are normal outcomes and
//! still produce artifacts.

use std::fmt::{Debug, Display};

use waypoint_adversarial::decision::{choose_action, Decision};
use waypoint_adversarial::error::GameError;
use waypoint_adversarial::evaluator::Evaluator;
use waypoint_adversarial::policy::{GamePolicy, Pruning};
use waypoint_adversarial::GameState;
use waypoint_kernel::proof::canon::canonical_json_bytes;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;
use waypoint_perceptron::{ClassifierError, FeatureVector, PerceptronClassifier, TrainingReport};
use waypoint_search::error::SearchError;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::{search, Algorithm, SearchProblem, SearchResult};

use crate::artifacts::{build_artifact_set, ArtifactError, ArtifactSet};

pub const SEARCH_REPORT: &str = "search_report";
pub const DECISION_REPORT: &str = "decision_report";
pub const TRAINING_REPORT: &str = "training_report";
pub const WEIGHTS_REPORT: &str = "weights";
pub const VERIFICATION_REPORT: &str = "verification";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Search pre-flight failure.
    Search(SearchError),
    /// Game search pre-flight failure.
    Game(GameError),
    /// Classifier input failure.
    Classifier(ClassifierError),
    /// A plan action is not offered by `successors` where it is taken.
    ReplayActionUnavailable { step: usize, action: String },
    /// The replayed plan does not end in a goal state.
    ReplayEndedOffGoal { steps: usize },
    /// The replayed plan ends in a goal other than the one the search reported.
    ReplayStateMismatch { steps: usize },
    /// A recomputed plan cost disagrees with the cost tracked by the search.
    CostMismatch {
        check: &'static str,
        tracked: i64,
        recomputed: Option<i64>,
    },
    /// Alpha-beta and plain minimax chose differently.
    PruningDivergence {
        pruned_action: Option<String>,
        pruned_value: Option<i64>,
        reference_action: Option<String>,
        reference_value: Option<i64>,
    },
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
    /// Artifact set assembly failed.
    Artifacts(ArtifactError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Game(e) => write!(f, "game error: {e}"),
            Self::Classifier(e) => write!(f, "classifier error: {e}"),
            Self::ReplayActionUnavailable { step, action } => {
                write!(f, "replay: action {action} unavailable at step {step}")
            }
            Self::ReplayEndedOffGoal { steps } => {
                write!(f, "replay: plan of {steps} steps does not reach a goal")
            }
            Self::ReplayStateMismatch { steps } => write!(
                f,
                "replay: plan of {steps} steps reaches a different goal than reported"
            ),
            Self::CostMismatch {
                check,
                tracked,
                recomputed,
            } => write!(
                f,
                "{check}: recomputed cost {recomputed:?} differs from tracked cost {tracked}"
            ),
            Self::PruningDivergence {
                pruned_action,
                pruned_value,
                reference_action,
                reference_value,
            } => write!(
                f,
                "alpha-beta chose {pruned_action:?} ({pruned_value:?}), \
                 minimax chose {reference_action:?} ({reference_value:?})"
            ),
            Self::CanonFailed { detail } => write!(f, "canonical JSON error: {detail}"),
            Self::Artifacts(e) => write!(f, "artifact error: {e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<GameError> for RunError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl From<ClassifierError> for RunError {
    fn from(e: ClassifierError) -> Self {
        Self::Classifier(e)
    }
}

impl From<ArtifactError> for RunError {
    fn from(e: ArtifactError) -> Self {
        Self::Artifacts(e)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// What the runner re-derived from a search plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchVerification {
    /// Plan length replayed through `successors`. Zero without a plan.
    pub replayed_steps: usize,
    /// Sum of step costs seen during replay.
    pub replayed_cost: Option<i64>,
    /// `cost_of_actions(plan)`.
    pub recomputed_cost: Option<i64>,
}

/// A verified search run.
#[derive(Debug, Clone)]
pub struct SearchRun<S, A> {
    pub result: SearchResult<S, A>,
    pub verification: SearchVerification,
    pub artifacts: ArtifactSet,
}

impl<S, A: Clone> SearchRun<S, A> {
    #[must_use]
    pub fn plan(&self) -> Option<Vec<A>> {
        self.result.plan()
    }
}

/// Run `algorithm` on `problem`, then verify and package the result.
///
/// When the search reaches a goal, the plan is replayed from the start
/// state by picking, at each step, the first successor offered for the
/// planned action. The replay must end in the reported goal state, and both
/// the replayed cost and `cost_of_actions(plan)` must equal the tracked path
/// cost.
///
/// # Errors
///
/// Returns [`RunError::Search`] for an invalid policy, a replay or cost
/// error when verification fails, and a serialization error if artifacts
/// cannot be built.
pub fn run_search<P>(
    problem: &P,
    algorithm: Algorithm,
    policy: &SearchPolicy,
) -> Result<SearchRun<P::State, P::Action>, RunError>
where
    P: SearchProblem,
    P::Action: Display,
{
    let result = search(problem, algorithm, policy)?;
    let verification = verify_plan(problem, &result)?;

    let report_bytes = result
        .to_canonical_json_bytes()
        .map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })?;
    let verification_json = serde_json::json!({
        "cost_of_actions": verification.recomputed_cost,
        "goal_reached": result.is_goal_reached(),
        "policy_digest": policy_digest(&policy.to_json())?.as_str(),
        "replayed_cost": verification.replayed_cost,
        "replayed_steps": verification.replayed_steps as u64,
        "report_hash": canonical_hash(HashDomain::SearchReport, &report_bytes).as_str(),
        "schema_version": "search_verification.v1",
    });

    let artifacts = build_artifact_set(vec![
        (SEARCH_REPORT.to_string(), report_bytes.clone()),
        (VERIFICATION_REPORT.to_string(), canon(&verification_json)?),
    ])?;

    log::debug!(
        "{algorithm} run verified: {} ({} plan steps), report {}",
        result.termination.as_str(),
        verification.replayed_steps,
        canonical_hash(HashDomain::SearchReport, &report_bytes),
    );

    Ok(SearchRun {
        result,
        verification,
        artifacts,
    })
}

fn verify_plan<P>(
    problem: &P,
    result: &SearchResult<P::State, P::Action>,
) -> Result<SearchVerification, RunError>
where
    P: SearchProblem,
    P::Action: Display,
{
    let (Some(plan), Some(tracked)) = (result.plan(), result.path_cost()) else {
        return Ok(SearchVerification::default());
    };

    let mut state = problem.start_state();
    let mut replayed_cost: i64 = 0;
    for (step, action) in plan.iter().enumerate() {
        let Some(next) = problem
            .successors(&state)
            .into_iter()
            .find(|s| s.action == *action)
        else {
            return Err(RunError::ReplayActionUnavailable {
                step,
                action: action.to_string(),
            });
        };
        replayed_cost = replayed_cost.saturating_add(next.step_cost);
        state = next.state;
    }

    let steps = plan.len();
    if !problem.is_goal(&state) {
        return Err(RunError::ReplayEndedOffGoal { steps });
    }
    if result.goal_state() != Some(&state) {
        return Err(RunError::ReplayStateMismatch { steps });
    }
    if replayed_cost != tracked {
        return Err(RunError::CostMismatch {
            check: "replay",
            tracked,
            recomputed: Some(replayed_cost),
        });
    }
    let recomputed_cost = problem.cost_of_actions(&plan);
    if recomputed_cost != Some(tracked) {
        return Err(RunError::CostMismatch {
            check: "cost_of_actions",
            tracked,
            recomputed: recomputed_cost,
        });
    }

    Ok(SearchVerification {
        replayed_steps: steps,
        replayed_cost: Some(replayed_cost),
        recomputed_cost,
    })
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// A verified move decision.
#[derive(Debug, Clone)]
pub struct GameRun<A> {
    pub decision: Decision<A>,
    /// Plain minimax decision, computed only when the policy prunes.
    pub reference: Option<Decision<A>>,
    pub artifacts: ArtifactSet,
}

/// Choose agent 0's move under `policy` and package the decision.
///
/// With [`Pruning::AlphaBeta`] the same position is also searched with
/// plain minimax at the same depth; action and value must agree.
///
/// # Errors
///
/// Returns [`RunError::Game`] for a policy that cannot search this game,
/// [`RunError::PruningDivergence`] when the cross-check fails, and a
/// serialization error if artifacts cannot be built.
pub fn run_game_move<G, E>(
    state: &G,
    policy: &GamePolicy,
    evaluator: &E,
) -> Result<GameRun<G::Action>, RunError>
where
    G: GameState,
    G::Action: Display + PartialEq,
    E: Evaluator<G> + ?Sized,
{
    let decision = choose_action(state, policy, evaluator)?;

    let reference = match policy.pruning {
        Pruning::Disabled => None,
        Pruning::AlphaBeta => {
            let reference = choose_action(state, &GamePolicy::minimax(policy.depth), evaluator)?;
            if reference.action != decision.action || reference.value != decision.value {
                return Err(RunError::PruningDivergence {
                    pruned_action: decision.action.as_ref().map(ToString::to_string),
                    pruned_value: decision.value,
                    reference_action: reference.action.as_ref().map(ToString::to_string),
                    reference_value: reference.value,
                });
            }
            Some(reference)
        }
    };

    let report_bytes = decision
        .to_canonical_json_bytes()
        .map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })?;
    let verification_json = serde_json::json!({
        "cross_checked": reference.is_some(),
        "decision_hash": canonical_hash(HashDomain::GameDecision, &report_bytes).as_str(),
        "policy_digest": policy_digest(&policy.to_json())?.as_str(),
        "reference": reference.as_ref().map(Decision::to_report_json),
        "schema_version": "game_verification.v1",
    });

    let artifacts = build_artifact_set(vec![
        (DECISION_REPORT.to_string(), report_bytes),
        (VERIFICATION_REPORT.to_string(), canon(&verification_json)?),
    ])?;

    Ok(GameRun {
        decision,
        reference,
        artifacts,
    })
}

// ---------------------------------------------------------------------------
// Perceptron
// ---------------------------------------------------------------------------

/// A packaged training run.
#[derive(Debug, Clone)]
pub struct TrainingRun {
    pub report: TrainingReport,
    pub artifacts: ArtifactSet,
}

/// Train `classifier` and package the report and the resulting weights.
///
/// # Errors
///
/// Returns [`RunError::Classifier`] for mismatched or unknown labels and a
/// serialization error if artifacts cannot be built.
pub fn run_training<L, K>(
    classifier: &mut PerceptronClassifier<L, K>,
    training: &[FeatureVector<K>],
    training_labels: &[L],
    validation: &[FeatureVector<K>],
    validation_labels: &[L],
) -> Result<TrainingRun, RunError>
where
    L: PartialEq + Clone + Debug + Display,
    K: Ord + Clone + Display,
{
    let report = classifier.train(training, training_labels, validation, validation_labels)?;

    let weights = classifier.weights();
    let per_label: Vec<serde_json::Value> = weights
        .labels()
        .iter()
        .map(|label| {
            let entries: serde_json::Map<String, serde_json::Value> = weights
                .vector(label)
                .into_iter()
                .flat_map(|v| v.iter())
                .map(|(k, w)| (k.to_string(), serde_json::Value::from(w)))
                .collect();
            serde_json::json!({ "label": label.to_string(), "weights": entries })
        })
        .collect();
    let config = serde_json::json!({
        "labels": weights.labels().iter().map(ToString::to_string).collect::<Vec<_>>(),
        "max_iterations": classifier.max_iterations() as u64,
    });
    let weights_json = serde_json::json!({
        "config_digest": policy_digest(&config)?.as_str(),
        "labels": per_label,
    });

    let report_bytes = report
        .to_canonical_json_bytes()
        .map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })?;
    let artifacts = build_artifact_set(vec![
        (TRAINING_REPORT.to_string(), report_bytes),
        (WEIGHTS_REPORT.to_string(), canon(&weights_json)?),
    ])?;

    Ok(TrainingRun { report, artifacts })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn canon(value: &serde_json::Value) -> Result<Vec<u8>, RunError> {
    canonical_json_bytes(value).map_err(|e| RunError::CanonFailed {
        detail: e.to_string(),
    })
}

fn policy_digest(policy_json: &serde_json::Value) -> Result<ContentHash, RunError> {
    Ok(canonical_hash(HashDomain::PolicySnapshot, &canon(policy_json)?))
}
