//! Multi-class perceptron training loop.

use std::fmt::Debug;

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};

use crate::error::ClassifierError;
use crate::weights::{update, FeatureVector, Weights};

/// Per-iteration training outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationReport {
    /// Zero-based pass number.
    pub iteration: usize,
    /// Training examples misclassified during the pass.
    pub mistakes: u64,
    /// Validation examples classified correctly after the pass.
    pub validation_correct: u64,
    pub validation_total: u64,
}

/// Everything [`PerceptronClassifier::train`] observed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrainingReport {
    pub iterations: Vec<IterationReport>,
}

impl TrainingReport {
    /// Mistakes made during the last pass, if any pass ran.
    #[must_use]
    pub fn final_mistakes(&self) -> Option<u64> {
        self.iterations.last().map(|r| r.mistakes)
    }

    /// Pass with the most correct validation guesses; the earliest wins ties.
    #[must_use]
    pub fn best_iteration(&self) -> Option<&IterationReport> {
        let mut best: Option<&IterationReport> = None;
        for report in &self.iterations {
            if best.map_or(true, |b| report.validation_correct > b.validation_correct) {
                best = Some(report);
            }
        }
        best
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let iterations: Vec<serde_json::Value> = self
            .iterations
            .iter()
            .map(|r| {
                serde_json::json!({
                    "iteration": r.iteration,
                    "mistakes": r.mistakes,
                    "validation_correct": r.validation_correct,
                    "validation_total": r.validation_total,
                })
            })
            .collect();
        serde_json::json!({ "iterations": iterations })
    }

    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json())
    }
}

/// Perceptron over labels `L` and sparse features keyed by `K`.
///
/// Weights start at zero and persist across calls to
/// [`train`](Self::train); a second call continues from where the first
/// left off.
#[derive(Debug, Clone)]
pub struct PerceptronClassifier<L, K: Ord> {
    weights: Weights<L, K>,
    max_iterations: usize,
}

impl<L, K> PerceptronClassifier<L, K>
where
    L: PartialEq + Clone + Debug,
    K: Ord + Clone,
{
    /// # Errors
    ///
    /// Returns [`ClassifierError::NoLabels`] if `legal_labels` is empty and
    /// [`ClassifierError::DuplicateLabel`] if a label is repeated.
    pub fn new(legal_labels: Vec<L>, max_iterations: usize) -> Result<Self, ClassifierError> {
        if legal_labels.is_empty() {
            return Err(ClassifierError::NoLabels);
        }
        check_distinct(&legal_labels)?;
        Ok(Self {
            weights: Weights::zeroed(legal_labels),
            max_iterations,
        })
    }

    #[must_use]
    pub fn legal_labels(&self) -> &[L] {
        self.weights.labels()
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    #[must_use]
    pub fn weights(&self) -> &Weights<L, K> {
        &self.weights
    }

    /// Replace the weights wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::WeightCountMismatch`] if `weights` does
    /// not carry one vector per legal label,
    /// [`ClassifierError::UnknownLabel`] if it names a label this classifier
    /// does not know, and [`ClassifierError::DuplicateLabel`] if it names
    /// one twice. Only a reordering of the legal labels is accepted.
    pub fn set_weights(&mut self, weights: Weights<L, K>) -> Result<(), ClassifierError> {
        let expected = self.legal_labels().len();
        let actual = weights.labels().len();
        if expected != actual {
            return Err(ClassifierError::WeightCountMismatch { expected, actual });
        }
        if let Some(label) = weights
            .labels()
            .iter()
            .find(|l| !self.legal_labels().contains(l))
        {
            return Err(ClassifierError::UnknownLabel {
                label: format!("{label:?}"),
            });
        }
        check_distinct(weights.labels())?;
        self.weights = weights;
        Ok(())
    }

    /// Run up to `max_iterations` passes over `training`.
    ///
    /// Each example is classified with the current weights; a wrong guess
    /// triggers [`update`]. After every pass the validation set is scored.
    /// On error the weights are left as they were before the call.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::LengthMismatch`] when a data slice and its
    /// label slice differ in length, and [`ClassifierError::UnknownLabel`]
    /// when a label is not legal.
    pub fn train(
        &mut self,
        training: &[FeatureVector<K>],
        training_labels: &[L],
        validation: &[FeatureVector<K>],
        validation_labels: &[L],
    ) -> Result<TrainingReport, ClassifierError> {
        check_lengths(training, training_labels)?;
        check_lengths(validation, validation_labels)?;
        self.check_labels(training_labels)?;
        self.check_labels(validation_labels)?;

        let mut weights = self.weights.clone();
        let mut report = TrainingReport::default();

        for iteration in 0..self.max_iterations {
            let mut mistakes = 0u64;
            for (features, truth) in training.iter().zip(training_labels) {
                let (next, mistake) = update(weights, features, truth)?;
                weights = next;
                mistakes += u64::from(mistake);
            }
            let validation_correct = count_correct(&weights, validation, validation_labels);
            log::debug!(
                "iteration {iteration}: {mistakes} mistakes, validation {validation_correct}/{}",
                validation.len(),
            );
            report.iterations.push(IterationReport {
                iteration,
                mistakes,
                validation_correct,
                validation_total: validation.len() as u64,
            });
        }

        self.weights = weights;
        Ok(report)
    }

    /// Best-scoring label for each datum, in input order.
    #[must_use]
    pub fn classify(&self, data: &[FeatureVector<K>]) -> Vec<L> {
        data.iter()
            .filter_map(|features| self.weights.argmax(features).cloned())
            .collect()
    }

    /// Correct guesses over `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::LengthMismatch`] if the slices differ in length.
    pub fn count_correct(
        &self,
        data: &[FeatureVector<K>],
        labels: &[L],
    ) -> Result<u64, ClassifierError> {
        check_lengths(data, labels)?;
        Ok(count_correct(&self.weights, data, labels))
    }

    fn check_labels(&self, labels: &[L]) -> Result<(), ClassifierError> {
        match labels.iter().find(|l| !self.legal_labels().contains(l)) {
            Some(label) => Err(ClassifierError::UnknownLabel {
                label: format!("{label:?}"),
            }),
            None => Ok(()),
        }
    }
}

fn check_lengths<T, L>(data: &[T], labels: &[L]) -> Result<(), ClassifierError> {
    if data.len() == labels.len() {
        Ok(())
    } else {
        Err(ClassifierError::LengthMismatch {
            data: data.len(),
            labels: labels.len(),
        })
    }
}

fn count_correct<L, K>(weights: &Weights<L, K>, data: &[FeatureVector<K>], labels: &[L]) -> u64
where
    L: PartialEq + Clone + Debug,
    K: Ord + Clone,
{
    data.iter()
        .zip(labels)
        .filter(|(features, truth)| weights.argmax(features) == Some(*truth))
        .count() as u64
}

fn check_distinct<L: PartialEq + Debug>(labels: &[L]) -> Result<(), ClassifierError> {
    for (i, label) in labels.iter().enumerate() {
        if labels[..i].contains(label) {
            return Err(ClassifierError::DuplicateLabel {
                label: format!("{label:?}"),
            });
        }
    }
    Ok(())
}
