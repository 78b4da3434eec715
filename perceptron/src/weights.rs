//! Sparse weight vectors and the perceptron update rule.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::ClassifierError;

/// Sparse feature vector: feature key to integer activation. Absent keys are 0.
pub type FeatureVector<K> = BTreeMap<K, i64>;

/// Sparse integer weights over feature keys `K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightVector<K: Ord> {
    values: BTreeMap<K, i64>,
}

impl<K: Ord + Clone> WeightVector<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    /// Dot product with a feature vector.
    #[must_use]
    pub fn dot(&self, features: &FeatureVector<K>) -> i64 {
        features
            .iter()
            .map(|(k, v)| self.get(k).saturating_mul(*v))
            .fold(0i64, i64::saturating_add)
    }

    pub fn add_assign(&mut self, features: &FeatureVector<K>) {
        for (k, v) in features {
            let slot = self.values.entry(k.clone()).or_insert(0);
            *slot = slot.saturating_add(*v);
        }
    }

    pub fn sub_assign(&mut self, features: &FeatureVector<K>) {
        for (k, v) in features {
            let slot = self.values.entry(k.clone()).or_insert(0);
            *slot = slot.saturating_sub(*v);
        }
    }

    /// Non-zero entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, i64)> {
        self.values.iter().filter(|(_, v)| **v != 0).map(|(k, v)| (k, *v))
    }
}

impl<K: Ord + Clone> Default for WeightVector<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone> FromIterator<(K, i64)> for WeightVector<K> {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// One weight vector per legal label, in the label order given at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights<L, K: Ord> {
    labels: Vec<L>,
    vectors: Vec<WeightVector<K>>,
}

impl<L: PartialEq + Clone + Debug, K: Ord + Clone> Weights<L, K> {
    /// All-zero weights for `labels`.
    #[must_use]
    pub fn zeroed(labels: Vec<L>) -> Self {
        let vectors = labels.iter().map(|_| WeightVector::new()).collect();
        Self { labels, vectors }
    }

    /// Weights from explicit `(label, vector)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(L, WeightVector<K>)>) -> Self {
        let (labels, vectors) = pairs.into_iter().unzip();
        Self { labels, vectors }
    }

    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    #[must_use]
    pub fn vector(&self, label: &L) -> Option<&WeightVector<K>> {
        self.index_of(label).map(|i| &self.vectors[i])
    }

    /// `(label, score)` for every label, in label order.
    #[must_use]
    pub fn scores(&self, features: &FeatureVector<K>) -> Vec<(L, i64)> {
        self.labels
            .iter()
            .zip(&self.vectors)
            .map(|(l, w)| (l.clone(), w.dot(features)))
            .collect()
    }

    /// Highest-scoring label; ties go to the label listed first.
    #[must_use]
    pub fn argmax(&self, features: &FeatureVector<K>) -> Option<&L> {
        self.argmax_index(features).map(|i| &self.labels[i])
    }

    fn argmax_index(&self, features: &FeatureVector<K>) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (i, w) in self.vectors.iter().enumerate() {
            let score = w.dot(features);
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((i, score));
            }
        }
        best.map(|(i, _)| i)
    }

    fn index_of(&self, label: &L) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

/// Apply the perceptron rule for one example.
///
/// When the guessed label differs from `truth`, the features are subtracted
/// from the guess's vector and added to the truth's vector. Returns the
/// updated weights and whether the guess was a mistake.
///
/// # Errors
///
/// Returns [`ClassifierError::UnknownLabel`] if `truth` is not a legal label
/// and [`ClassifierError::NoLabels`] if there are no labels to guess from.
pub fn update<L, K>(
    mut weights: Weights<L, K>,
    features: &FeatureVector<K>,
    truth: &L,
) -> Result<(Weights<L, K>, bool), ClassifierError>
where
    L: PartialEq + Clone + Debug,
    K: Ord + Clone,
{
    let truth_index = weights
        .index_of(truth)
        .ok_or_else(|| ClassifierError::UnknownLabel {
            label: format!("{truth:?}"),
        })?;
    let guess_index = weights
        .argmax_index(features)
        .ok_or(ClassifierError::NoLabels)?;

    if guess_index == truth_index {
        return Ok((weights, false));
    }
    weights.vectors[guess_index].sub_assign(features);
    weights.vectors[truth_index].add_assign(features);
    Ok((weights, true))
}
