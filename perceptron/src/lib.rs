//! Waypoint Perceptron: a multiclass perceptron over sparse integer features.
//!
//! One weight vector per label. Training is a sequence of calls to the pure
//! [`update`](weights::update) function, which takes the weights by value and
//! hands them back; nothing is shared or global.

#![forbid(unsafe_code)]

pub mod classifier;
pub mod error;
pub mod weights;

pub use classifier::{IterationReport, PerceptronClassifier, TrainingReport};
pub use error::ClassifierError;
pub use weights::{update, FeatureVector, WeightVector, Weights};
