//! Typed classifier errors.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// A classifier needs at least one legal label.
    NoLabels,
    /// Data and label slices differ in length.
    LengthMismatch { data: usize, labels: usize },
    /// A training label is not one of the legal labels.
    UnknownLabel { label: String },
    /// A label appears more than once.
    DuplicateLabel { label: String },
    /// Replacement weights do not cover the legal labels.
    WeightCountMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLabels => write!(f, "classifier has no legal labels"),
            Self::LengthMismatch { data, labels } => {
                write!(f, "{data} examples but {labels} labels")
            }
            Self::UnknownLabel { label } => write!(f, "label {label} is not a legal label"),
            Self::DuplicateLabel { label } => write!(f, "label {label} appears more than once"),
            Self::WeightCountMismatch { expected, actual } => {
                write!(f, "expected weights for {expected} labels, got {actual}")
            }
        }
    }
}

impl std::error::Error for ClassifierError {}
