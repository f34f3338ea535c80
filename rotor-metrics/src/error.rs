//! Errors in the library.
use thiserror::Error;

/// Errors raised while computing metrics.
#[derive(Error, Debug, PartialEq)]
pub enum MetricsError {
    /// Labels and predictions have different lengths.
    #[error("Found input variables with inconsistent numbers of samples: [{0}, {1}]")]
    LengthMismatch(usize, usize),

    /// No sample was given.
    #[error("Empty input")]
    EmptyInput,

    /// A label other than `0` or `1` was given where binary labels are expected.
    #[error("Label {0} is not binary")]
    NonBinaryLabel(usize),

    /// A score or probability is NaN or infinite, the index of the first one is given.
    #[error("Input contains NaN or infinity at index {0}")]
    NonFiniteScore(usize),

    /// A rate has no denominator, e.g. no negative sample for the false positive rate.
    #[error("{0} is undefined: no {1} sample in y_true")]
    UndefinedRate(&'static str, &'static str),

    /// Points of a curve are neither increasing nor decreasing in x.
    #[error("x is neither increasing nor decreasing")]
    NotMonotonic,

    /// The number of class names differs from the number of classes.
    #[error("Number of classes, {0}, does not match size of target_names, {1}")]
    ClassNameMismatch(usize, usize),
}
