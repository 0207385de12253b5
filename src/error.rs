use thiserror::Error;

/// Failures raised by the analysis stages.
///
/// Every stage is pure, so an error is local to the computation that raised
/// it; rerunning on the same inputs reproduces it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Paired vectors (or a chart series and its axis) differ in length.
    #[error("shape mismatch in {what}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// A stage needed a number and found none (or too few).
    #[error("missing value: {what}")]
    MissingValue { what: String },

    /// A denominator was zero for one key.
    #[error("division by zero while computing {key}")]
    DivisionByZero { key: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
