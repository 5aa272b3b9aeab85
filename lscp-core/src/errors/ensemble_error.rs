//! Ensemble construction and scoring errors.

/// Errors raised by ensemble construction, fitting, and scoring.
///
/// Data-dependent degeneracies (empty local regions, constant inputs to
/// correlation) are absorbed with documented fallbacks inside the scoring
/// pipeline and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum EnsembleError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Feature count mismatch: model expects {expected}, input has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("`{operation}` called before `fit`")]
    NotFitted { operation: &'static str },
}
