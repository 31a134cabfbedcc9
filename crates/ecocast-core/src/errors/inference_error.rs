use crate::models::Stage;

/// The loaded model rejected its input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("{stage} model expects {expected} features, got {actual}")]
    DimensionMismatch {
        stage: Stage,
        expected: usize,
        actual: usize,
    },

    #[error("{stage} model expects '{expected}' at position {position}, got '{actual}'")]
    FeatureMismatch {
        stage: Stage,
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("predictor for {expected} received a {actual} feature vector")]
    StageMismatch { expected: Stage, actual: Stage },

    #[error("{stage} model produced a non-finite value: {value}")]
    NonFiniteOutput { stage: Stage, value: f64 },
}
