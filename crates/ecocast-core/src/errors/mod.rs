mod artifact_error;
mod configuration_error;
mod inference_error;

pub use artifact_error::ArtifactError;
pub use configuration_error::ConfigurationError;
pub use inference_error::InferenceError;

/// Top-level error for every ecocast operation.
///
/// Configuration and inference failures abort a cascade outright; neither is
/// retryable because model evaluation is deterministic.
#[derive(Debug, thiserror::Error)]
pub enum EcocastError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),
}

impl EcocastError {
    /// Deployment or request-shape fault (stale feature code, unknown sector, ...).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// The model rejected the feature vector it was given.
    pub fn is_inference(&self) -> bool {
        matches!(self, Self::Inference(_))
    }

    /// Always false: both error kinds are deterministic.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Convenience alias.
pub type EcocastResult<T> = Result<T, EcocastError>;
