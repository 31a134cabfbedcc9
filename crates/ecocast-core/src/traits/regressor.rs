use crate::errors::EcocastResult;
use crate::models::Attribution;

/// A trained, immutable regression model.
///
/// Implementations must be pure: the same features always give the same
/// output, and nothing is mutated by `predict`.
pub trait IRegressor: Send + Sync {
    /// Ordered feature names the model was trained on.
    fn feature_names(&self) -> &[String];

    /// Number of input features.
    fn n_features(&self) -> usize {
        self.feature_names().len()
    }

    /// Evaluate one sample. Fails if `features.len() != n_features()`.
    fn predict(&self, features: &[f64]) -> EcocastResult<f64>;

    /// Additive per-feature attribution of the raw output, if the model supports it.
    fn attribute(&self, _features: &[f64]) -> EcocastResult<Option<Attribution>> {
        Ok(None)
    }
}
