//! Stage predictor: one immutable model plus the contract around it.
//!
//! The predictor checks that a feature vector matches the model's trained
//! schema (stage, cardinality, name at every position) before evaluating,
//! and reports whether its output is still in log space. It never inverts
//! or clamps; that is the orchestrator's job.

use std::path::Path;
use std::sync::Arc;

use ecocast_core::config::TargetTransform;
use ecocast_core::errors::{ConfigurationError, EcocastResult, InferenceError};
use ecocast_core::models::{FeatureSchema, FeatureVector, Stage, StagePrediction};
use ecocast_core::traits::IRegressor;

use crate::ensemble::GbmRegressor;
use crate::explain::StageExplanation;

#[derive(Clone)]
pub struct StagePredictor {
    stage: Stage,
    model: Arc<dyn IRegressor>,
    schema: Arc<FeatureSchema>,
    transform: TargetTransform,
    fingerprint: Option<String>,
}

impl std::fmt::Debug for StagePredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StagePredictor")
            .field("stage", &self.stage)
            .field("features", &self.schema.len())
            .field("transform", &self.transform)
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

impl StagePredictor {
    /// Wrap any regressor. The schema is taken from the model's feature names.
    pub fn new(stage: Stage, model: Arc<dyn IRegressor>, transform: TargetTransform) -> Self {
        let schema = Arc::new(FeatureSchema::new(stage, model.feature_names().to_vec()));
        Self {
            stage,
            model,
            schema,
            transform,
            fingerprint: None,
        }
    }

    /// Load a boosted-tree artifact for `stage`.
    ///
    /// # Errors
    /// Artifact errors from the loader, or `InvalidConfig` if the artifact
    /// was trained for a different stage.
    pub fn load(stage: Stage, path: impl AsRef<Path>, transform: TargetTransform) -> EcocastResult<Self> {
        let path = path.as_ref();
        let model = GbmRegressor::load(path)?;
        if model.stage() != stage {
            return Err(ConfigurationError::InvalidConfig {
                reason: format!(
                    "{} holds a {} model, expected {stage}",
                    path.display(),
                    model.stage()
                ),
            }
            .into());
        }
        let fingerprint = model.fingerprint().map(str::to_owned);
        let mut predictor = Self::new(stage, Arc::new(model), transform);
        predictor.fingerprint = fingerprint;
        Ok(predictor)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Ordered feature names the model was trained on.
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    pub fn transform(&self) -> &TargetTransform {
        &self.transform
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    fn check(&self, features: &FeatureVector) -> Result<(), InferenceError> {
        if features.stage() != self.stage {
            return Err(InferenceError::StageMismatch {
                expected: self.stage,
                actual: features.stage(),
            });
        }
        if features.len() != self.schema.len() {
            return Err(InferenceError::DimensionMismatch {
                stage: self.stage,
                expected: self.schema.len(),
                actual: features.len(),
            });
        }
        if Arc::ptr_eq(features.schema(), &self.schema) {
            return Ok(());
        }
        let mismatch = self
            .schema
            .names()
            .iter()
            .zip(features.names())
            .position(|(expected, actual)| expected != actual);
        if let Some(position) = mismatch {
            return Err(InferenceError::FeatureMismatch {
                stage: self.stage,
                position,
                expected: self.schema.names()[position].clone(),
                actual: features.names()[position].clone(),
            });
        }
        Ok(())
    }

    /// Evaluate the model. The result is in the model's raw output space.
    pub fn predict(&self, features: &FeatureVector) -> EcocastResult<StagePrediction> {
        self.check(features)?;
        let raw = self.model.predict(features.values())?;
        if !raw.is_finite() {
            return Err(InferenceError::NonFiniteOutput {
                stage: self.stage,
                value: raw,
            }
            .into());
        }
        Ok(StagePrediction::in_space(self.stage, raw, self.transform.space))
    }

    /// Per-feature attribution of the raw output, if the model supports it.
    pub fn explain(&self, features: &FeatureVector) -> EcocastResult<Option<StageExplanation>> {
        self.check(features)?;
        let explanation = self
            .model
            .attribute(features.values())?
            .map(|a| StageExplanation::new(features, a, self.transform.space.is_log()));
        Ok(explanation)
    }
}
