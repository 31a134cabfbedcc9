//! Gradient-boosted regression ensemble.
//!
//! Output is `base_score + Σ tree(x)`; leaf values already include the
//! learning rate, as in XGBoost dumps. The artifact records the ordered
//! feature names the model was trained on.

use std::path::Path;

use ecocast_core::errors::{ArtifactError, EcocastResult, InferenceError};
use ecocast_core::models::{Attribution, Stage};
use ecocast_core::traits::IRegressor;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::tree::{RegressionTree, TreeNode};

/// One tree as stored in the artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeArtifact {
    pub nodes: Vec<TreeNode>,
}

/// JSON layout of a model artifact file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub stage: Stage,
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<TreeArtifact>,
}

/// Immutable boosted-tree regressor.
#[derive(Debug, Clone)]
pub struct GbmRegressor {
    stage: Stage,
    feature_names: Vec<String>,
    base_score: f64,
    trees: Vec<RegressionTree>,
    fingerprint: Option<String>,
}

impl GbmRegressor {
    /// Validate an in-memory artifact.
    ///
    /// # Errors
    /// `EmptyEnsemble` for an artifact with no trees; `InvalidTree` for any
    /// structurally broken tree; `Parse` for a non-finite base score.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ArtifactError> {
        if artifact.trees.is_empty() {
            return Err(ArtifactError::EmptyEnsemble);
        }
        if !artifact.base_score.is_finite() {
            return Err(ArtifactError::Parse {
                path: format!("<{} model>", artifact.stage),
                reason: format!("base_score is not finite: {}", artifact.base_score),
            });
        }
        let n_features = artifact.feature_names.len();
        let trees = artifact
            .trees
            .into_iter()
            .enumerate()
            .map(|(i, t)| RegressionTree::new(t.nodes, n_features, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            stage: artifact.stage,
            feature_names: artifact.feature_names,
            base_score: artifact.base_score,
            trees,
            fingerprint: None,
        })
    }

    /// Load and validate a JSON artifact, recording its blake3 fingerprint.
    pub fn load(path: impl AsRef<Path>) -> EcocastResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|e| ArtifactError::Io {
            path: shown.clone(),
            reason: e.to_string(),
        })?;
        let fingerprint = blake3::hash(&bytes).to_hex().to_string();
        let artifact: ModelArtifact =
            serde_json::from_slice(&bytes).map_err(|e| ArtifactError::Parse {
                path: shown.clone(),
                reason: e.to_string(),
            })?;

        let mut model = Self::from_artifact(artifact)?;
        info!(
            path = %shown,
            stage = %model.stage,
            trees = model.trees.len(),
            features = model.feature_names.len(),
            fingerprint = &fingerprint[..16],
            "model artifact loaded"
        );
        model.fingerprint = Some(fingerprint);
        Ok(model)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// blake3 hex digest of the artifact bytes, when loaded from disk.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Mean output over the training distribution.
    pub fn expected_value(&self) -> f64 {
        self.base_score + self.trees.iter().map(RegressionTree::expected_value).sum::<f64>()
    }

    fn check_dimension(&self, features: &[f64]) -> Result<(), InferenceError> {
        if features.len() != self.feature_names.len() {
            return Err(InferenceError::DimensionMismatch {
                stage: self.stage,
                expected: self.feature_names.len(),
                actual: features.len(),
            });
        }
        Ok(())
    }
}

impl IRegressor for GbmRegressor {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, features: &[f64]) -> EcocastResult<f64> {
        self.check_dimension(features)?;
        Ok(self.base_score + self.trees.iter().map(|t| t.predict(features)).sum::<f64>())
    }

    fn attribute(&self, features: &[f64]) -> EcocastResult<Option<Attribution>> {
        self.check_dimension(features)?;
        let mut contributions = vec![0.0; features.len()];
        for tree in &self.trees {
            tree.attribute(features, &mut contributions);
        }
        Ok(Some(Attribution {
            base_value: self.expected_value(),
            contributions,
        }))
    }
}
