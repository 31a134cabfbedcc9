//! # ecocast-models
//!
//! Inference side of the three trained regressors.
//!
//! - [`tree`]: one regression tree (XGBoost split rule, cover-weighted node expectations)
//! - [`ensemble`]: [`GbmRegressor`], a boosted ensemble loaded from a JSON artifact
//! - [`predictor`]: [`StagePredictor`], the schema-checking wrapper the cascade calls
//! - [`explain`]: per-feature attributions for external chart renderers

pub mod ensemble;
pub mod explain;
pub mod predictor;
pub mod tree;

pub use ensemble::{GbmRegressor, ModelArtifact};
pub use explain::StageExplanation;
pub use predictor::StagePredictor;
pub use tree::{RegressionTree, TreeNode};
