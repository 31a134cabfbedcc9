//! Per-feature attributions for one stage prediction.
//!
//! The layout matches what waterfall/force-plot renderers consume: a base
//! value, one contribution per feature, and the feature values themselves.
//! Contributions are in the model's raw output space, so for a log-space
//! stage they explain `ln(1 + y)`, not `y`.

use ecocast_core::models::{Attribution, FeatureVector, Stage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageExplanation {
    pub stage: Stage,
    pub base_value: f64,
    /// Contribution of each feature, aligned with `feature_names`.
    pub values: Vec<f64>,
    /// Feature values the model saw.
    pub data: Vec<f64>,
    pub feature_names: Vec<String>,
    pub raw_prediction: f64,
    pub log_space: bool,
}

impl StageExplanation {
    pub fn new(features: &FeatureVector, attribution: Attribution, log_space: bool) -> Self {
        let raw_prediction = attribution.total();
        Self {
            stage: features.stage(),
            base_value: attribution.base_value,
            values: attribution.contributions,
            data: features.values().to_vec(),
            feature_names: features.names().to_vec(),
            raw_prediction,
            log_space,
        }
    }

    /// The `n` features with the largest absolute contribution, largest first.
    /// Ties keep schema order.
    pub fn top_contributors(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .feature_names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explanation() -> StageExplanation {
        let features = FeatureVector::from_pairs(
            Stage::Energy,
            [("hour", 10.0), ("occupancy_pct", 75.0), ("is_weekend", 0.0)],
        );
        let attribution = Attribution {
            base_value: 20.0,
            contributions: vec![1.5, -8.0, 1.5],
        };
        StageExplanation::new(&features, attribution, false)
    }

    #[test]
    fn raw_prediction_is_base_plus_contributions() {
        assert_eq!(explanation().raw_prediction, 15.0);
    }

    #[test]
    fn top_contributors_rank_by_magnitude() {
        let e = explanation();
        let top = e.top_contributors(2);
        assert_eq!(top[0], ("occupancy_pct", -8.0));
        assert_eq!(top[1], ("hour", 1.5));
    }

    #[test]
    fn top_contributors_caps_at_feature_count() {
        assert_eq!(explanation().top_contributors(10).len(), 3);
    }
}
