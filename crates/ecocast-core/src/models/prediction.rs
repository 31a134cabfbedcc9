use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::{OutputSpace, TargetTransform};
use crate::models::Stage;

/// Output of one stage predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StagePrediction {
    pub stage: Stage,
    pub value: f64,
    /// Physical unit, or the transformed unit (`ln(1+liters)`) while in log space.
    pub unit: String,
    /// True while `value` is still in the model's transformed target space.
    pub log_space: bool,
}

impl StagePrediction {
    /// A value in physical units.
    pub fn new(stage: Stage, value: f64) -> Self {
        Self::in_space(stage, value, OutputSpace::Linear)
    }

    /// A raw model output in the space its target was trained in.
    pub fn in_space(stage: Stage, value: f64, space: OutputSpace) -> Self {
        Self {
            stage,
            value,
            unit: space.unit_label(stage.unit()),
            log_space: space.is_log(),
        }
    }

    /// Map the raw model output back into physical units.
    pub fn to_physical(&self, transform: &TargetTransform) -> Self {
        Self::new(self.stage, transform.invert(self.value))
    }

    /// Clamp negative values to zero; consumption can never be negative.
    pub fn clamped(&self) -> Self {
        Self {
            value: self.value.max(0.0),
            ..self.clone()
        }
    }
}
