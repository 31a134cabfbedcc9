use serde::{Deserialize, Serialize};

use super::defaults;

/// Space a model's target was trained in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSpace {
    /// Raw physical units.
    Linear,
    /// `ln(1 + y)`; inverted with `exp(x) - 1`.
    Log1p,
    /// `ln(y)`; inverted with `exp(x)`.
    Ln,
}

impl OutputSpace {
    pub fn is_log(self) -> bool {
        !matches!(self, Self::Linear)
    }

    /// Unit label for a value in this space, e.g. `ln(1+liters)`.
    pub fn unit_label(self, unit: &str) -> String {
        match self {
            Self::Linear => unit.to_string(),
            Self::Log1p => format!("ln(1+{unit})"),
            Self::Ln => format!("ln({unit})"),
        }
    }
}

/// Inverse transform from model output to physical units.
///
/// The scale factor absorbs the unit conversion the training data went
/// through, so it must be calibrated against the artifacts in use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetTransform {
    pub space: OutputSpace,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    defaults::DEFAULT_TARGET_SCALE
}

impl TargetTransform {
    pub fn linear() -> Self {
        Self {
            space: OutputSpace::Linear,
            scale: defaults::DEFAULT_TARGET_SCALE,
        }
    }

    pub fn log1p() -> Self {
        Self {
            space: OutputSpace::Log1p,
            scale: defaults::DEFAULT_TARGET_SCALE,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Map a raw model output into physical units. Never clamps.
    pub fn invert(&self, raw: f64) -> f64 {
        let unscaled = match self.space {
            OutputSpace::Linear => raw,
            OutputSpace::Log1p => raw.exp_m1(),
            OutputSpace::Ln => raw.exp(),
        };
        unscaled * self.scale
    }
}
