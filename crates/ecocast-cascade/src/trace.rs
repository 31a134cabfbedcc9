//! Full record of one cascade run: what each stage saw and produced.

use ecocast_core::models::{CascadeResult, FeatureVector, Stage, StagePrediction};
use serde::Serialize;

/// One stage's inputs and outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageRecord {
    pub features: FeatureVector,
    /// Model output before the inverse transform (log space for water).
    pub raw: StagePrediction,
    /// Physical units, clamped at zero. This is what later stages consume.
    pub prediction: StagePrediction,
    /// The de-transformed output was negative and was raised to zero.
    pub clamped: bool,
}

impl StageRecord {
    pub fn stage(&self) -> Stage {
        self.raw.stage
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CascadeTrace {
    /// In execution order: energy, water, CO₂.
    pub stages: Vec<StageRecord>,
    pub result: CascadeResult,
}

impl CascadeTrace {
    pub fn record(&self, stage: Stage) -> Option<&StageRecord> {
        self.stages.iter().find(|r| r.stage() == stage)
    }
}
