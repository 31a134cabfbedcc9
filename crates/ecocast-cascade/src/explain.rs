//! Cascade-wide explanation: the result plus one attribution per stage.

use ecocast_core::models::{CascadeResult, Stage};
use ecocast_models::StageExplanation;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CascadeExplanation {
    pub result: CascadeResult,
    /// Stages whose model supports attribution, in execution order.
    pub stages: Vec<StageExplanation>,
}

impl CascadeExplanation {
    pub fn stage(&self, stage: Stage) -> Option<&StageExplanation> {
        self.stages.iter().find(|e| e.stage == stage)
    }
}
