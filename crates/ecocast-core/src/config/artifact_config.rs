use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Stage;

/// Locations of the trained model artifacts and the reference statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    pub energy_model: String,
    pub water_model: String,
    pub co2_model: String,
    pub reference_stats: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            energy_model: defaults::DEFAULT_ENERGY_MODEL.to_string(),
            water_model: defaults::DEFAULT_WATER_MODEL.to_string(),
            co2_model: defaults::DEFAULT_CO2_MODEL.to_string(),
            reference_stats: defaults::DEFAULT_REFERENCE_STATS.to_string(),
        }
    }
}

impl ArtifactConfig {
    pub fn model_for(&self, stage: Stage) -> &str {
        match stage {
            Stage::Energy => &self.energy_model,
            Stage::Water => &self.water_model,
            Stage::Co2 => &self.co2_model,
        }
    }
}
