pub mod artifact_config;
pub mod defaults;
pub mod observability_config;
pub mod transform_config;

pub use artifact_config::ArtifactConfig;
pub use observability_config::ObservabilityConfig;
pub use transform_config::{OutputSpace, TargetTransform};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{ArtifactError, ConfigurationError, EcocastResult};
use crate::models::Stage;

/// Top-level configuration aggregating all sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcocastConfig {
    pub artifacts: ArtifactConfig,
    pub energy: TargetTransform,
    pub water: TargetTransform,
    pub co2: TargetTransform,
    pub observability: ObservabilityConfig,
}

impl Default for EcocastConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactConfig::default(),
            energy: TargetTransform::linear(),
            water: TargetTransform::log1p(),
            co2: TargetTransform::linear(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl EcocastConfig {
    /// Parse a TOML string; missing sections and fields take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigurationError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigurationError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> EcocastResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ArtifactError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_toml(&content)?)
    }

    /// Reject scale factors that would make every output meaningless.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for stage in Stage::ALL {
            let scale = self.transform_for(stage).scale;
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ConfigurationError::InvalidConfig {
                    reason: format!("{stage} scale must be finite and positive, got {scale}"),
                });
            }
        }
        Ok(())
    }

    pub fn transform_for(&self, stage: Stage) -> &TargetTransform {
        match stage {
            Stage::Energy => &self.energy,
            Stage::Water => &self.water,
            Stage::Co2 => &self.co2,
        }
    }
}
