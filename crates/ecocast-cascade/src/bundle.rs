//! The immutable dependency bundle every cascade run borrows.

use std::sync::Arc;

use ecocast_core::config::EcocastConfig;
use ecocast_core::errors::{ConfigurationError, EcocastResult};
use ecocast_core::models::Stage;
use ecocast_core::traits::IReferenceStats;
use ecocast_features::{FeatureBuilder, ReferenceStats};
use ecocast_models::StagePredictor;
use tracing::info;

use crate::engine::CascadeEngine;

/// Three stage predictors, the reference statistics, and a feature builder
/// whose schemas match the predictors exactly.
pub struct CascadeBundle {
    predictors: [StagePredictor; 3],
    stats: Arc<dyn IReferenceStats>,
    builder: FeatureBuilder,
}

impl std::fmt::Debug for CascadeBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CascadeBundle")
            .field("predictors", &self.predictors)
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

impl CascadeBundle {
    /// Assemble a bundle from already-loaded parts.
    ///
    /// # Errors
    /// `InvalidConfig` if a predictor sits in the wrong slot;
    /// `SchemaMismatch` if a model expects a feature the builder cannot produce.
    pub fn new(
        energy: StagePredictor,
        water: StagePredictor,
        co2: StagePredictor,
        stats: Arc<dyn IReferenceStats>,
    ) -> EcocastResult<Self> {
        let predictors = [energy, water, co2];
        for (slot, predictor) in Stage::ALL.into_iter().zip(&predictors) {
            if predictor.stage() != slot {
                return Err(ConfigurationError::InvalidConfig {
                    reason: format!("{} predictor supplied for the {slot} stage", predictor.stage()),
                }
                .into());
            }
        }
        let [energy, water, co2] = &predictors;
        let builder = FeatureBuilder::new(
            Arc::clone(energy.schema()),
            Arc::clone(water.schema()),
            Arc::clone(co2.schema()),
        )?;
        Ok(Self {
            predictors,
            stats,
            builder,
        })
    }

    /// Load every artifact named in `config`. Call once at process start.
    pub fn load(config: &EcocastConfig) -> EcocastResult<Self> {
        config.validate()?;
        let load = |stage: Stage| {
            StagePredictor::load(
                stage,
                config.artifacts.model_for(stage),
                *config.transform_for(stage),
            )
        };
        let energy = load(Stage::Energy)?;
        let water = load(Stage::Water)?;
        let co2 = load(Stage::Co2)?;
        let stats = ReferenceStats::load(&config.artifacts.reference_stats)?;

        let bundle = Self::new(energy, water, co2, Arc::new(stats))?;
        info!(
            energy_features = bundle.predictor(Stage::Energy).schema().len(),
            water_features = bundle.predictor(Stage::Water).schema().len(),
            co2_features = bundle.predictor(Stage::Co2).schema().len(),
            "cascade bundle ready"
        );
        Ok(bundle)
    }

    pub fn predictor(&self, stage: Stage) -> &StagePredictor {
        &self.predictors[stage.index()]
    }

    pub fn builder(&self) -> &FeatureBuilder {
        &self.builder
    }

    pub fn reference_stats(&self) -> &dyn IReferenceStats {
        self.stats.as_ref()
    }

    pub fn engine(&self) -> CascadeEngine<'_> {
        CascadeEngine::new(self)
    }
}
