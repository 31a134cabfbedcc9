//! FeatureBuilder: assembles one schema-ordered feature vector per stage.
//!
//! Each stage's entry point names exactly the upstream predictions it
//! consumes: energy takes none, water takes the energy prediction, CO₂ takes
//! energy and the de-logged water prediction.

use std::collections::HashSet;
use std::sync::Arc;

use ecocast_core::errors::{ConfigurationError, EcocastResult};
use ecocast_core::models::{
    Campus, FeatureSchema, FeatureVector, HistoricalAggregates, PredictionRequest, Sector, Stage,
    StagePrediction,
};
use ecocast_core::traits::IReferenceStats;
use tracing::trace;

use crate::catalog::{self, HISTORY_FEATURES};
use crate::encoding::{
    day_cyclical, hour_cyclical, indicator, is_meal_hour, is_night, is_peak_hour, is_weekend,
};
use ecocast_core::constants::HIGH_TEMPERATURE_C;

/// Builds feature vectors against fixed per-stage schemas.
#[derive(Debug, Clone)]
pub struct FeatureBuilder {
    schemas: [Arc<FeatureSchema>; 3],
    needs_history: [bool; 3],
}

impl FeatureBuilder {
    /// Builder over the full canonical catalog of every stage.
    pub fn canonical() -> Self {
        let schemas = Stage::ALL.map(catalog::canonical_schema);
        let needs_history = Stage::ALL.map(|stage| needs_history(&schemas[stage.index()]));
        Self {
            schemas,
            needs_history,
        }
    }

    /// Builder over the schemas the loaded models expect.
    ///
    /// # Errors
    /// `SchemaMismatch` if a schema is attached to the wrong stage, repeats a
    /// feature, or names a feature its stage cannot produce.
    pub fn new(
        energy: Arc<FeatureSchema>,
        water: Arc<FeatureSchema>,
        co2: Arc<FeatureSchema>,
    ) -> Result<Self, ConfigurationError> {
        let schemas = [energy, water, co2];
        for stage in Stage::ALL {
            validate_schema(stage, &schemas[stage.index()])?;
        }
        let needs_history = Stage::ALL.map(|stage| needs_history(&schemas[stage.index()]));
        Ok(Self {
            schemas,
            needs_history,
        })
    }

    pub fn schema(&self, stage: Stage) -> &Arc<FeatureSchema> {
        &self.schemas[stage.index()]
    }

    /// Generic entry point: picks the upstream predictions a stage needs out of `prior`.
    ///
    /// # Errors
    /// `MissingUpstream` if `prior` lacks a prediction the stage consumes.
    pub fn build(
        &self,
        stage: Stage,
        request: &PredictionRequest,
        stats: &dyn IReferenceStats,
        prior: &[StagePrediction],
    ) -> EcocastResult<FeatureVector> {
        let find = |needed: Stage| {
            prior
                .iter()
                .find(|p| p.stage == needed)
                .ok_or(ConfigurationError::MissingUpstream { stage, needed })
        };
        match stage {
            Stage::Energy => self.build_energy(request),
            Stage::Water => self.build_water(request, stats, find(Stage::Energy)?),
            Stage::Co2 => self.build_co2(request, stats, find(Stage::Energy)?, find(Stage::Water)?),
        }
    }

    /// Stage 1: raw request only.
    pub fn build_energy(&self, request: &PredictionRequest) -> EcocastResult<FeatureVector> {
        self.assemble(Stage::Energy, request, None, Upstream::default())
    }

    /// Stage 2: raw request + energy prediction + reference statistics.
    pub fn build_water(
        &self,
        request: &PredictionRequest,
        stats: &dyn IReferenceStats,
        energy: &StagePrediction,
    ) -> EcocastResult<FeatureVector> {
        let upstream = Upstream {
            energy: Some(upstream_value(Stage::Water, Stage::Energy, energy)?),
            water: None,
        };
        self.assemble(Stage::Water, request, Some(stats), upstream)
    }

    /// Stage 3: raw request + energy and physical-unit water predictions.
    pub fn build_co2(
        &self,
        request: &PredictionRequest,
        stats: &dyn IReferenceStats,
        energy: &StagePrediction,
        water: &StagePrediction,
    ) -> EcocastResult<FeatureVector> {
        let upstream = Upstream {
            energy: Some(upstream_value(Stage::Co2, Stage::Energy, energy)?),
            water: Some(upstream_value(Stage::Co2, Stage::Water, water)?),
        };
        self.assemble(Stage::Co2, request, Some(stats), upstream)
    }

    fn assemble(
        &self,
        stage: Stage,
        request: &PredictionRequest,
        stats: Option<&dyn IReferenceStats>,
        upstream: Upstream,
    ) -> EcocastResult<FeatureVector> {
        let campus = Campus::from_id(request.campus_id())?;
        let sector: Sector = request.sector().parse()?;

        let history = match (self.needs_history[stage.index()], stats) {
            (true, Some(stats)) => Some(stats.lookup(sector, campus)?),
            _ => None,
        };

        let inputs = Inputs {
            request,
            campus,
            sector,
            history,
            upstream,
        };

        let schema = &self.schemas[stage.index()];
        let mut values = Vec::with_capacity(schema.len());
        for name in schema.names() {
            let value = inputs
                .value_of(name)
                .ok_or_else(|| ConfigurationError::SchemaMismatch {
                    stage,
                    feature: name.clone(),
                    reason: "no value available at this stage".to_string(),
                })?;
            values.push(value);
        }

        trace!(%stage, %campus, %sector, features = values.len(), "feature vector assembled");
        Ok(FeatureVector::new(Arc::clone(schema), values)?)
    }
}

impl Default for FeatureBuilder {
    fn default() -> Self {
        Self::canonical()
    }
}

fn validate_schema(stage: Stage, schema: &FeatureSchema) -> Result<(), ConfigurationError> {
    if schema.stage != stage {
        return Err(ConfigurationError::SchemaMismatch {
            stage,
            feature: "<schema>".to_string(),
            reason: format!("schema belongs to the {} stage", schema.stage),
        });
    }
    let mut seen = HashSet::with_capacity(schema.len());
    for name in schema.names() {
        if !seen.insert(name.as_str()) {
            return Err(ConfigurationError::SchemaMismatch {
                stage,
                feature: name.clone(),
                reason: "duplicate feature".to_string(),
            });
        }
        if !catalog::is_available(stage, name) {
            return Err(ConfigurationError::SchemaMismatch {
                stage,
                feature: name.clone(),
                reason: "not produced at this stage".to_string(),
            });
        }
    }
    Ok(())
}

fn needs_history(schema: &FeatureSchema) -> bool {
    schema
        .names()
        .iter()
        .any(|n| HISTORY_FEATURES.contains(&n.as_str()))
}

/// Check a threaded prediction is the right stage and in physical units.
fn upstream_value(
    stage: Stage,
    needed: Stage,
    prediction: &StagePrediction,
) -> Result<f64, ConfigurationError> {
    if prediction.stage != needed {
        return Err(ConfigurationError::MissingUpstream { stage, needed });
    }
    if prediction.log_space {
        return Err(ConfigurationError::SchemaMismatch {
            stage,
            feature: format!("{needed}_prediction"),
            reason: "upstream prediction is still in log space".to_string(),
        });
    }
    Ok(prediction.value)
}

#[derive(Debug, Default, Clone, Copy)]
struct Upstream {
    energy: Option<f64>,
    water: Option<f64>,
}

/// Resolved inputs for one feature vector.
struct Inputs<'a> {
    request: &'a PredictionRequest,
    campus: Campus,
    sector: Sector,
    history: Option<HistoricalAggregates>,
    upstream: Upstream,
}

impl Inputs<'_> {
    /// `None` when the value depends on something this stage was not given.
    fn value_of(&self, name: &str) -> Option<f64> {
        let req = self.request;
        let hour = req.hour();
        let day = req.day_of_week();
        let temperature = req.temperature_c();
        let occupancy = req.occupancy_pct();
        let cafeteria = indicator(self.sector.is_cafeteria());
        let lab = indicator(self.sector.is_lab());

        let value = match name {
            "campus_id" => f64::from(self.campus.id()),
            "sector_code" => f64::from(self.sector.code()),
            "hour" => f64::from(hour),
            "hour_sin" => hour_cyclical(hour).0,
            "hour_cos" => hour_cyclical(hour).1,
            "day_of_week" => f64::from(day),
            "day_sin" => day_cyclical(day).0,
            "day_cos" => day_cyclical(day).1,
            "temperature_c" => temperature,
            "occupancy_pct" => occupancy,
            "temp_x_occupancy" => temperature * occupancy,
            "is_holiday" => indicator(req.is_holiday()),
            "is_midterm" => indicator(req.is_midterm()),
            "is_final" => indicator(req.is_final()),
            "is_peak_hour" => indicator(is_peak_hour(hour)),
            "is_weekend" => indicator(is_weekend(day)),
            "is_night" => indicator(is_night(hour)),
            "is_meal_hour" => indicator(is_meal_hour(hour)),
            "is_sector_Auditorios" => indicator(self.sector == Sector::Auditorios),
            "is_sector_Comedores" => indicator(self.sector == Sector::Comedores),
            "is_sector_Laboratorios" => indicator(self.sector == Sector::Laboratorios),
            "is_sector_Oficinas" => indicator(self.sector == Sector::Oficinas),
            "is_sector_Salones" => indicator(self.sector == Sector::Salones),

            "energy_pred_kwh" => self.upstream.energy?,
            "energy_x_occupancy" => self.upstream.energy? * occupancy,
            "is_high_temperature" => indicator(temperature > HIGH_TEMPERATURE_C),
            "sector_is_cafeteria" => cafeteria,
            "cafeteria_x_temperature" => cafeteria * temperature,
            "cafeteria_x_occupancy" => cafeteria * occupancy,
            "sector_is_lab" => lab,
            "lab_x_occupancy" => lab * occupancy,
            "hist_water_sector_mean" => self.history?.water_sector_mean,
            "hist_water_sector_std" => self.history?.water_sector_std,
            "hist_water_campus_mean" => self.history?.water_campus_mean,

            "water_pred_liters" => self.upstream.water?,
            "energy_pred_squared" => self.upstream.energy?.powi(2),
            "hist_co2_sector_mean" => self.history?.co2_sector_mean,

            _ => return None,
        };
        Some(value)
    }
}
