//! Cascade orchestrator.
//!
//! Each run walks `Stage1Pending → Stage2Pending → Stage3Pending → Complete`.
//! A stage builds its features from the request, the reference statistics
//! and the physical-unit predictions of the stages before it, evaluates its
//! model, inverts the output transform, and clamps the result at zero. Any
//! error aborts the run; there are no partial results.

use ecocast_core::errors::{ConfigurationError, EcocastResult, InferenceError};
use ecocast_core::models::{
    Campus, CascadeResult, PredictionRequest, Sector, Stage, StagePrediction,
};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::bundle::CascadeBundle;
use crate::explain::CascadeExplanation;
use crate::state::CascadeState;
use crate::trace::{CascadeTrace, StageRecord};
use crate::{batch_span, cascade_span, stage_span};

/// Stateless view over a bundle. Cheap to create, `Sync`, shareable.
#[derive(Debug, Clone, Copy)]
pub struct CascadeEngine<'a> {
    bundle: &'a CascadeBundle,
}

impl<'a> CascadeEngine<'a> {
    pub fn new(bundle: &'a CascadeBundle) -> Self {
        Self { bundle }
    }

    /// Run all three stages for one request.
    ///
    /// # Errors
    /// `Configuration` for an unknown sector or campus, a missing reference
    /// statistics entry, or a schema the builder cannot populate;
    /// `Inference` if a model rejects its vector or produces a non-finite value.
    pub fn predict_cascade(&self, request: &PredictionRequest) -> EcocastResult<CascadeResult> {
        Ok(self.predict_cascade_traced(request)?.result)
    }

    /// Same as [`predict_cascade`](Self::predict_cascade), keeping every
    /// feature vector and both the raw and physical prediction of each stage.
    pub fn predict_cascade_traced(&self, request: &PredictionRequest) -> EcocastResult<CascadeTrace> {
        let span = cascade_span!(request.campus_id(), request.sector());
        let _guard = span.enter();

        let mut state = CascadeState::default();
        let mut stages: Vec<StageRecord> = Vec::with_capacity(Stage::ALL.len());
        let mut prior: Vec<StagePrediction> = Vec::with_capacity(Stage::ALL.len());

        while let Some(stage) = state.stage() {
            let record = self.run_stage(stage, request, &prior)?;
            prior.push(record.prediction.clone());
            stages.push(record);

            let next = state.next();
            debug!(from = %state, to = %next, "cascade transition");
            state = next;
        }

        let result = package(request, &prior)?;
        Ok(CascadeTrace { stages, result })
    }

    /// Independent cascades in parallel. Each element carries its own outcome;
    /// one failing request does not affect the others.
    pub fn predict_batch(&self, requests: &[PredictionRequest]) -> Vec<EcocastResult<CascadeResult>> {
        let span = batch_span!(requests.len());
        requests
            .par_iter()
            .map(|request| span.in_scope(|| self.predict_cascade(request)))
            .collect()
    }

    /// Run the cascade and attribute each stage's raw output to its features.
    pub fn explain_cascade(&self, request: &PredictionRequest) -> EcocastResult<CascadeExplanation> {
        let trace = self.predict_cascade_traced(request)?;
        let mut stages = Vec::with_capacity(trace.stages.len());
        for record in &trace.stages {
            let predictor = self.bundle.predictor(record.stage());
            if let Some(explanation) = predictor.explain(&record.features)? {
                stages.push(explanation);
            }
        }
        Ok(CascadeExplanation {
            result: trace.result,
            stages,
        })
    }

    fn run_stage(
        &self,
        stage: Stage,
        request: &PredictionRequest,
        prior: &[StagePrediction],
    ) -> EcocastResult<StageRecord> {
        let span = stage_span!(stage);
        let _guard = span.enter();

        let predictor = self.bundle.predictor(stage);
        let features = self.bundle.builder().build(
            stage,
            request,
            self.bundle.reference_stats(),
            prior,
        )?;
        let raw = predictor.predict(&features)?;

        let physical = raw.to_physical(predictor.transform());
        if !physical.value.is_finite() {
            return Err(InferenceError::NonFiniteOutput {
                stage,
                value: physical.value,
            }
            .into());
        }
        let clamped = physical.value < 0.0;
        if clamped {
            warn!(%stage, raw = raw.value, value = physical.value, "negative prediction clamped to zero");
        }
        let prediction = physical.clamped();
        debug!(%stage, raw = raw.value, value = prediction.value, unit = %prediction.unit, "stage complete");

        Ok(StageRecord {
            features,
            raw,
            prediction,
            clamped,
        })
    }
}

fn package(request: &PredictionRequest, predictions: &[StagePrediction]) -> EcocastResult<CascadeResult> {
    let campus = Campus::from_id(request.campus_id())?;
    let sector: Sector = request.sector().parse()?;
    let value = |needed: Stage| {
        predictions
            .iter()
            .find(|p| p.stage == needed)
            .map(|p| p.value)
            .ok_or(ConfigurationError::MissingUpstream {
                stage: Stage::Co2,
                needed,
            })
    };
    Ok(CascadeResult {
        energy_kwh: value(Stage::Energy)?,
        water_liters: value(Stage::Water)?,
        co2_kg: value(Stage::Co2)?,
        campus_name: campus.name().to_string(),
        sector: sector.label().to_string(),
    })
}
