use std::sync::Arc;

use ecocast_core::config::TargetTransform;
use ecocast_core::models::{FeatureSchema, FeatureVector, Stage};
use ecocast_models::StagePredictor;
use proptest::prelude::*;
use test_fixtures::model_artifact;

fn water() -> StagePredictor {
    StagePredictor::load(Stage::Water, model_artifact("water"), TargetTransform::log1p()).unwrap()
}

fn zeros(predictor: &StagePredictor) -> FeatureVector {
    FeatureVector::new(Arc::clone(predictor.schema()), vec![0.0; predictor.schema().len()]).unwrap()
}

#[test]
fn loading_artifact_for_wrong_stage_fails() {
    let err = StagePredictor::load(Stage::Energy, model_artifact("water"), TargetTransform::linear())
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn predictor_exposes_artifact_fingerprint() {
    assert!(water().fingerprint().is_some());
}

#[test]
fn water_output_is_flagged_log_space() {
    let p = water();
    let out = p.predict(&zeros(&p)).unwrap();
    assert!(out.log_space);
    assert_eq!(out.unit, "ln(1+liters)");
}

#[test]
fn truncated_vector_is_dimension_mismatch() {
    let p = water();
    let names = p.schema().names()[..10].to_vec();
    let schema = Arc::new(FeatureSchema::new(Stage::Water, names));
    let v = FeatureVector::new(schema, vec![0.0; 10]).unwrap();
    let err = p.predict(&v).unwrap_err();
    assert!(err.to_string().contains("expects 34 features, got 10"));
}

#[test]
fn renamed_feature_is_feature_mismatch() {
    let p = water();
    let mut names = p.schema().names().to_vec();
    names[23] = "energy_prediction".to_string();
    let schema = Arc::new(FeatureSchema::new(Stage::Water, names));
    let v = FeatureVector::new(schema, vec![0.0; 34]).unwrap();
    let err = p.predict(&v).unwrap_err();
    assert!(err.to_string().contains("position 23"));
}

#[test]
fn explanation_carries_features_and_names() {
    let p = water();
    let v = zeros(&p);
    let e = p.explain(&v).unwrap().unwrap();
    assert_eq!(e.stage, Stage::Water);
    assert_eq!(e.feature_names.len(), 34);
    assert_eq!(e.data, v.values());
    assert!(e.log_space);
}

proptest! {
    #[test]
    fn attributions_sum_to_raw_output(
        occupancy in 0.0f64..120.0,
        energy in 0.0f64..150.0,
        hist in 0.0f64..1000.0,
        meal in any::<bool>(),
        cafeteria in any::<bool>(),
        weekend in any::<bool>(),
    ) {
        let p = water();
        let schema = Arc::clone(p.schema());
        let mut values = vec![0.0; schema.len()];
        let set = |values: &mut Vec<f64>, name: &str, v: f64| {
            let i = schema.position(name).unwrap();
            values[i] = v;
        };
        set(&mut values, "occupancy_pct", occupancy);
        set(&mut values, "energy_pred_kwh", energy);
        set(&mut values, "hist_water_sector_mean", hist);
        set(&mut values, "is_meal_hour", f64::from(u8::from(meal)));
        set(&mut values, "sector_is_cafeteria", f64::from(u8::from(cafeteria)));
        set(&mut values, "is_weekend", f64::from(u8::from(weekend)));
        let v = FeatureVector::new(Arc::clone(&schema), values).unwrap();

        let raw = p.predict(&v).unwrap().value;
        let e = p.explain(&v).unwrap().unwrap();
        prop_assert!((e.base_value + e.values.iter().sum::<f64>() - raw).abs() < 1e-9);
    }
}
