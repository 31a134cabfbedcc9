use std::io::Write;

use ecocast_core::errors::EcocastError;
use ecocast_core::models::Stage;
use ecocast_core::traits::IRegressor;
use ecocast_models::GbmRegressor;
use test_fixtures::{fixture_path, model_artifact};

#[test]
fn fixture_models_load_with_fingerprints() {
    for (name, stage, trees) in [
        ("energy", Stage::Energy, 3),
        ("water", Stage::Water, 4),
        ("co2", Stage::Co2, 5),
    ] {
        let model = GbmRegressor::load(model_artifact(name)).unwrap();
        assert_eq!(model.stage(), stage);
        assert_eq!(model.n_trees(), trees);
        let fingerprint = model.fingerprint().unwrap();
        assert_eq!(fingerprint.len(), 64);
    }
}

#[test]
fn fingerprint_is_stable_across_loads() {
    let a = GbmRegressor::load(model_artifact("energy")).unwrap();
    let b = GbmRegressor::load(model_artifact("energy")).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());

    let water = GbmRegressor::load(model_artifact("water")).unwrap();
    assert_ne!(a.fingerprint(), water.fingerprint());
}

#[test]
fn energy_fixture_evaluates_by_hand() {
    let model = GbmRegressor::load(model_artifact("energy")).unwrap();
    let mut x = vec![0.0; model.n_features()];
    let occupancy = model.feature_names().iter().position(|n| n == "occupancy_pct").unwrap();
    let lab = model
        .feature_names()
        .iter()
        .position(|n| n == "is_sector_Laboratorios")
        .unwrap();
    let hour_cos = model.feature_names().iter().position(|n| n == "hour_cos").unwrap();

    x[occupancy] = 75.0;
    x[lab] = 1.0;
    x[hour_cos] = -0.5;
    assert_eq!(model.predict(&x).unwrap(), 20.0 + 25.0 + 15.0 + 3.0);
}

#[test]
fn missing_file_is_artifact_error() {
    let err = GbmRegressor::load(fixture_path("artifacts/nope.json")).unwrap_err();
    assert!(matches!(err, EcocastError::Artifact(_)));
}

#[test]
fn malformed_json_is_artifact_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"stage\": \"energy\", \"trees\": [").unwrap();
    let err = GbmRegressor::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("cannot parse"));
}

#[test]
fn dangling_child_is_rejected_at_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "stage": "co2",
            "feature_names": ["energy_pred_kwh"],
            "trees": [{"nodes": [
                {"feature": 0, "threshold": 1.0, "left": 1, "right": 5},
                {"value": 1.0}
            ]}]
        }"#,
    )
    .unwrap();
    let err = GbmRegressor::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("tree 0, node 0"));
}

#[test]
fn load_emits_record_under_active_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::sink)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let model = tracing::subscriber::with_default(subscriber, || {
        GbmRegressor::load(model_artifact("water"))
    })
    .unwrap();
    assert_eq!(model.stage(), Stage::Water);
}
