use ecocast_cascade::CascadeBundle;
use ecocast_core::config::EcocastConfig;
use ecocast_core::models::PredictionRequest;
use proptest::prelude::*;
use std::sync::OnceLock;
use test_fixtures::{model_artifact, reference_stats_artifact};

const SECTORS: [&str; 5] = ["Auditorios", "Comedores", "Laboratorios", "Oficinas", "Salones"];

fn bundle() -> &'static CascadeBundle {
    static BUNDLE: OnceLock<CascadeBundle> = OnceLock::new();
    BUNDLE.get_or_init(|| {
        let mut config = EcocastConfig::default();
        config.artifacts.energy_model = model_artifact("energy").display().to_string();
        config.artifacts.water_model = model_artifact("water").display().to_string();
        config.artifacts.co2_model = model_artifact("co2").display().to_string();
        config.artifacts.reference_stats = reference_stats_artifact().display().to_string();
        CascadeBundle::load(&config).unwrap()
    })
}

fn request() -> impl Strategy<Value = PredictionRequest> {
    (
        1u8..=4,
        0usize..5,
        0u32..24,
        0u32..7,
        -10.0f64..45.0,
        // Out-of-range occupancy is accepted and extrapolated.
        -20.0f64..150.0,
        any::<bool>(),
    )
        .prop_map(|(campus, sector, hour, day, temperature, occupancy, holiday)| {
            PredictionRequest::new(campus, SECTORS[sector], hour, day, temperature, occupancy)
                .with_holiday(holiday)
        })
}

proptest! {
    #[test]
    fn outputs_are_never_negative(req in request()) {
        let result = bundle().engine().predict_cascade(&req).unwrap();
        prop_assert!(result.energy_kwh >= 0.0);
        prop_assert!(result.water_liters >= 0.0);
        prop_assert!(result.co2_kg >= 0.0);
    }

    #[test]
    fn repeated_runs_are_identical(req in request()) {
        let engine = bundle().engine();
        let a = engine.predict_cascade(&req).unwrap();
        let b = engine.predict_cascade(&req).unwrap();
        prop_assert_eq!(a.energy_kwh.to_bits(), b.energy_kwh.to_bits());
        prop_assert_eq!(a.water_liters.to_bits(), b.water_liters.to_bits());
        prop_assert_eq!(a.co2_kg.to_bits(), b.co2_kg.to_bits());
    }

    #[test]
    fn batch_matches_sequential(reqs in proptest::collection::vec(request(), 1..16)) {
        let engine = bundle().engine();
        let batch = engine.predict_batch(&reqs);
        for (req, out) in reqs.iter().zip(batch) {
            prop_assert_eq!(out.unwrap(), engine.predict_cascade(req).unwrap());
        }
    }
}
