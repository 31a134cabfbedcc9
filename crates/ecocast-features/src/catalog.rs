//! Names of every feature the builder can produce, grouped by the first
//! stage that may use them.

use std::sync::Arc;

use ecocast_core::models::{FeatureSchema, Sector, Stage};

/// Features derived from the raw request alone. Available to every stage.
pub const REQUEST_FEATURES: [&str; 23] = [
    "campus_id",
    "sector_code",
    "hour",
    "hour_sin",
    "hour_cos",
    "day_of_week",
    "day_sin",
    "day_cos",
    "temperature_c",
    "occupancy_pct",
    "temp_x_occupancy",
    "is_holiday",
    "is_midterm",
    "is_final",
    "is_peak_hour",
    "is_weekend",
    "is_night",
    "is_meal_hour",
    "is_sector_Auditorios",
    "is_sector_Comedores",
    "is_sector_Laboratorios",
    "is_sector_Oficinas",
    "is_sector_Salones",
];

/// Added from the water stage on: energy threading, sector interactions, history.
pub const WATER_FEATURES: [&str; 11] = [
    "energy_pred_kwh",
    "energy_x_occupancy",
    "is_high_temperature",
    "sector_is_cafeteria",
    "cafeteria_x_temperature",
    "cafeteria_x_occupancy",
    "sector_is_lab",
    "lab_x_occupancy",
    "hist_water_sector_mean",
    "hist_water_sector_std",
    "hist_water_campus_mean",
];

/// Added at the CO₂ stage: water threading and the quadratic energy term.
pub const CO2_FEATURES: [&str; 3] = [
    "water_pred_liters",
    "energy_pred_squared",
    "hist_co2_sector_mean",
];

/// Features that require a reference-statistics lookup.
pub const HISTORY_FEATURES: [&str; 4] = [
    "hist_water_sector_mean",
    "hist_water_sector_std",
    "hist_water_campus_mean",
    "hist_co2_sector_mean",
];

/// Indicator feature name for a sector.
pub fn sector_indicator(sector: Sector) -> String {
    format!("is_sector_{}", sector.label())
}

/// Every feature name a stage may reference, in canonical order.
pub fn available(stage: Stage) -> impl Iterator<Item = &'static str> {
    let water: &'static [&'static str] = if stage >= Stage::Water {
        &WATER_FEATURES
    } else {
        &[]
    };
    let co2: &'static [&'static str] = if stage >= Stage::Co2 {
        &CO2_FEATURES
    } else {
        &[]
    };
    REQUEST_FEATURES
        .iter()
        .chain(water)
        .chain(co2)
        .copied()
}

pub fn is_available(stage: Stage, name: &str) -> bool {
    available(stage).any(|n| n == name)
}

/// The full catalog of a stage, used when artifacts ship no schema of their own.
pub fn canonical_schema(stage: Stage) -> Arc<FeatureSchema> {
    Arc::new(FeatureSchema::new(
        stage,
        available(stage).map(str::to_string).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_schema_sizes() {
        assert_eq!(canonical_schema(Stage::Energy).len(), 23);
        assert_eq!(canonical_schema(Stage::Water).len(), 34);
        assert_eq!(canonical_schema(Stage::Co2).len(), 37);
    }

    #[test]
    fn later_stages_extend_earlier_ones() {
        let energy = canonical_schema(Stage::Energy);
        let water = canonical_schema(Stage::Water);
        let co2 = canonical_schema(Stage::Co2);
        assert_eq!(&water.names[..energy.len()], energy.names());
        assert_eq!(&co2.names[..water.len()], water.names());
    }

    #[test]
    fn upstream_features_are_not_available_early() {
        assert!(!is_available(Stage::Energy, "energy_pred_kwh"));
        assert!(is_available(Stage::Water, "energy_pred_kwh"));
        assert!(!is_available(Stage::Water, "water_pred_liters"));
        assert!(is_available(Stage::Co2, "water_pred_liters"));
    }

    #[test]
    fn every_sector_has_an_indicator() {
        for sector in Sector::ALL {
            assert!(REQUEST_FEATURES.contains(&sector_indicator(sector).as_str()));
        }
    }
}
