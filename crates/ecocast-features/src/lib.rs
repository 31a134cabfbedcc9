//! # ecocast-features
//!
//! Turns a raw [`PredictionRequest`](ecocast_core::PredictionRequest) into the
//! three schema-checked feature vectors the cascade feeds its models.
//!
//! ## Feature groups
//!
//! | Group | Stage | Examples |
//! |-------|-------|----------|
//! | Cyclical time | all | `hour_sin`, `hour_cos`, `day_sin`, `day_cos` |
//! | Indicators | all | `is_peak_hour`, `is_weekend`, `is_night`, `is_sector_*` |
//! | Sector interactions + history | water, co2 | `cafeteria_x_temperature`, `hist_water_sector_mean` |
//! | Upstream predictions | water, co2 | `energy_pred_kwh`, `water_pred_liters`, `energy_pred_squared` |
//!
//! Feature order always comes from the model's schema; the builder never
//! reorders, drops, or defaults a feature.

pub mod builder;
pub mod catalog;
pub mod encoding;
pub mod reference_stats;

pub use builder::FeatureBuilder;
pub use reference_stats::ReferenceStats;
