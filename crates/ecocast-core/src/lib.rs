//! # ecocast-core
//!
//! Foundation crate for the ecocast energy → water → CO₂ prediction cascade.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EcocastConfig;
pub use errors::{EcocastError, EcocastResult};
pub use models::{
    Campus, CascadeResult, FeatureSchema, FeatureVector, PredictionRequest, Sector, Stage,
    StagePrediction,
};
