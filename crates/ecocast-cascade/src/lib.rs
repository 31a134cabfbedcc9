//! # ecocast-cascade
//!
//! Runs the energy → water → CO₂ cascade over an immutable [`CascadeBundle`].
//!
//! The bundle is built once at startup (three stage predictors, the
//! reference statistics, and a feature builder matched to the predictors'
//! schemas) and shared by reference with every [`CascadeEngine`]. Nothing
//! in a cascade run mutates shared state, so any number of runs may execute
//! concurrently.

pub mod bundle;
pub mod engine;
pub mod explain;
pub mod state;
pub mod trace;
pub mod tracing_setup;

pub use bundle::CascadeBundle;
pub use engine::CascadeEngine;
pub use explain::CascadeExplanation;
pub use state::CascadeState;
pub use trace::{CascadeTrace, StageRecord};
