mod reference_stats;
mod regressor;

pub use reference_stats::IReferenceStats;
pub use regressor::IRegressor;
