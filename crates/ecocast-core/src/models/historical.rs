use serde::{Deserialize, Serialize};

/// Historical aggregates for one (sector, campus) pair, used as model features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalAggregates {
    /// Mean water draw of the sector across all campuses (liters).
    pub water_sector_mean: f64,
    /// Standard deviation of the sector's water draw (liters).
    pub water_sector_std: f64,
    /// Mean water draw of the campus across all sectors (liters).
    pub water_campus_mean: f64,
    /// Mean CO₂ emissions of the sector (kg).
    pub co2_sector_mean: f64,
}

/// Additive decomposition of one raw model output:
/// `base_value + contributions.sum() == raw output`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    pub base_value: f64,
    /// One entry per input feature, in schema order.
    pub contributions: Vec<f64>,
}

impl Attribution {
    /// Reconstructed model output.
    pub fn total(&self) -> f64 {
        self.base_value + self.contributions.iter().sum::<f64>()
    }
}
