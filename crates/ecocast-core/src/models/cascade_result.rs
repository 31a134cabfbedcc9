use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Terminal output of one cascade run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CascadeResult {
    pub energy_kwh: f64,
    pub water_liters: f64,
    pub co2_kg: f64,
    pub campus_name: String,
    pub sector: String,
}
