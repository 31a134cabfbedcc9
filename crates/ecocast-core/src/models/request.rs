use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw parameters of a single cascade invocation.
///
/// Campus and sector stay in their wire form; resolving them against the
/// static tables is the Feature Builder's job, so a bad value surfaces as a
/// `ConfigurationError` from the cascade. Numeric fields are never range
/// checked here: out-of-range inputs are extrapolated by the models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionRequest {
    campus_id: u8,
    sector: String,
    hour: u32,
    day_of_week: u32,
    temperature_c: f64,
    occupancy_pct: f64,
    #[serde(default)]
    is_holiday: bool,
    #[serde(default)]
    is_midterm: bool,
    #[serde(default)]
    is_final: bool,
}

impl PredictionRequest {
    /// Build a request with all calendar flags cleared.
    pub fn new(
        campus_id: u8,
        sector: impl Into<String>,
        hour: u32,
        day_of_week: u32,
        temperature_c: f64,
        occupancy_pct: f64,
    ) -> Self {
        Self {
            campus_id,
            sector: sector.into(),
            hour,
            day_of_week,
            temperature_c,
            occupancy_pct,
            is_holiday: false,
            is_midterm: false,
            is_final: false,
        }
    }

    /// Build a request from a local timestamp; day-of-week counts from Monday = 0.
    pub fn at(
        campus_id: u8,
        sector: impl Into<String>,
        when: NaiveDateTime,
        temperature_c: f64,
        occupancy_pct: f64,
    ) -> Self {
        Self::new(
            campus_id,
            sector,
            when.hour(),
            when.weekday().num_days_from_monday(),
            temperature_c,
            occupancy_pct,
        )
    }

    pub fn with_holiday(mut self, is_holiday: bool) -> Self {
        self.is_holiday = is_holiday;
        self
    }

    pub fn with_midterm(mut self, is_midterm: bool) -> Self {
        self.is_midterm = is_midterm;
        self
    }

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn campus_id(&self) -> u8 {
        self.campus_id
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn day_of_week(&self) -> u32 {
        self.day_of_week
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn occupancy_pct(&self) -> f64 {
        self.occupancy_pct
    }

    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    pub fn is_midterm(&self) -> bool {
        self.is_midterm
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }
}
