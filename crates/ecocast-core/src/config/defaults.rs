// Single source of truth for all default values.

// --- Artifacts ---
pub const DEFAULT_ENERGY_MODEL: &str = "models/energy_model.json";
pub const DEFAULT_WATER_MODEL: &str = "models/water_model.json";
pub const DEFAULT_CO2_MODEL: &str = "models/co2_model.json";
pub const DEFAULT_REFERENCE_STATS: &str = "models/reference_stats.json";

// --- Target transforms ---
pub const DEFAULT_TARGET_SCALE: f64 = 1.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
