/// Hours in the daily cycle used for cyclical encoding.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Days in the weekly cycle used for cyclical encoding.
pub const DAYS_PER_WEEK: f64 = 7.0;

/// First day-of-week value counted as weekend (0 = Monday).
pub const FIRST_WEEKEND_DAY: u32 = 5;

/// Peak-hour windows, half-open `[start, end)`.
pub const PEAK_HOUR_WINDOWS: [(u32, u32); 2] = [(8, 12), (14, 18)];

/// Night begins at this hour and runs past midnight.
pub const NIGHT_START_HOUR: u32 = 22;

/// Night ends (exclusive) at this hour.
pub const NIGHT_END_HOUR: u32 = 6;

/// Hours at which cafeterias serve meals.
pub const MEAL_HOURS: [u32; 6] = [7, 8, 12, 13, 18, 19];

/// Temperature above which the high-temperature flag is raised (°C).
pub const HIGH_TEMPERATURE_C: f64 = 25.0;
