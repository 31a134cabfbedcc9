//! Cyclical encodings and time-bucket indicators.

use std::f64::consts::TAU;

use ecocast_core::constants::{
    DAYS_PER_WEEK, FIRST_WEEKEND_DAY, HOURS_PER_DAY, MEAL_HOURS, NIGHT_END_HOUR,
    NIGHT_START_HOUR, PEAK_HOUR_WINDOWS,
};

/// `(sin, cos)` of `value` on a cycle of length `period`.
pub fn cyclical(value: f64, period: f64) -> (f64, f64) {
    let angle = TAU * value / period;
    (angle.sin(), angle.cos())
}

pub fn hour_cyclical(hour: u32) -> (f64, f64) {
    cyclical(f64::from(hour), HOURS_PER_DAY)
}

pub fn day_cyclical(day_of_week: u32) -> (f64, f64) {
    cyclical(f64::from(day_of_week), DAYS_PER_WEEK)
}

/// Hour falls in `[8,12)` or `[14,18)`.
pub fn is_peak_hour(hour: u32) -> bool {
    PEAK_HOUR_WINDOWS
        .iter()
        .any(|&(start, end)| (start..end).contains(&hour))
}

/// Saturday (5) or Sunday (6).
pub fn is_weekend(day_of_week: u32) -> bool {
    day_of_week == FIRST_WEEKEND_DAY || day_of_week == FIRST_WEEKEND_DAY + 1
}

/// Hour falls in `[22,24)` or `[0,6)`.
pub fn is_night(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

pub fn is_meal_hour(hour: u32) -> bool {
    MEAL_HOURS.contains(&hour)
}

/// Boolean as a model input.
pub fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_zero_is_top_of_cycle() {
        let (s, c) = hour_cyclical(0);
        assert!(s.abs() < 1e-12);
        assert!((c - 1.0).abs() < 1e-12);
    }

    #[test]
    fn hour_24_wraps_to_hour_zero() {
        let (s0, c0) = hour_cyclical(0);
        let (s24, c24) = hour_cyclical(24);
        assert!((s0 - s24).abs() < 1e-12);
        assert!((c0 - c24).abs() < 1e-12);
    }

    #[test]
    fn peak_windows_are_half_open() {
        assert!(!is_peak_hour(7));
        assert!(is_peak_hour(8));
        assert!(is_peak_hour(11));
        assert!(!is_peak_hour(12));
        assert!(!is_peak_hour(13));
        assert!(is_peak_hour(14));
        assert!(is_peak_hour(17));
        assert!(!is_peak_hour(18));
    }

    #[test]
    fn night_wraps_midnight() {
        assert!(is_night(22));
        assert!(is_night(23));
        assert!(is_night(0));
        assert!(is_night(5));
        assert!(!is_night(6));
        assert!(!is_night(21));
    }

    #[test]
    fn weekend_is_saturday_and_sunday() {
        let weekend: Vec<u32> = (0..7).filter(|&d| is_weekend(d)).collect();
        assert_eq!(weekend, vec![5, 6]);
    }

    #[test]
    fn meal_hours() {
        let meals: Vec<u32> = (0..24).filter(|&h| is_meal_hour(h)).collect();
        assert_eq!(meals, vec![7, 8, 12, 13, 18, 19]);
    }
}
