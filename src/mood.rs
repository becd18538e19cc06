//! Mood classification and display scaling
//!
//! Check-ins record mood on a raw 1-100 scale. Days are labeled from that
//! raw scale; averages shown to users are scaled down by 10 to the 1-10
//! display scale and rounded to one decimal.

use crate::types::DayLabel;

/// Lowest raw mood counting as an excellent day
pub const EXCELLENT_MIN: f64 = 70.0;
/// Lowest raw mood counting as a correct day
pub const CORRECT_MIN: f64 = 40.0;

/// Label a day from its raw mood value, if any.
pub fn classify(mood_value: Option<f64>) -> DayLabel {
    match mood_value {
        None => DayLabel::Missing,
        Some(value) if value >= EXCELLENT_MIN => DayLabel::Excellent,
        Some(value) if value >= CORRECT_MIN => DayLabel::Correct,
        Some(_) => DayLabel::Difficult,
    }
}

/// Round to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Average of raw mood values on the 1-10 display scale, one decimal.
/// `None` when there is nothing to average.
pub fn display_average(total: f64, count: u32) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(round_to_tenth(total / f64::from(count) / 10.0))
}
