//! Threshold classification for the latest reading.
//!
//! All cutoffs use a strict greater-than: a value sitting exactly on a
//! threshold stays in the lower bucket (50 → Good, 75 → Moderate,
//! 150 → Soft, 300 → Moderately hard).

use crate::models::status::{HardnessStatus, Pm25Status};

/// PM2.5 above this is at least Moderate (Thai 24h standard).
pub const PM25_MODERATE_ABOVE: f64 = 50.0;
/// PM2.5 above this is Unhealthy.
pub const PM25_UNHEALTHY_ABOVE: f64 = 75.0;

/// Hardness above this is at least moderately hard.
pub const HARDNESS_MODERATE_ABOVE: f64 = 150.0;
/// Hardness above this is very hard.
pub const HARDNESS_VERY_HARD_ABOVE: f64 = 300.0;

pub fn classify_pm25(value: f64) -> Pm25Status {
    if value > PM25_UNHEALTHY_ABOVE {
        Pm25Status::Unhealthy
    } else if value > PM25_MODERATE_ABOVE {
        Pm25Status::Moderate
    } else {
        Pm25Status::Good
    }
}

pub fn classify_hardness(value: f64) -> HardnessStatus {
    if value > HARDNESS_VERY_HARD_ABOVE {
        HardnessStatus::VeryHard
    } else if value > HARDNESS_MODERATE_ABOVE {
        HardnessStatus::ModeratelyHard
    } else {
        HardnessStatus::Soft
    }
}

/// Signed change between two values, for display only.
pub fn delta(current: f64, previous: f64) -> f64 {
    current - previous
}
