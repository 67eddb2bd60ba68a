use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Text form of `recorded_at`, used by export, import and the CLI tables.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const PM25_RANGE: RangeInclusive<f64> = 0.0..=500.0;
pub const HARDNESS_RANGE: RangeInclusive<f64> = 0.0..=1000.0;
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=50.0;
pub const PH_RANGE: RangeInclusive<f64> = 0.0..=14.0;

/// One timestamped environmental observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub recorded_at: NaiveDateTime, // second precision
    pub location: String,
    pub pm25: f64,        // µg/m³
    pub hardness: f64,    // mg/L as CaCO₃
    pub temperature: f64, // °C
    pub ph: f64,
}

impl Reading {
    /// Build a reading without any domain check.
    /// Used for the built-in samples, which are known to be in range.
    pub fn new(
        recorded_at: NaiveDateTime,
        location: impl Into<String>,
        pm25: f64,
        hardness: f64,
        temperature: f64,
        ph: f64,
    ) -> Self {
        Self {
            recorded_at: truncate_to_second(recorded_at),
            location: location.into(),
            pm25,
            hardness,
            temperature,
            ph,
        }
    }

    /// Input boundary: every value must be finite and inside its domain,
    /// and the location must not be blank.
    pub fn validated(
        recorded_at: NaiveDateTime,
        location: &str,
        pm25: f64,
        hardness: f64,
        temperature: f64,
        ph: f64,
    ) -> AppResult<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(AppError::InvalidReading(
                "location must not be empty".to_string(),
            ));
        }

        check_range("pm25", pm25, &PM25_RANGE)?;
        check_range("hardness", hardness, &HARDNESS_RANGE)?;
        check_range("temperature", temperature, &TEMPERATURE_RANGE)?;
        check_range("ph", ph, &PH_RANGE)?;

        Ok(Self::new(
            recorded_at,
            location,
            pm25,
            hardness,
            temperature,
            ph,
        ))
    }

    pub fn timestamp_str(&self) -> String {
        self.recorded_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

fn check_range(field: &str, value: f64, range: &RangeInclusive<f64>) -> AppResult<()> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(AppError::InvalidReading(format!(
            "{field} = {value} is outside the allowed range [{}, {}]",
            range.start(),
            range.end()
        )))
    }
}

/// Drop the sub-second part of a timestamp.
pub fn truncate_to_second(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}

/// Parse a `recorded_at` value in [`TIMESTAMP_FORMAT`].
/// The minute-precision form written by older dashboards is accepted too.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}
