//! Append-only, in-memory reading store for one session.

use crate::core::samples;
use crate::errors::{AppError, AppResult};
use crate::models::reading::{Reading, truncate_to_second};
use chrono::{Duration, Local, NaiveDateTime};
use log::debug;

/// Ordered history of readings. Insertion order is chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingSeries {
    readings: Vec<Reading>,
}

impl ReadingSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a series from already ordered readings (e.g. a CSV import).
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    /// Seed with the built-in samples, ending at the current local time.
    pub fn seed_if_empty(&mut self) {
        self.seed_if_empty_at(Local::now().naive_local(), samples::DEFAULT_LOCATION);
    }

    /// Seed with the 24 built-in hourly samples, the last one at `now`.
    /// A non-empty series is left untouched.
    pub fn seed_if_empty_at(&mut self, now: NaiveDateTime, location: &str) {
        if !self.readings.is_empty() {
            return;
        }

        let now = truncate_to_second(now);
        let last = samples::SAMPLE_HOURS as i64 - 1;

        self.readings = (0..samples::SAMPLE_HOURS)
            .map(|i| {
                let hours_before = last - i as i64;
                Reading::new(
                    now - Duration::hours(hours_before),
                    location,
                    samples::PM25[i],
                    samples::HARDNESS[i],
                    samples::TEMPERATURE[i],
                    samples::PH[i],
                )
            })
            .collect();

        debug!(
            "seeded {} sample readings for '{}' ending at {}",
            self.readings.len(),
            location,
            now
        );
    }

    pub fn append(&mut self, reading: Reading) {
        debug!(
            "append reading at {} (pm25={}, hardness={})",
            reading.recorded_at, reading.pm25, reading.hardness
        );
        self.readings.push(reading);
    }

    pub fn latest(&self) -> AppResult<&Reading> {
        self.readings.last().ok_or(AppError::EmptySeries)
    }

    /// Second-to-last reading, used for the delta display.
    pub fn previous(&self) -> AppResult<&Reading> {
        let n = self.readings.len();
        if n < 2 {
            return Err(AppError::InsufficientHistory(n));
        }
        Ok(&self.readings[n - 2])
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    pub fn as_slice(&self) -> &[Reading] {
        &self.readings
    }
}

impl<'a> IntoIterator for &'a ReadingSeries {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}
