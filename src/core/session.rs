//! One interactive session: owns the reading series for its whole lifetime.
//!
//! The series starts empty and is seeded with the built-in samples the first
//! time anything reads it, unless it was restored from an exported CSV.

use crate::core::activity::ActivityLog;
use crate::core::series::ReadingSeries;
use crate::core::status::StatusReport;
use crate::errors::AppResult;
use crate::export::csv::read_series;
use crate::models::reading::Reading;
use chrono::{Local, NaiveDateTime};
use log::info;
use std::path::Path;

#[derive(Debug, Default)]
pub struct Session {
    series: ReadingSeries,
    activity: ActivityLog,
    location: String,
}

impl Session {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            series: ReadingSeries::new(),
            activity: ActivityLog::default(),
            location: location.into(),
        }
    }

    /// Start a session from a CSV previously written by `export`.
    pub fn import(path: &Path, location: impl Into<String>) -> AppResult<Self> {
        let file = std::fs::File::open(path)?;
        let series = read_series(file)?;

        let mut session = Self::new(location);
        session.activity.record(
            "import",
            &path.display().to_string(),
            format!("{} readings restored", series.len()),
        );
        info!("imported {} readings from {}", series.len(), path.display());
        session.series = series;
        Ok(session)
    }

    /// Default location for new readings and model prompts.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn ensure_seeded(&mut self) {
        self.ensure_seeded_at(Local::now().naive_local());
    }

    pub fn ensure_seeded_at(&mut self, now: NaiveDateTime) {
        if self.series.is_empty() {
            self.series.seed_if_empty_at(now, &self.location);
            self.activity.record(
                "seed",
                &self.location,
                format!("{} sample readings", self.series.len()),
            );
        }
    }

    /// The series, seeded on first access.
    pub fn series(&mut self) -> &ReadingSeries {
        self.ensure_seeded();
        &self.series
    }

    /// Append a validated reading and return the refreshed status.
    pub fn add(&mut self, reading: Reading) -> AppResult<StatusReport> {
        self.ensure_seeded();

        let message = format!(
            "pm25={} hardness={} temp={} ph={}",
            reading.pm25, reading.hardness, reading.temperature, reading.ph
        );
        let target = reading.location.clone();
        self.series.append(reading);
        self.activity.record("add", &target, message);

        StatusReport::from_series(&self.series)
    }

    pub fn status(&mut self) -> AppResult<StatusReport> {
        self.ensure_seeded();
        StatusReport::from_series(&self.series)
    }

    pub fn latest(&mut self) -> AppResult<Reading> {
        self.ensure_seeded();
        self.series.latest().cloned()
    }

    pub fn record(&mut self, operation: &str, target: &str, message: impl Into<String>) {
        self.activity.record(operation, target, message);
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }
}
