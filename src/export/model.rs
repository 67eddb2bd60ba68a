// src/export/model.rs

use crate::errors::AppResult;
use crate::models::reading::{Reading, parse_timestamp};
use serde::{Deserialize, Serialize};

/// Flat record used by CSV / JSON export and by CSV import.
/// Field order is the column order of the CSV file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReadingRecord {
    pub recorded_at: String,
    pub location: String,
    pub pm25: f64,
    pub hardness: f64,
    pub temperature: f64,
    pub ph: f64,
}

/// CSV header row.
pub(crate) const HEADERS: [&str; 6] = [
    "recorded_at",
    "location",
    "pm25",
    "hardness",
    "temperature",
    "ph",
];

impl From<&Reading> for ReadingRecord {
    fn from(r: &Reading) -> Self {
        Self {
            recorded_at: r.timestamp_str(),
            location: r.location.clone(),
            pm25: r.pm25,
            hardness: r.hardness,
            temperature: r.temperature,
            ph: r.ph,
        }
    }
}

impl ReadingRecord {
    /// Back to a domain reading; values go through the same checks as user input.
    pub fn into_reading(self) -> AppResult<Reading> {
        let ts = parse_timestamp(&self.recorded_at)?;
        Reading::validated(
            ts,
            &self.location,
            self.pm25,
            self.hardness,
            self.temperature,
            self.ph,
        )
    }
}

pub(crate) fn series_to_records<'a>(
    readings: impl IntoIterator<Item = &'a Reading>,
) -> Vec<ReadingRecord> {
    readings.into_iter().map(ReadingRecord::from).collect()
}
