//! Current status derived from the latest reading of a series.

use crate::core::classify::{classify_hardness, classify_pm25, delta};
use crate::core::series::ReadingSeries;
use crate::errors::AppResult;
use crate::models::reading::Reading;
use crate::models::status::{HardnessStatus, Pm25Status};

/// Everything the rendering layer needs for the "latest situation" block.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub latest: Reading,
    pub pm25: Pm25Status,
    pub hardness: HardnessStatus,
    /// `None` when the series holds a single reading.
    pub pm25_delta: Option<f64>,
}

impl StatusReport {
    pub fn from_series(series: &ReadingSeries) -> AppResult<Self> {
        let latest = series.latest()?.clone();
        let pm25_delta = series
            .previous()
            .ok()
            .map(|prev| delta(latest.pm25, prev.pm25));

        Ok(Self {
            pm25: classify_pm25(latest.pm25),
            hardness: classify_hardness(latest.hardness),
            pm25_delta,
            latest,
        })
    }
}
