// src/export/json.rs

use crate::core::series::ReadingSeries;
use crate::errors::AppResult;
use crate::export::model::series_to_records;
use std::io::Write;

/// Write the series as a pretty-printed JSON array of flat records.
pub fn write_series<W: Write>(mut writer: W, series: &ReadingSeries) -> AppResult<()> {
    let records = series_to_records(series);
    let json = serde_json::to_string_pretty(&records)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
