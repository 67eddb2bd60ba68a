// src/export/csv.rs

use crate::core::series::ReadingSeries;
use crate::errors::{AppError, AppResult};
use crate::export::model::{HEADERS, ReadingRecord, series_to_records};
use std::io::{Read, Write};

/// Write the series as CSV (header + one row per reading, oldest first).
pub fn write_series<W: Write>(writer: W, series: &ReadingSeries) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    // header is written by serde from the field names of ReadingRecord
    for rec in series_to_records(series) {
        wtr.serialize(rec)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render the series to a CSV string.
pub fn series_to_csv(series: &ReadingSeries) -> AppResult<String> {
    let mut buf = Vec::new();
    write_series(&mut buf, series)?;
    String::from_utf8(buf).map_err(|e| AppError::Export(format!("CSV is not UTF-8: {e}")))
}

/// Parse a CSV written by [`write_series`] back into a series.
pub fn read_series<R: Read>(reader: R) -> AppResult<ReadingSeries> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let found: Vec<&str> = headers.iter().map(str::trim).collect();
    if found != HEADERS {
        return Err(AppError::Import(format!(
            "unexpected header '{}', expected '{}'",
            found.join(","),
            HEADERS.join(",")
        )));
    }

    let mut readings = Vec::new();
    for result in rdr.deserialize::<ReadingRecord>() {
        let rec = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            AppError::Import(format!("line {line}: {e}"))
        })?;
        // +2: header row, 1-based lines
        let line = readings.len() + 2;
        let reading = rec
            .into_reading()
            .map_err(|e| AppError::Import(format!("line {line}: {e}")))?;
        readings.push(reading);
    }

    if readings.is_empty() {
        return Err(AppError::Import("no readings found".to_string()));
    }

    Ok(ReadingSeries::from_readings(readings))
}
