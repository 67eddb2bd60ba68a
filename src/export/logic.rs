// src/export/logic.rs

use crate::core::series::ReadingSeries;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use log::debug;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// High-level export of a session's series to a file.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole series.
    ///
    /// - `format`: csv | json
    /// - `file`: output path (`~/` is expanded)
    /// - `force`: overwrite without asking
    pub fn export(
        series: &ReadingSeries,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        if file.trim().is_empty() {
            return Err(AppError::Export("output file path is empty".to_string()));
        }
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        info(format!(
            "Exporting {} readings to {}: {}",
            series.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        let writer = BufWriter::new(File::create(&path)?);
        match format {
            ExportFormat::Csv => csv::write_series(writer, series)?,
            ExportFormat::Json => json::write_series(writer, series)?,
        }

        debug!("export {} → {}", format.as_str(), path.display());
        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(path)
    }
}
