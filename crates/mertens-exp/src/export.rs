//! Writes series artefacts for an external plotter.

use std::fs;
use std::path::{Path, PathBuf};

use mertens_core::errors::{ErrorInfo, MertensError};
use mertens_core::to_canonical_json_bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::report::SeriesReport;
use crate::sweep::SweepReport;

/// File name of the canonical JSON report.
pub const SERIES_JSON: &str = "series.json";
/// File name of the per-n CSV table.
pub const SERIES_CSV: &str = "series.csv";
/// File name of a canonical JSON sweep report.
pub const SWEEP_JSON: &str = "sweep.json";

fn io_error(code: &str, err: impl ToString, path: &Path) -> MertensError {
    MertensError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

fn csv_error(err: impl ToString, path: &Path) -> MertensError {
    MertensError::Serde(
        ErrorInfo::new("csv-write", err.to_string())
            .with_context("path", path.display().to_string()),
    )
}

/// Paths written by [`export_series`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportManifest {
    /// Canonical JSON report, when enabled.
    pub json: Option<PathBuf>,
    /// CSV table, when enabled.
    pub csv: Option<PathBuf>,
    /// Hash of the exported report.
    pub analysis_hash: String,
}

/// Writes the full report as canonical JSON.
pub fn write_json(report: &SeriesReport, path: &Path) -> Result<(), MertensError> {
    let bytes = to_canonical_json_bytes(report)?;
    fs::write(path, bytes).map_err(|err| io_error("json-export", err, path))
}

/// Writes one CSV row per n: `n,mobius,mertens,sqrt_pos,sqrt_neg`.
pub fn write_csv(report: &SeriesReport, path: &Path) -> Result<(), MertensError> {
    let mut wtr = csv::Writer::from_path(path).map_err(|err| csv_error(err, path))?;
    for point in &report.points {
        wtr.serialize(point).map_err(|err| csv_error(err, path))?;
    }
    wtr.flush().map_err(|err| io_error("csv-flush", err, path))
}

/// Writes the artefacts selected by `report.config.export` into `out_dir`.
pub fn export_series(report: &SeriesReport, out_dir: &Path) -> Result<ExportManifest, MertensError> {
    fs::create_dir_all(out_dir).map_err(|err| io_error("create-dir", err, out_dir))?;
    let mut manifest = ExportManifest {
        analysis_hash: report.analysis_hash.clone(),
        ..ExportManifest::default()
    };
    if report.config.export.json {
        let path = out_dir.join(SERIES_JSON);
        write_json(report, &path)?;
        info!(path = %path.display(), "wrote series json");
        manifest.json = Some(path);
    }
    if report.config.export.csv {
        let path = out_dir.join(SERIES_CSV);
        write_csv(report, &path)?;
        info!(path = %path.display(), rows = report.points.len(), "wrote series csv");
        manifest.csv = Some(path);
    }
    Ok(manifest)
}

/// Writes `sweep.json` into `out_dir`, returning its path.
pub fn write_sweep(report: &SweepReport, out_dir: &Path) -> Result<PathBuf, MertensError> {
    fs::create_dir_all(out_dir).map_err(|err| io_error("create-dir", err, out_dir))?;
    let path = out_dir.join(SWEEP_JSON);
    let bytes = to_canonical_json_bytes(report)?;
    fs::write(&path, bytes).map_err(|err| io_error("json-export", err, &path))?;
    info!(path = %path.display(), rows = report.rows.len(), "wrote sweep json");
    Ok(path)
}
