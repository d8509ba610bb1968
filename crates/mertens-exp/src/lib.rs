//! Series experiments over the Mertens function.
//!
//! A [`SeriesConfig`] selects a range `[1, N]` and an evaluation method;
//! [`build_series`] produces a content-hashed [`SeriesReport`] carrying μ, M
//! and the ±√n envelope, and [`export_series`] writes it as JSON and CSV for
//! plotting elsewhere.

mod config;
mod export;
mod report;
mod stats;
mod sweep;

pub use config::{ExportConfig, SeriesConfig};
pub use export::{
    export_series, write_csv, write_json, write_sweep, ExportManifest, SERIES_CSV, SERIES_JSON,
    SWEEP_JSON,
};
pub use report::{build_series, PlotSeries, SeriesPoint, SeriesReport, SERIES_SCHEMA};
pub use stats::{Extremum, MobiusCounts, RatioPeak, SeriesStats};
pub use sweep::{sweep_bounds, SweepReport};

pub use mertens_core::{from_json_slice, to_canonical_json_bytes};
