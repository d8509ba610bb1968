use mertens_arith::{accumulate, mobius_sequence, reference_curve, Mobius};
use mertens_core::errors::MertensError;
use mertens_core::provenance::{RunProvenance, SchemaVersion};
use mertens_core::stable_hash_string;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SeriesConfig;
use crate::stats::SeriesStats;

/// Schema of [`SeriesReport`] payloads.
pub const SERIES_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// One row of the series: μ, M and the ±√n envelope at `n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Argument n.
    pub n: u64,
    /// μ(n).
    pub mobius: Mobius,
    /// M(n).
    pub mertens: i64,
    /// +√n.
    pub sqrt_pos: f64,
    /// -√n.
    pub sqrt_neg: f64,
}

/// Column-oriented view handed to an external plotter. All vectors have
/// length N and share the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    /// 1..=N.
    pub n: Vec<u64>,
    /// M(1..=N).
    pub mertens: Vec<i64>,
    /// +√n for 1..=N.
    pub sqrt_pos: Vec<f64>,
    /// -√n for 1..=N.
    pub sqrt_neg: Vec<f64>,
}

/// Deterministic record of one series run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReport {
    /// Content addressed hash of the config, points, stats and provenance.
    pub analysis_hash: String,
    /// Configuration the run was produced from.
    pub config: SeriesConfig,
    /// Per-n rows, ordered by n.
    pub points: Vec<SeriesPoint>,
    /// Summary statistics.
    pub stats: SeriesStats,
    /// Schema, config hash, method and tool versions.
    pub provenance: RunProvenance,
}

impl SeriesReport {
    /// Splits the rows into aligned columns for plotting.
    pub fn plot_series(&self) -> PlotSeries {
        let mut plot = PlotSeries {
            n: Vec::with_capacity(self.points.len()),
            mertens: Vec::with_capacity(self.points.len()),
            sqrt_pos: Vec::with_capacity(self.points.len()),
            sqrt_neg: Vec::with_capacity(self.points.len()),
        };
        for point in &self.points {
            plot.n.push(point.n);
            plot.mertens.push(point.mertens);
            plot.sqrt_pos.push(point.sqrt_pos);
            plot.sqrt_neg.push(point.sqrt_neg);
        }
        plot
    }
}

/// Evaluates μ and M over `[1, config.upper_bound]` and assembles a report.
pub fn build_series(config: &SeriesConfig) -> Result<SeriesReport, MertensError> {
    config.validate()?;
    debug!(
        upper_bound = config.upper_bound,
        method = config.method.as_str(),
        "building mertens series"
    );

    let mobius = mobius_sequence(config.upper_bound, config.method)?;
    let mertens = accumulate(&mobius);
    let envelope = reference_curve(config.upper_bound)?;
    let stats = SeriesStats::from_sequences(&mobius, &mertens)?;

    let points = mobius
        .iter()
        .zip(&mertens)
        .zip(&envelope)
        .enumerate()
        .map(|(idx, ((&mu, &total), &(pos, neg)))| SeriesPoint {
            n: idx as u64 + 1,
            mobius: mu,
            mertens: total,
            sqrt_pos: pos,
            sqrt_neg: neg,
        })
        .collect();

    let provenance = RunProvenance {
        schema_version: SERIES_SCHEMA,
        config_hash: stable_hash_string(config)?,
        method: config.method.as_str().to_string(),
        tool_versions: Default::default(),
    }
    .with_tool("mertens-exp", env!("CARGO_PKG_VERSION"));

    let mut report = SeriesReport {
        analysis_hash: String::new(),
        config: config.clone(),
        points,
        stats,
        provenance,
    };
    report.analysis_hash = stable_hash_string(&(
        &report.config,
        &report.points,
        &report.stats,
        &report.provenance,
    ))?;

    debug!(
        final_value = report.stats.final_value,
        within_sqrt_bound = report.stats.within_sqrt_bound,
        hash = %report.analysis_hash,
        "series complete"
    );
    Ok(report)
}
