use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use mertens_exp::{build_series, export_series, SeriesConfig};
use tracing::info;

use super::{parse_method, positive, print_json};

#[derive(Args, Debug)]
pub struct SeriesArgs {
    /// YAML or JSON configuration; flags below override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Upper bound N of the range [1, N].
    #[arg(long, allow_hyphen_values = true)]
    pub upper_bound: Option<i64>,
    /// Evaluation method: "trial-division" or "sieve".
    #[arg(long)]
    pub method: Option<String>,
    /// Output directory for series.json and series.csv.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn resolve_config(args: &SeriesArgs) -> Result<SeriesConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SeriesConfig::read(path)?,
        None => SeriesConfig::default(),
    };
    if let Some(upper) = args.upper_bound {
        config.upper_bound = positive("upper_bound", upper)?;
    }
    if let Some(method) = parse_method(args.method.as_deref())? {
        config.method = method;
    }
    config.validate()?;
    Ok(config)
}

pub fn run(args: &SeriesArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    let report = build_series(&config)?;
    info!(
        upper_bound = report.stats.upper_bound,
        final_value = report.stats.final_value,
        within_sqrt_bound = report.stats.within_sqrt_bound,
        "series computed"
    );
    let manifest = export_series(&report, &args.out)?;
    print_json(&manifest)
}
