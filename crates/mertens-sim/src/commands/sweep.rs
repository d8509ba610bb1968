use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use mertens_exp::{sweep_bounds, write_sweep};

use super::{parse_method, positive, print_json};

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Comma separated upper bounds, e.g. `10,100,1000`.
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub bounds: Vec<i64>,
    /// Evaluation method: "trial-division" (default) or "sieve".
    #[arg(long)]
    pub method: Option<String>,
    /// Write sweep.json here instead of printing it.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &SweepArgs) -> Result<(), Box<dyn Error>> {
    let bounds = args
        .bounds
        .iter()
        .map(|&bound| positive("upper_bound", bound))
        .collect::<Result<Vec<_>, _>>()?;
    let method = parse_method(args.method.as_deref())?.unwrap_or_default();
    let report = sweep_bounds(&bounds, method)?;

    match &args.out {
        Some(dir) => {
            write_sweep(&report, dir)?;
            Ok(())
        }
        None => print_json(&report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mertens_core::MertensError;

    fn args(bounds: Vec<i64>) -> SweepArgs {
        SweepArgs {
            bounds,
            method: None,
            out: None,
        }
    }

    #[test]
    fn method_defaults_like_series() {
        let args = args(vec![10]);
        assert_eq!(
            parse_method(args.method.as_deref()).unwrap().unwrap_or_default(),
            mertens_arith::Method::default()
        );
    }

    #[test]
    fn unwritable_out_dir_is_a_structured_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut args = args(vec![10]);
        args.out = Some(blocker.join("sweep"));
        let err = run(&args).unwrap_err();
        let err = err.downcast_ref::<MertensError>().unwrap();
        assert!(matches!(err, MertensError::Io(_)));
        assert_eq!(err.info().code, "create-dir");
    }

    #[test]
    fn oversized_bound_is_an_error() {
        let err = run(&args(vec![10, 1 << 62])).unwrap_err();
        let err = err.downcast_ref::<MertensError>().unwrap();
        assert_eq!(err.info().code, "range-too-large");
    }
}
