use mertens_arith::{accumulate, mobius_sequence, Method};
use mertens_core::errors::{ErrorInfo, MertensError};
use mertens_core::stable_hash_string;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::stats::SeriesStats;

/// Statistics for each requested bound, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Hash of the bounds, method and rows.
    pub sweep_hash: String,
    /// Evaluation method shared by every row.
    pub method: Method,
    /// One entry per bound.
    pub rows: Vec<SeriesStats>,
}

/// Summarises M over `[1, N]` for every `N` in `bounds`.
///
/// μ is evaluated once up to the largest bound and every row reads a prefix
/// of that sequence.
pub fn sweep_bounds(bounds: &[u64], method: Method) -> Result<SweepReport, MertensError> {
    if bounds.is_empty() {
        return Err(MertensError::Config(ErrorInfo::new(
            "empty-sweep",
            "at least one upper bound is required",
        )));
    }
    if let Some(&zero) = bounds.iter().find(|&&bound| bound == 0) {
        return Err(MertensError::invalid_input("upper_bound", zero));
    }
    let largest = bounds.iter().copied().max().unwrap_or(1);
    debug!(bounds = bounds.len(), largest, method = method.as_str(), "sweeping bounds");

    let mobius = mobius_sequence(largest, method)?;
    let mertens = accumulate(&mobius);
    let rows = bounds
        .iter()
        .map(|&bound| {
            let end = bound as usize;
            SeriesStats::from_sequences(&mobius[..end], &mertens[..end])
        })
        .collect::<Result<Vec<_>, _>>()?;

    let sweep_hash = stable_hash_string(&(bounds, method, &rows))?;
    Ok(SweepReport {
        sweep_hash,
        method,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_request_order() {
        let report = sweep_bounds(&[1000, 10, 100], Method::Sieve).unwrap();
        let finals: Vec<(u64, i64)> = report
            .rows
            .iter()
            .map(|row| (row.upper_bound, row.final_value))
            .collect();
        assert_eq!(finals, vec![(1000, 2), (10, -1), (100, 1)]);
    }

    #[test]
    fn empty_and_zero_bounds_fail() {
        assert!(matches!(
            sweep_bounds(&[], Method::Sieve),
            Err(MertensError::Config(_))
        ));
        assert!(matches!(
            sweep_bounds(&[5, 0], Method::Sieve),
            Err(MertensError::Input(_))
        ));
    }

    #[test]
    fn sieve_sweep_past_the_cap_fails_cleanly() {
        let err = sweep_bounds(&[10, 1 << 62], Method::Sieve).unwrap_err();
        assert!(matches!(err, MertensError::Input(_)));
        assert_eq!(err.info().code, "range-too-large");
    }
}
