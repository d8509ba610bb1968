//! Summary statistics of a Mertens series.

use mertens_arith::Mobius;
use mertens_core::errors::{ErrorInfo, MertensError};
use serde::{Deserialize, Serialize};

fn round_value(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}

/// How often each Möbius value occurs in the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MobiusCounts {
    /// Count of n with μ(n) = 1.
    pub plus_one: u64,
    /// Count of n with μ(n) = -1.
    pub minus_one: u64,
    /// Count of n with μ(n) = 0.
    pub zero: u64,
}

/// First argument at which an extreme value of M is attained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extremum {
    /// Argument n.
    pub n: u64,
    /// M(n).
    pub value: i64,
}

/// Largest |M(n)| / √n over 2 ≤ n ≤ N.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioPeak {
    /// Argument n.
    pub n: u64,
    /// |M(n)| / √n rounded to 1e-9.
    pub ratio: f64,
}

/// Aggregate description of M(1..N).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    /// N.
    pub upper_bound: u64,
    /// M(N).
    pub final_value: i64,
    /// Distribution of μ over the range.
    pub mobius_counts: MobiusCounts,
    /// Number of n with M(n) = 0.
    pub zero_crossings: u64,
    /// Largest M(n), earliest n on ties.
    pub max: Extremum,
    /// Smallest M(n), earliest n on ties.
    pub min: Extremum,
    /// Peak of the normalised series; `None` when N = 1.
    pub max_ratio: Option<RatioPeak>,
    /// Whether |M(n)| < √n held for every 1 < n ≤ N.
    pub within_sqrt_bound: bool,
}

impl SeriesStats {
    /// Summarises aligned μ(1..N) and M(1..N) sequences.
    pub fn from_sequences(mobius: &[Mobius], mertens: &[i64]) -> Result<Self, MertensError> {
        if mobius.is_empty() || mobius.len() != mertens.len() {
            return Err(MertensError::Config(
                ErrorInfo::new("misaligned-series", "series must be non-empty and aligned")
                    .with_context("mobius_len", mobius.len().to_string())
                    .with_context("mertens_len", mertens.len().to_string()),
            ));
        }

        let mut counts = MobiusCounts::default();
        for value in mobius {
            match value {
                Mobius::One => counts.plus_one += 1,
                Mobius::MinusOne => counts.minus_one += 1,
                Mobius::Zero => counts.zero += 1,
            }
        }

        let mut max = Extremum { n: 1, value: mertens[0] };
        let mut min = max;
        let mut zero_crossings = 0u64;
        let mut max_ratio: Option<RatioPeak> = None;
        let mut within_sqrt_bound = true;

        for (idx, &value) in mertens.iter().enumerate() {
            let n = idx as u64 + 1;
            if value == 0 {
                zero_crossings += 1;
            }
            if value > max.value {
                max = Extremum { n, value };
            }
            if value < min.value {
                min = Extremum { n, value };
            }
            if n < 2 {
                continue;
            }
            let magnitude = value.unsigned_abs();
            // |M(n)| < sqrt(n)  <=>  M(n)^2 < n, exact in integers
            if magnitude.saturating_mul(magnitude) >= n {
                within_sqrt_bound = false;
            }
            let ratio = round_value(magnitude as f64 / (n as f64).sqrt());
            if max_ratio.map_or(true, |peak| ratio > peak.ratio) {
                max_ratio = Some(RatioPeak { n, ratio });
            }
        }

        Ok(Self {
            upper_bound: mertens.len() as u64,
            final_value: mertens[mertens.len() - 1],
            mobius_counts: counts,
            zero_crossings,
            max,
            min,
            max_ratio,
            within_sqrt_bound,
        })
    }
}
