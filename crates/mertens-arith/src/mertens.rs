//! Summatory Möbius (Mertens) function and range sequences.

use mertens_core::errors::{ErrorInfo, MertensError};
use serde::{Deserialize, Serialize};

use crate::mobius::{mobius, Mobius};
use crate::sieve::{range_too_large, SpfSieve};

/// Largest `N` accepted by the range builders ([`mobius_sequence`],
/// [`mertens_sequence`], [`reference_curve`]).
pub const MAX_UPPER_BOUND: u64 = 1 << 32;

fn check_upper(upper: u64) -> Result<(), MertensError> {
    if upper == 0 {
        return Err(MertensError::invalid_input("upper_bound", upper));
    }
    if upper > MAX_UPPER_BOUND {
        return Err(MertensError::Input(
            ErrorInfo::new("range-too-large", "upper_bound exceeds the supported range")
                .with_context("upper_bound", upper.to_string())
                .with_hint(format!("upper_bound must not exceed {MAX_UPPER_BOUND}")),
        ));
    }
    Ok(())
}

/// Strategy used to evaluate μ over a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Factor every integer independently by trial division.
    #[default]
    TrialDivision,
    /// Read μ from a smallest-prime-factor sieve built once for the range.
    Sieve,
}

impl Method {
    /// Stable label used in provenance records and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::TrialDivision => "trial-division",
            Method::Sieve => "sieve",
        }
    }
}

impl std::str::FromStr for Method {
    type Err = MertensError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "trial-division" | "trial" => Ok(Method::TrialDivision),
            "sieve" => Ok(Method::Sieve),
            other => Err(MertensError::Config(
                ErrorInfo::new("unknown-method", format!("unknown method '{other}'"))
                    .with_hint("expected 'trial-division' or 'sieve'"),
            )),
        }
    }
}

/// μ(1..=upper), index `k` holding μ(k + 1).
pub fn mobius_sequence(upper: u64, method: Method) -> Result<Vec<Mobius>, MertensError> {
    check_upper(upper)?;
    match method {
        Method::TrialDivision => (1..=upper).map(mobius).collect(),
        Method::Sieve => Ok(SpfSieve::new(upper)?.mobius_values().to_vec()),
    }
}

/// Running sums of `values`, so `out[k] = values[0] + ... + values[k]`.
pub fn accumulate(values: &[Mobius]) -> Vec<i64> {
    values
        .iter()
        .scan(0i64, |total, value| {
            *total += value.as_i64();
            Some(*total)
        })
        .collect()
}

/// M(1..=upper) in a single forward pass, index `k` holding M(k + 1).
pub fn mertens_sequence(upper: u64, method: Method) -> Result<Vec<i64>, MertensError> {
    Ok(accumulate(&mobius_sequence(upper, method)?))
}

/// M(n) = μ(1) + μ(2) + ... + μ(n).
pub fn mertens(n: u64) -> Result<i64, MertensError> {
    if n == 0 {
        return Err(MertensError::invalid_input("n", n));
    }
    let mut total = 0i64;
    for k in 1..=n {
        total += mobius(k)?.as_i64();
    }
    Ok(total)
}

/// The envelope `(+√n, -√n)` for n in 1..=upper, aligned with
/// [`mertens_sequence`].
pub fn reference_curve(upper: u64) -> Result<Vec<(f64, f64)>, MertensError> {
    check_upper(upper)?;
    let len = usize::try_from(upper).map_err(|_| range_too_large(upper))?;
    let mut curve = Vec::new();
    curve
        .try_reserve_exact(len)
        .map_err(|_| range_too_large(upper))?;
    curve.extend((1..=upper).map(|n| {
        let root = (n as f64).sqrt();
        (root, -root)
    }));
    Ok(curve)
}
