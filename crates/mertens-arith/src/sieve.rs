//! Smallest-prime-factor sieve over `[1, limit]`.
//!
//! A linear sieve visits every composite exactly once through its smallest
//! prime factor, filling both the factor table and the Möbius table in the
//! same pass. Lookups for any `n <= limit` are then divisions by table
//! entries instead of trial division.

use mertens_core::errors::{ErrorInfo, MertensError};

use crate::mobius::Mobius;

fn range_error(n: u64, limit: u64) -> MertensError {
    MertensError::Input(
        ErrorInfo::new("out-of-sieve-range", "value exceeds the sieve limit")
            .with_context("n", n.to_string())
            .with_context("limit", limit.to_string()),
    )
}

pub(crate) fn range_too_large(limit: u64) -> MertensError {
    MertensError::Input(
        ErrorInfo::new("range-too-large", "range does not fit in memory")
            .with_context("limit", limit.to_string()),
    )
}

/// Allocates `size` copies of `fill`, failing instead of aborting when the
/// table cannot be reserved.
pub(crate) fn try_table<T: Clone>(
    size: usize,
    fill: T,
    limit: u64,
) -> Result<Vec<T>, MertensError> {
    size.checked_mul(std::mem::size_of::<T>())
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or_else(|| range_too_large(limit))?;
    let mut table = Vec::new();
    table
        .try_reserve_exact(size)
        .map_err(|_| range_too_large(limit))?;
    table.resize(size, fill);
    Ok(table)
}

/// Precomputed smallest prime factors and Möbius values up to a limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpfSieve {
    limit: u64,
    spf: Vec<u64>,
    mu: Vec<Mobius>,
    primes: Vec<u64>,
}

impl SpfSieve {
    /// Builds the sieve for `[1, limit]`. `limit == 0` is rejected.
    pub fn new(limit: u64) -> Result<Self, MertensError> {
        if limit == 0 {
            return Err(MertensError::invalid_input("limit", limit));
        }
        let size = usize::try_from(limit)
            .ok()
            .and_then(|limit| limit.checked_add(1))
            .ok_or_else(|| range_too_large(limit))?;

        let mut spf = try_table(size, 0u64, limit)?;
        let mut mu = try_table(size, Mobius::Zero, limit)?;
        let mut primes: Vec<u64> = Vec::new();
        spf[1] = 1;
        mu[1] = Mobius::One;

        for i in 2..size {
            if spf[i] == 0 {
                spf[i] = i as u64;
                mu[i] = Mobius::MinusOne;
                primes.push(i as u64);
            }
            let smallest = spf[i];
            for &prime in &primes {
                if prime > smallest {
                    break;
                }
                let Some(multiple) = i.checked_mul(prime as usize).filter(|m| *m < size) else {
                    break;
                };
                spf[multiple] = prime;
                if prime == smallest {
                    // p^2 divides i * p
                    mu[multiple] = Mobius::Zero;
                    break;
                }
                mu[multiple] = mu[i].negate();
            }
        }

        Ok(Self {
            limit,
            spf,
            mu,
            primes,
        })
    }

    /// Largest integer covered by the sieve.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// All primes up to the limit, ascending.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    fn index(&self, n: u64) -> Result<usize, MertensError> {
        if n == 0 {
            return Err(MertensError::invalid_input("n", n));
        }
        if n > self.limit {
            return Err(range_error(n, self.limit));
        }
        Ok(n as usize)
    }

    /// Smallest prime dividing `n`, or `None` for `n == 1`.
    pub fn smallest_prime_factor(&self, n: u64) -> Result<Option<u64>, MertensError> {
        let idx = self.index(n)?;
        Ok((n > 1).then(|| self.spf[idx]))
    }

    /// Factorization of `n` by repeated table lookup; agrees with
    /// [`crate::factorize`] for every `n` in range.
    pub fn factorize(&self, n: u64) -> Result<Vec<u64>, MertensError> {
        self.index(n)?;
        let mut factors = Vec::new();
        let mut remaining = n;
        while remaining > 1 {
            let prime = self.spf[remaining as usize];
            factors.push(prime);
            remaining /= prime;
        }
        Ok(factors)
    }

    /// μ(n) from the precomputed table.
    pub fn mobius(&self, n: u64) -> Result<Mobius, MertensError> {
        let idx = self.index(n)?;
        Ok(self.mu[idx])
    }

    /// μ(1..=limit), index `k` holding μ(k + 1).
    pub fn mobius_values(&self) -> &[Mobius] {
        &self.mu[1..]
    }
}
