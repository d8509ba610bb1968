//! The Möbius function μ.

use std::fmt::{self, Display};

use mertens_core::errors::{ErrorInfo, MertensError};
use serde::{Deserialize, Serialize};

use crate::factor::{factorize, has_repeat};

/// Value of μ(n). Serialized as the plain integer `-1`, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Mobius {
    /// Squarefree with an odd number of prime factors.
    MinusOne,
    /// Divisible by the square of a prime.
    Zero,
    /// Squarefree with an even number of prime factors (including n = 1).
    One,
}

impl Mobius {
    /// Derives μ from a non-decreasing prime factor sequence.
    pub fn from_factors(factors: &[u64]) -> Self {
        if has_repeat(factors) {
            Mobius::Zero
        } else if factors.len() % 2 == 0 {
            Mobius::One
        } else {
            Mobius::MinusOne
        }
    }

    /// Integer value in {-1, 0, 1}.
    pub const fn as_i8(self) -> i8 {
        match self {
            Mobius::MinusOne => -1,
            Mobius::Zero => 0,
            Mobius::One => 1,
        }
    }

    /// Widened value, convenient for accumulation.
    pub const fn as_i64(self) -> i64 {
        self.as_i8() as i64
    }

    /// `-self`, used when a fresh prime joins a squarefree number.
    pub(crate) const fn negate(self) -> Self {
        match self {
            Mobius::MinusOne => Mobius::One,
            Mobius::Zero => Mobius::Zero,
            Mobius::One => Mobius::MinusOne,
        }
    }
}

impl From<Mobius> for i8 {
    fn from(value: Mobius) -> Self {
        value.as_i8()
    }
}

impl TryFrom<i8> for Mobius {
    type Error = MertensError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Mobius::MinusOne),
            0 => Ok(Mobius::Zero),
            1 => Ok(Mobius::One),
            other => Err(MertensError::Serde(
                ErrorInfo::new("mobius-range", "möbius values must be -1, 0 or 1")
                    .with_context("value", other.to_string()),
            )),
        }
    }
}

impl Display for Mobius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Computes μ(n) by trial-division factorization.
///
/// μ(1) = 1 since the empty factorization has an even number of primes.
pub fn mobius(n: u64) -> Result<Mobius, MertensError> {
    Ok(Mobius::from_factors(&factorize(n)?))
}
