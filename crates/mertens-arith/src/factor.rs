//! Trial-division factorization of machine-sized integers.

use mertens_core::errors::MertensError;

/// Returns the prime factors of `n` with multiplicity, in non-decreasing order.
///
/// Divisors are tried from 2 upward and each one is divided out completely
/// before moving on, so every recorded divisor is prime. The search stops once
/// the divisor exceeds the square root of what remains; any remainder above 1
/// is then itself prime.
///
/// `factorize(1)` is the empty sequence. `n == 0` is rejected.
///
/// # Examples
/// ```
/// use mertens_arith::factorize;
/// assert_eq!(factorize(12).unwrap(), vec![2, 2, 3]);
/// assert!(factorize(1).unwrap().is_empty());
/// ```
pub fn factorize(n: u64) -> Result<Vec<u64>, MertensError> {
    if n == 0 {
        return Err(MertensError::invalid_input("n", n));
    }
    let mut factors = Vec::new();
    let mut remaining = n;

    while remaining % 2 == 0 {
        factors.push(2);
        remaining /= 2;
    }

    let mut divisor = 3u64;
    while divisor <= remaining / divisor {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 2;
    }

    if remaining > 1 {
        factors.push(remaining);
    }
    Ok(factors)
}

/// Groups a factorization into `(prime, exponent)` pairs, ordered by prime.
pub fn factor_multiplicities(n: u64) -> Result<Vec<(u64, u32)>, MertensError> {
    Ok(group_factors(&factorize(n)?))
}

pub(crate) fn group_factors(factors: &[u64]) -> Vec<(u64, u32)> {
    let mut grouped: Vec<(u64, u32)> = Vec::new();
    for &prime in factors {
        match grouped.last_mut() {
            Some((last, exponent)) if *last == prime => *exponent += 1,
            _ => grouped.push((prime, 1)),
        }
    }
    grouped
}

/// Returns the distinct primes dividing `n`.
pub fn distinct_prime_factors(n: u64) -> Result<Vec<u64>, MertensError> {
    let mut factors = factorize(n)?;
    factors.dedup();
    Ok(factors)
}

/// Whether no prime divides `n` more than once.
pub fn is_squarefree(n: u64) -> Result<bool, MertensError> {
    Ok(!has_repeat(&factorize(n)?))
}

/// Factor sequences are sorted, so a repeat is always adjacent.
pub(crate) fn has_repeat(factors: &[u64]) -> bool {
    factors.windows(2).any(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert_eq!(factorize(1).unwrap(), Vec::<u64>::new());
        assert_eq!(factorize(2).unwrap(), vec![2]);
        assert_eq!(factorize(12).unwrap(), vec![2, 2, 3]);
        assert_eq!(factorize(17).unwrap(), vec![17]);
        assert_eq!(factorize(360).unwrap(), vec![2, 2, 2, 3, 3, 5]);
    }

    #[test]
    fn large_prime_and_prime_square() {
        assert_eq!(factorize(1_000_000_007).unwrap(), vec![1_000_000_007]);
        assert_eq!(factorize(49).unwrap(), vec![7, 7]);
        assert_eq!(factorize(u64::MAX).unwrap(), vec![3, 5, 17, 257, 641, 65537, 6700417]);
    }

    #[test]
    fn zero_is_rejected() {
        let err = factorize(0).unwrap_err();
        assert_eq!(err.info().code, mertens_core::INVALID_ARGUMENT);
    }

    #[test]
    fn multiplicities_group_in_order() {
        assert_eq!(factor_multiplicities(360).unwrap(), vec![(2, 3), (3, 2), (5, 1)]);
        assert!(factor_multiplicities(1).unwrap().is_empty());
    }

    #[test]
    fn squarefree_detection() {
        assert!(is_squarefree(1).unwrap());
        assert!(is_squarefree(30).unwrap());
        assert!(!is_squarefree(12).unwrap());
        assert_eq!(distinct_prime_factors(360).unwrap(), vec![2, 3, 5]);
    }
}
