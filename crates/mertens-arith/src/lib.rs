//! Classical arithmetic functions over small integer ranges.
//!
//! Every function here is a pure map from a positive integer (or an upper
//! bound `N`) to a value; zero is rejected with
//! [`MertensError::Input`](mertens_core::MertensError::Input).

pub mod factor;
pub mod mertens;
pub mod mobius;
pub mod sieve;

pub use factor::{distinct_prime_factors, factor_multiplicities, factorize, is_squarefree};
pub use mertens::{
    accumulate, mertens, mertens_sequence, mobius_sequence, reference_curve, Method,
    MAX_UPPER_BOUND,
};
pub use mobius::{mobius, Mobius};
pub use sieve::SpfSieve;
