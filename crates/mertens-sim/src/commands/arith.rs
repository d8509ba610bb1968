use std::error::Error;

use clap::Args;
use mertens_arith::{factor_multiplicities, factorize, mertens, mobius};
use serde::Serialize;

use super::{positive, print_json};

#[derive(Args, Debug)]
pub struct FactorArgs {
    /// Integer to factor (must be >= 1).
    #[arg(allow_hyphen_values = true)]
    pub n: i64,
}

#[derive(Args, Debug)]
pub struct MobiusArgs {
    /// Argument of μ (must be >= 1).
    #[arg(allow_hyphen_values = true)]
    pub n: i64,
}

#[derive(Args, Debug)]
pub struct MertensArgs {
    /// Argument of M (must be >= 1).
    #[arg(allow_hyphen_values = true)]
    pub n: i64,
}

#[derive(Debug, Serialize)]
struct FactorOutput {
    n: u64,
    factors: Vec<u64>,
    multiplicities: Vec<(u64, u32)>,
}

#[derive(Debug, Serialize)]
struct ValueOutput<T> {
    n: u64,
    value: T,
}

pub fn run_factor(args: &FactorArgs) -> Result<(), Box<dyn Error>> {
    let n = positive("n", args.n)?;
    print_json(&FactorOutput {
        n,
        factors: factorize(n)?,
        multiplicities: factor_multiplicities(n)?,
    })
}

pub fn run_mobius(args: &MobiusArgs) -> Result<(), Box<dyn Error>> {
    let n = positive("n", args.n)?;
    print_json(&ValueOutput {
        n,
        value: mobius(n)?,
    })
}

pub fn run_mertens(args: &MertensArgs) -> Result<(), Box<dyn Error>> {
    let n = positive("n", args.n)?;
    print_json(&ValueOutput {
        n,
        value: mertens(n)?,
    })
}
