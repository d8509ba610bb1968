use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    arith::{self, FactorArgs, MertensArgs, MobiusArgs},
    series::{self, SeriesArgs},
    sweep::{self, SweepArgs},
    version::{self, VersionArgs},
};

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "mertens-sim", about = "Möbius and Mertens function explorer")]
struct Cli {
    /// Raise the default log level to debug (RUST_LOG still takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the prime factorization of n.
    Factor(FactorArgs),
    /// Print the Möbius function value μ(n).
    Mobius(MobiusArgs),
    /// Print the Mertens function value M(n).
    Mertens(MertensArgs),
    /// Compute M(1..N) with the ±√n envelope and export it for plotting.
    Series(SeriesArgs),
    /// Summarise M over several upper bounds.
    Sweep(SweepArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match cli.command {
        Command::Factor(args) => arith::run_factor(&args),
        Command::Mobius(args) => arith::run_mobius(&args),
        Command::Mertens(args) => arith::run_mertens(&args),
        Command::Series(args) => series::run(&args),
        Command::Sweep(args) => sweep::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
