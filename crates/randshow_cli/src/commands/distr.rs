//! Distribution command implementation
//!
//! Samples a Zipf or Benford distribution and prints, per support value,
//! the observed count next to the observed and theoretical frequency.

use clap::Subcommand;
use randshow_core::RandomEngine;
use randshow_distr::{Benford, Zipf};
use std::io::Write;
use tracing::info;

use crate::Result;

/// Supported distributions
#[derive(Debug, Clone, Subcommand)]
pub enum DistrCommand {
    /// Zipf rank-frequency distribution
    Zipf {
        /// Number of ranks
        #[arg(short, long, default_value = "10")]
        population: u64,

        /// Exponent (at least 1)
        #[arg(long, default_value = "1.0")]
        exponent: f64,

        /// Number of draws
        #[arg(short, long, default_value = "100000")]
        draws: u64,
    },

    /// Benford leading-digit distribution
    Benford {
        /// Numeral base (greater than 2)
        #[arg(short, long, default_value = "10")]
        base: u64,

        /// Number of draws
        #[arg(short, long, default_value = "100000")]
        draws: u64,
    },
}

/// Run the distr command
pub fn run<E, W>(engine: &mut E, command: &DistrCommand, out: &mut W) -> Result<()>
where
    E: RandomEngine + ?Sized,
    W: Write,
{
    match *command {
        DistrCommand::Zipf {
            population,
            exponent,
            draws,
        } => {
            let zipf = Zipf::new(population, exponent)?;
            info!(population, exponent, draws, "sampling zipf");
            tabulate(
                population,
                draws,
                || zipf.sample_with(engine),
                |rank| zipf.probability(rank),
                out,
            )
        }
        DistrCommand::Benford { base, draws } => {
            let benford = Benford::new(base)?;
            info!(base, draws, "sampling benford");
            tabulate(
                base - 1,
                draws,
                || benford.sample_with(engine),
                |digit| benford.probability(digit),
                out,
            )
        }
    }
}

/// Counts `draws` samples over the support `1..=len` and prints one
/// `value count observed expected` row per support value.
fn tabulate<S, P, W>(len: u64, draws: u64, mut sample: S, probability: P, out: &mut W) -> Result<()>
where
    S: FnMut() -> u64,
    P: Fn(u64) -> f64,
    W: Write,
{
    let mut counts = vec![0u64; len as usize];
    for _ in 0..draws {
        counts[(sample() - 1) as usize] += 1;
    }

    let total = draws.max(1) as f64;
    for (value, &count) in (1..).zip(counts.iter()) {
        writeln!(
            out,
            "{} {} {:.6} {:.6}",
            value,
            count,
            count as f64 / total,
            probability(value)
        )?;
    }
    Ok(())
}
