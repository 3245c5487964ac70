//! Sample command implementation
//!
//! Demonstrates the array algorithms on the positions `0..population`:
//! a full shuffle, a reservoir sample without replacement, or independent
//! draws with replacement. Positions are printed space-separated on one line.

use clap::ValueEnum;
use randshow_core::algorithms::{sample_indices, sample_indices_with_replacement, shuffle};
use randshow_core::RandomEngine;
use std::io::Write;
use tracing::info;

use crate::{CliError, Result};

/// Largest number of positions any mode materialises: the population for
/// shuffle, `min(population, count)` for reservoir, `count` for replacement.
pub const MAX_MATERIALISED: usize = 1 << 24;

/// Sampling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleMode {
    /// Shuffle the whole population and print it
    Shuffle,
    /// Select `count` distinct positions
    Reservoir,
    /// Select `count` positions with replacement
    Replacement,
}

/// Run the sample command
pub fn run<E, W>(
    engine: &mut E,
    mode: SampleMode,
    population: usize,
    count: usize,
    out: &mut W,
) -> Result<()>
where
    E: RandomEngine + ?Sized,
    W: Write,
{
    info!(?mode, population, count, "sampling");

    let materialised = match mode {
        SampleMode::Shuffle => population,
        SampleMode::Reservoir => population.min(count),
        SampleMode::Replacement => count,
    };
    if materialised > MAX_MATERIALISED {
        return Err(CliError::invalid_argument(format!(
            "{:?} sample would hold {} positions, more than {}",
            mode, materialised, MAX_MATERIALISED
        )));
    }

    let picks = match mode {
        SampleMode::Shuffle => {
            let mut positions: Vec<usize> = (0..population).collect();
            shuffle(engine, &mut positions);
            positions
        }
        SampleMode::Reservoir => sample_indices(engine, population, count),
        SampleMode::Replacement => sample_indices_with_replacement(engine, population, count),
    };

    let line = picks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{}", line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use randshow_core::Xoshiro256PlusPlus;
    use std::collections::HashSet;

    fn render(mode: SampleMode, population: usize, count: usize) -> Result<Vec<usize>> {
        let mut engine = Xoshiro256PlusPlus::from_seed(11);
        let mut out = Vec::new();
        run(&mut engine, mode, population, count, &mut out)?;
        Ok(String::from_utf8(out)
            .unwrap()
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect())
    }

    #[test]
    fn test_shuffle_prints_a_permutation() {
        let mut picks = render(SampleMode::Shuffle, 50, 0).unwrap();
        picks.sort_unstable();
        assert_eq!(picks, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_reservoir_prints_distinct_positions() {
        let picks = render(SampleMode::Reservoir, 1_000, 20).unwrap();
        assert_eq!(picks.len(), 20);
        assert_eq!(picks.iter().collect::<HashSet<_>>().len(), 20);
        assert!(picks.iter().all(|&p| p < 1_000));
    }

    #[test]
    fn test_replacement_prints_count_positions() {
        let picks = render(SampleMode::Replacement, 2, 30).unwrap();
        assert_eq!(picks.len(), 30);
        assert!(picks.iter().all(|&p| p < 2));
    }

    #[test]
    fn test_oversized_shuffle_is_rejected() {
        let result = render(SampleMode::Shuffle, MAX_MATERIALISED + 1, 0);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_oversized_reservoir_is_rejected() {
        let result = render(SampleMode::Reservoir, 1_000_000_000_000, 1_000_000_000_000);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_small_reservoir_from_huge_population_is_accepted() {
        let picks = render(SampleMode::Reservoir, usize::MAX, 5).unwrap();
        assert_eq!(picks.len(), 5);
    }

    #[test]
    fn test_oversized_replacement_is_rejected() {
        let result = render(SampleMode::Replacement, 10, 100_000_000_000_000);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}
