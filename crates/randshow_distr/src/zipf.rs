//! Zipf distribution.
//!
//! Over ranks `1..=n` with exponent `s`, rank `k` has probability
//! `c / k^s` where `c` normalises the masses to 1, so the `k`-th most
//! common value occurs `1 / k^s` times as often as the most common one.
//! Commonly used to model word frequencies in natural language.
//!
//! Link: <https://en.wikipedia.org/wiki/Zipf%27s_law>

use crate::error::DistributionError;
use crate::table::CumulativeTable;
use rand::Rng;
use rand_distr::{Distribution, Open01};
use randshow_core::RandomEngine;

/// Zipf distribution over `1..=population`.
///
/// # Examples
///
/// ```rust
/// use randshow_distr::Zipf;
/// use randshow_core::Xoshiro256PlusPlus;
///
/// let zipf = Zipf::new(100, 1.0).unwrap();
/// let mut engine = Xoshiro256PlusPlus::from_seed(1);
///
/// let rank = zipf.sample_with(&mut engine);
/// assert!((1..=100).contains(&rank));
/// assert!(zipf.probability(1) > zipf.probability(2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Zipf {
    population: u64,
    exponent: f64,
    table: CumulativeTable,
}

impl Zipf {
    /// Creates a Zipf distribution over `population` ranks with the given
    /// `exponent`.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameter`] if `population` is 0
    /// or `exponent` is below 1 or not finite, and
    /// [`DistributionError::SupportTooLarge`] if `population` exceeds
    /// [`MAX_SUPPORT`](crate::MAX_SUPPORT).
    pub fn new(population: u64, exponent: f64) -> Result<Self, DistributionError> {
        if population == 0 {
            return Err(DistributionError::invalid_parameter(
                "population",
                "must be at least 1",
            ));
        }
        if !(exponent.is_finite() && exponent >= 1.0) {
            return Err(DistributionError::invalid_parameter(
                "exponent",
                format!("{} is not a finite value of at least 1", exponent),
            ));
        }

        let table = CumulativeTable::from_weights(
            population,
            (1..=population).map(|k| (k as f64).powf(-exponent)),
        )?;
        tracing::debug!(population, exponent, "built zipf table");

        Ok(Self {
            population,
            exponent,
            table,
        })
    }

    /// Number of ranks.
    #[inline]
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Exponent `s`.
    #[inline]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Probability of drawing `rank`; 0 outside `1..=population`.
    pub fn probability(&self, rank: u64) -> f64 {
        if rank == 0 {
            return 0.0;
        }
        usize::try_from(rank - 1).map_or(0.0, |index| self.table.mass(index))
    }

    /// Draws a rank using one [`RandomEngine::next_real`] draw.
    pub fn sample_with<E: RandomEngine + ?Sized>(&self, engine: &mut E) -> u64 {
        self.rank_for(engine.next_real())
    }

    fn rank_for(&self, z: f64) -> u64 {
        self.table.index_of(z) as u64 + 1
    }
}

impl Distribution<u64> for Zipf {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let z: f64 = Open01.sample(rng);
        self.rank_for(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use randshow_core::{Pcg64, SplitMix64};

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(Zipf::new(0, 1.0).is_err());
        assert!(Zipf::new(10, 0.99).is_err());
        assert!(Zipf::new(10, f64::NAN).is_err());
        assert!(Zipf::new(10, f64::INFINITY).is_err());
    }

    #[test]
    fn test_single_rank_is_certain() {
        let zipf = Zipf::new(1, 2.0).unwrap();
        let mut engine = SplitMix64::from_seed(0);
        for _ in 0..100 {
            assert_eq!(zipf.sample_with(&mut engine), 1);
        }
        assert_relative_eq!(zipf.probability(1), 1.0);
    }

    #[test]
    fn test_probabilities_follow_power_law() {
        let zipf = Zipf::new(4, 1.0).unwrap();
        // Harmonic number H_4 = 25/12.
        let c = 12.0 / 25.0;
        assert_relative_eq!(zipf.probability(1), c, epsilon = 1e-12);
        assert_relative_eq!(zipf.probability(2), c / 2.0, epsilon = 1e-12);
        assert_relative_eq!(zipf.probability(4), c / 4.0, epsilon = 1e-12);
        assert_eq!(zipf.probability(0), 0.0);
        assert_eq!(zipf.probability(5), 0.0);
    }

    #[test]
    fn test_empirical_frequencies_match() {
        let zipf = Zipf::new(10, 1.2).unwrap();
        let mut engine = Pcg64::from_seed_u64(99);
        let n = 200_000;
        let mut counts = [0u32; 11];
        for _ in 0..n {
            counts[zipf.sample_with(&mut engine) as usize] += 1;
        }

        assert_eq!(counts[0], 0);
        for (rank, &count) in counts.iter().enumerate().skip(1) {
            let observed = f64::from(count) / n as f64;
            assert_relative_eq!(observed, zipf.probability(rank as u64), epsilon = 0.005);
        }
    }

    #[test]
    fn test_extreme_uniforms_stay_in_support() {
        let zipf = Zipf::new(50, 3.0).unwrap();
        assert_eq!(zipf.rank_for(f64::MIN_POSITIVE), 1);
        assert_eq!(zipf.rank_for(1.0 - f64::EPSILON / 2.0), 50);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_rank_in_support(seed in any::<u64>(), population in 1u64..500, exponent in 1.0f64..4.0) {
            let zipf = Zipf::new(population, exponent).unwrap();
            let mut engine = SplitMix64::from_seed(seed);
            for _ in 0..20 {
                let rank = zipf.sample_with(&mut engine);
                prop_assert!(rank >= 1 && rank <= population);
            }
        }
    }
}
