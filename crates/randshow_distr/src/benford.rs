//! Benford distribution of leading digits.
//!
//! In base `b`, leading digit `d` in `1..b` occurs with probability
//! `log_b(1 + 1/d)`. The masses telescope to `log_b(b) = 1`.
//!
//! Link: <https://en.wikipedia.org/wiki/Benford%27s_law>

use crate::error::DistributionError;
use crate::table::CumulativeTable;
use rand::Rng;
use rand_distr::{Distribution, Open01};
use randshow_core::RandomEngine;

/// Benford distribution over the non-zero digits of a base.
///
/// # Examples
///
/// ```rust
/// use randshow_distr::Benford;
/// use randshow_core::Pcg32;
///
/// let benford = Benford::default();
/// assert_eq!(benford.base(), 10);
///
/// let digit = benford.sample_with(&mut Pcg32::from_seed(3));
/// assert!((1..=9).contains(&digit));
/// assert!((benford.probability(1) - 0.30103).abs() < 1e-5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Benford {
    base: u64,
    table: CumulativeTable,
}

impl Benford {
    /// Base used by [`Benford::default`].
    pub const DEFAULT_BASE: u64 = 10;

    /// Creates a Benford distribution for `base`.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameter`] if `base` is 2 or
    /// less, and [`DistributionError::SupportTooLarge`] if the base has
    /// more non-zero digits than [`MAX_SUPPORT`](crate::MAX_SUPPORT).
    pub fn new(base: u64) -> Result<Self, DistributionError> {
        if base <= 2 {
            return Err(DistributionError::invalid_parameter(
                "base",
                format!("{} must be greater than 2", base),
            ));
        }

        let table = CumulativeTable::from_weights(base - 1, digit_weights(base))?;
        tracing::debug!(base, "built benford table");

        Ok(Self { base, table })
    }

    /// Numeral base.
    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Probability of leading `digit`; 0 outside `1..base`.
    pub fn probability(&self, digit: u64) -> f64 {
        if digit == 0 {
            return 0.0;
        }
        usize::try_from(digit - 1).map_or(0.0, |index| self.table.mass(index))
    }

    /// Draws a digit using one [`RandomEngine::next_real`] draw.
    pub fn sample_with<E: RandomEngine + ?Sized>(&self, engine: &mut E) -> u64 {
        self.digit_for(engine.next_real())
    }

    fn digit_for(&self, z: f64) -> u64 {
        self.table.index_of(z) as u64 + 1
    }
}

impl Default for Benford {
    fn default() -> Self {
        Self {
            base: Self::DEFAULT_BASE,
            table: CumulativeTable::build(digit_weights(Self::DEFAULT_BASE)),
        }
    }
}

/// Unnormalised masses `log_b(1 + 1/d)` for `d` in `1..base`.
fn digit_weights(base: u64) -> impl Iterator<Item = f64> {
    let ln_base = (base as f64).ln();
    (1..base).map(move |d| (1.0 / d as f64).ln_1p() / ln_base)
}

impl Distribution<u64> for Benford {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let z: f64 = Open01.sample(rng);
        self.digit_for(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use randshow_core::{Lcg, Xoshiro256PlusPlus};

    #[test]
    fn test_rejects_small_bases() {
        assert!(Benford::new(0).is_err());
        assert!(Benford::new(1).is_err());
        assert!(Benford::new(2).is_err());
        assert!(Benford::new(3).is_ok());
    }

    #[test]
    fn test_default_matches_base_ten() {
        assert_eq!(Benford::default(), Benford::new(10).unwrap());
    }

    #[test]
    fn test_decimal_probabilities() {
        let benford = Benford::default();
        assert_relative_eq!(benford.probability(1), 2f64.log10(), epsilon = 1e-12);
        assert_relative_eq!(benford.probability(9), (10.0f64 / 9.0).log10(), epsilon = 1e-12);
        assert_eq!(benford.probability(0), 0.0);
        assert_eq!(benford.probability(10), 0.0);

        let total: f64 = (1..10).map(|d| benford.probability(d)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empirical_frequencies_match() {
        let benford = Benford::new(16).unwrap();
        let mut engine = Xoshiro256PlusPlus::from_seed(16);
        let n = 200_000;
        let mut counts = [0u32; 16];
        for _ in 0..n {
            counts[benford.sample_with(&mut engine) as usize] += 1;
        }

        assert_eq!(counts[0], 0);
        for (digit, &count) in counts.iter().enumerate().skip(1) {
            let observed = f64::from(count) / n as f64;
            assert_relative_eq!(observed, benford.probability(digit as u64), epsilon = 0.005);
        }
    }

    #[test]
    fn test_digits_stay_below_base() {
        let benford = Benford::new(3).unwrap();
        let mut engine = Lcg::from_seed(5);
        for _ in 0..1_000 {
            let digit = benford.sample_with(&mut engine);
            assert!(digit == 1 || digit == 2);
        }
        assert_eq!(benford.digit_for(1.0 - f64::EPSILON / 2.0), 2);
    }
}
