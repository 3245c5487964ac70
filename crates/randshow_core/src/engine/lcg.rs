//! Linear congruential generator.

use super::RandomEngine;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::EngineError;

/// Linear congruential generator, `state = (a * state + c) mod m`.
///
/// The LCG has the smallest footprint and the cheapest step of all engines
/// in this crate, at the cost of very low statistical quality. It is fine for
/// games and other trivial uses, but should not be used where high-quality
/// random numbers matter.
///
/// The output is the post-advance state, so every value lies in
/// `[0, modulus - 1]`, which [`RandomEngine::max`] reports.
///
/// # Examples
///
/// ```rust
/// use randshow_core::{Lcg, RandomEngine};
///
/// let mut lcg = Lcg::from_seed(1);
/// assert_eq!(lcg.next(), Lcg::DEFAULT_MULTIPLIER);
/// assert_eq!(lcg.state(), Lcg::DEFAULT_MULTIPLIER);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lcg {
    state: u64,
    multiplier: u64,
    increment: u64,
    modulus: u64,
}

impl Lcg {
    /// Default multiplier `a`.
    pub const DEFAULT_MULTIPLIER: u64 = 6_458_928_179_451_363_983;
    /// Default increment `c`.
    pub const DEFAULT_INCREMENT: u64 = 0;
    /// Default modulus `m = 2^63 - 25`.
    pub const DEFAULT_MODULUS: u64 = (1 << 63) - 25;

    /// Creates an engine with default parameters seeded from the operating
    /// system entropy pool.
    pub fn new() -> Self {
        Self::from_entropy(&mut OsEntropy)
    }

    /// Creates an engine with default parameters seeded from `source`.
    ///
    /// The raw seed is folded into `[1, modulus - 1]`; with the default zero
    /// increment a zero state would never leave zero.
    pub fn from_entropy<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        let seed = source.next_seed() % (Self::DEFAULT_MODULUS - 1) + 1;
        tracing::debug!(engine = "lcg", source = source.source_id(), seed, "seeded from entropy");
        Self::from_seed(seed)
    }

    /// Creates an engine with default parameters and an explicit seed.
    ///
    /// Meant for reproducibility: equal seeds give equal sequences.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: seed,
            multiplier: Self::DEFAULT_MULTIPLIER,
            increment: Self::DEFAULT_INCREMENT,
            modulus: Self::DEFAULT_MODULUS,
        }
    }

    /// Creates an engine with custom `a`, `c`, `m` parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidModulus`] if `modulus` is 0 or 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randshow_core::{Lcg, RandomEngine};
    ///
    /// // MINSTD
    /// let mut lcg = Lcg::with_params(1, 48_271, 0, 2_147_483_647).unwrap();
    /// assert_eq!(lcg.next(), 48_271);
    /// assert_eq!(lcg.max(), 2_147_483_646);
    /// ```
    pub fn with_params(
        seed: u64,
        multiplier: u64,
        increment: u64,
        modulus: u64,
    ) -> Result<Self, EngineError> {
        if modulus < 2 {
            return Err(EngineError::InvalidModulus(modulus));
        }
        Ok(Self {
            state: seed,
            multiplier,
            increment,
            modulus,
        })
    }

    /// Returns the current raw state.
    ///
    /// `Lcg::with_params(lcg.state(), ..)` with the same parameters continues
    /// the sequence from this point.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Returns the multiplier `a`.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Returns the increment `c`.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Returns the modulus `m`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine for Lcg {
    type Word = u64;

    #[inline]
    fn advance(&mut self) -> u64 {
        let next = (u128::from(self.multiplier) * u128::from(self.state)
            + u128::from(self.increment))
            % u128::from(self.modulus);
        self.state = next as u64;
        self.state
    }

    #[inline]
    fn max(&self) -> u64 {
        self.modulus - 1
    }
}
