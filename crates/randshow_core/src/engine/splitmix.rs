//! SplitMix64 generator.

use super::RandomEngine;
use crate::entropy::{EntropySource, OsEntropy};

/// Golden-ratio increment added to the state on every step.
pub(crate) const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64: a Weyl sequence passed through a 64-bit finaliser.
///
/// Adjacent seeds give decorrelated outputs, which makes SplitMix64 the
/// seed expander for [`Xoshiro256PlusPlus`](super::Xoshiro256PlusPlus).
///
/// # Examples
///
/// ```rust
/// use randshow_core::{RandomEngine, SplitMix64};
///
/// let mut engine = SplitMix64::from_seed(0);
/// assert_eq!(engine.next(), 0xE220_A839_7B1D_CDAF);
/// assert_eq!(engine.state(), 0x9E37_79B9_7F4A_7C15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates an engine seeded from the operating system entropy pool.
    pub fn new() -> Self {
        Self::from_entropy(&mut OsEntropy)
    }

    /// Creates an engine seeded from `source`.
    pub fn from_entropy<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        let seed = source.next_seed();
        tracing::debug!(engine = "splitmix64", source = source.source_id(), seed, "seeded from entropy");
        Self::from_seed(seed)
    }

    /// Creates an engine with an explicit seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the current raw state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for SplitMix64 {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine for SplitMix64 {
    type Word = u64;

    #[inline]
    fn advance(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}
