//! Xoshiro256++ generator.
//!
//! Algorithm by David Blackman and Sebastiano Vigna.
//!
//! # References
//! - <https://prng.di.unimi.it/>

use super::splitmix::{SplitMix64, GOLDEN_GAMMA};
use super::RandomEngine;
use crate::bits::rotl64;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::EngineError;

/// Xoshiro256++: four 64-bit words of state with a `rotl(s0 + s3, 23) + s0`
/// output scrambler.
///
/// This is the recommended general-purpose engine of the crate. It is not
/// safe for concurrent mutation; give each thread its own instance.
///
/// # Examples
///
/// ```rust
/// use randshow_core::{RandomEngine, Xoshiro256PlusPlus};
///
/// let mut engine = Xoshiro256PlusPlus::from_seed(0);
/// assert_eq!(
///     engine.state(),
///     [3_793_791_033, 2_065_550_767, 1_853_398_634, 2_713_282_036]
/// );
/// assert_eq!(engine.next(), 54_585_288_996_988_985);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xoshiro256PlusPlus {
    s: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Creates an engine seeded from the operating system entropy pool.
    pub fn new() -> Self {
        Self::from_entropy(&mut OsEntropy)
    }

    /// Creates an engine seeded from `source`.
    pub fn from_entropy<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        let seed = source.next_seed();
        tracing::debug!(engine = "xoshiro256++", source = source.source_id(), seed, "seeded from entropy");
        Self::from_seed(seed)
    }

    /// Creates an engine from a 64-bit seed expanded through [`SplitMix64`].
    ///
    /// Two SplitMix64 draws are split into their high and low 32-bit halves,
    /// which populate the four state words in that order.
    pub fn from_seed(seed: u64) -> Self {
        let mut expander = SplitMix64::from_seed(seed);
        let a = expander.next();
        let b = expander.next();

        let mut s = [a >> 32, a & 0xFFFF_FFFF, b >> 32, b & 0xFFFF_FFFF];
        if s == [0; 4] {
            s[0] = GOLDEN_GAMMA;
        }
        Self { s }
    }

    /// Creates an engine from an explicit state, e.g. one returned by
    /// [`state`](Self::state).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] for the all-zero state,
    /// which the recurrence never leaves.
    pub fn from_state(s: [u64; 4]) -> Result<Self, EngineError> {
        if s == [0; 4] {
            return Err(EngineError::invalid_parameter(
                "state",
                "must not be all zero",
            ));
        }
        Ok(Self { s })
    }

    /// Returns the current raw state.
    #[inline]
    pub fn state(&self) -> [u64; 4] {
        self.s
    }
}

impl Default for Xoshiro256PlusPlus {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine for Xoshiro256PlusPlus {
    type Word = u64;

    #[inline]
    fn advance(&mut self) -> u64 {
        let s = &mut self.s;
        let result = rotl64(s[0].wrapping_add(s[3]), 23).wrapping_add(s[0]);

        // `t` must be taken before s[1] changes.
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = rotl64(s[3], 45);

        result
    }
}
