//! Permuted congruential generators.
//!
//! Both engines advance an LCG state and derive their output from the
//! *pre-advance* state through an XSH-RR ("xorshift high, random rotate")
//! permutation:
//!
//! - [`Pcg32`]: 64-bit state, 32-bit output (PCG-XSH-RR)
//! - [`Pcg64`]: 128-bit state, 64-bit output (PCG-XSH-RR-RR, two rotations)

use super::RandomEngine;
use crate::bits::{rotr32, rotr64};
use crate::entropy::{EntropySource, OsEntropy};

/// PCG with 64-bit state and 32-bit output.
///
/// # Examples
///
/// ```rust
/// use randshow_core::{Pcg32, RandomEngine};
///
/// let mut a = Pcg32::from_seed(42);
/// let mut b = Pcg32::from_seed(a.state());
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pcg32 {
    state: u64,
    multiplier: u64,
    increment: u64,
}

impl Pcg32 {
    /// Default LCG multiplier.
    pub const DEFAULT_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    /// Default LCG increment.
    pub const DEFAULT_INCREMENT: u64 = 1_442_695_040_888_963_407;

    /// Creates an engine seeded from the operating system entropy pool.
    pub fn new() -> Self {
        Self::from_entropy(&mut OsEntropy)
    }

    /// Creates an engine with default constants seeded from `source`.
    pub fn from_entropy<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        let seed = source.next_seed();
        tracing::debug!(engine = "pcg32", source = source.source_id(), seed, "seeded from entropy");
        Self::from_seed(seed)
    }

    /// Creates an engine with default constants and an explicit seed.
    ///
    /// The seed becomes the raw state, so `Pcg32::from_seed(e.state())`
    /// reproduces the future output of `e`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_params(seed, Self::DEFAULT_MULTIPLIER, Self::DEFAULT_INCREMENT)
    }

    /// Creates an engine with a custom multiplier and increment.
    #[inline]
    pub fn with_params(seed: u64, multiplier: u64, increment: u64) -> Self {
        Self {
            state: seed,
            multiplier,
            increment,
        }
    }

    /// Returns the current raw state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Returns the LCG multiplier.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Returns the LCG increment.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let old = self.state;
        self.state = old
            .wrapping_mul(self.multiplier)
            .wrapping_add(self.increment);
        old
    }
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine for Pcg32 {
    type Word = u32;

    #[inline]
    fn advance(&mut self) -> u32 {
        let old = self.step();
        let rotation = (old >> 59) as u32;
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        rotr32(xorshifted, rotation)
    }
}

/// PCG with 128-bit state and 64-bit output.
///
/// The output permutation folds the two 64-bit halves of the pre-advance
/// state together and applies two independent rotations: the folded word
/// rotated by the top six state bits supplies the low 32 output bits, and
/// the high half rotated by the folded word's low six bits supplies the high
/// 32 output bits.
///
/// # Examples
///
/// ```rust
/// use randshow_core::{Pcg64, RandomEngine};
///
/// let seed = 0x0123_4567_89AB_CDEF_u128 << 64;
/// let mut a = Pcg64::from_seed(seed);
/// let mut b = Pcg64::from_seed(seed);
/// assert_eq!(a.next(), b.next());
/// assert_eq!(a.state(), b.state());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pcg64 {
    state: u128,
    multiplier: u128,
    increment: u128,
}

impl Pcg64 {
    /// Default LCG multiplier.
    pub const DEFAULT_MULTIPLIER: u128 = 0x2360_ED05_1FC6_5DA4_4385_DF64_9FCC_F645;
    /// Default LCG increment.
    pub const DEFAULT_INCREMENT: u128 = 0x5851_F42D_4C95_7F2D_1405_7B7E_F767_814F;

    /// Creates an engine seeded from the operating system entropy pool.
    pub fn new() -> Self {
        Self::from_entropy(&mut OsEntropy)
    }

    /// Creates an engine with default constants seeded from `source`.
    pub fn from_entropy<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        let seed = source.next_seed_u128();
        tracing::debug!(engine = "pcg64", source = source.source_id(), seed = %seed, "seeded from entropy");
        Self::from_seed(seed)
    }

    /// Creates an engine with default constants and an explicit 128-bit seed.
    #[inline]
    pub fn from_seed(seed: u128) -> Self {
        Self::with_params(seed, Self::DEFAULT_MULTIPLIER, Self::DEFAULT_INCREMENT)
    }

    /// Creates an engine from a 64-bit seed placed in the low state half.
    #[inline]
    pub fn from_seed_u64(seed: u64) -> Self {
        Self::from_seed(u128::from(seed))
    }

    /// Creates an engine with a custom multiplier and increment.
    #[inline]
    pub fn with_params(seed: u128, multiplier: u128, increment: u128) -> Self {
        Self {
            state: seed,
            multiplier,
            increment,
        }
    }

    /// Returns the current raw state.
    #[inline]
    pub fn state(&self) -> u128 {
        self.state
    }

    /// Returns the LCG multiplier.
    #[inline]
    pub fn multiplier(&self) -> u128 {
        self.multiplier
    }

    /// Returns the LCG increment.
    #[inline]
    pub fn increment(&self) -> u128 {
        self.increment
    }

    #[inline]
    fn step(&mut self) -> u128 {
        let old = self.state;
        self.state = old
            .wrapping_mul(self.multiplier)
            .wrapping_add(self.increment);
        old
    }
}

impl Default for Pcg64 {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine for Pcg64 {
    type Word = u64;

    #[inline]
    fn advance(&mut self) -> u64 {
        let old = self.step();
        let rotation = (old >> 122) as u32;

        // XSH
        let high = (old >> 64) as u64;
        let low = old as u64;
        let folded = high ^ low;

        // RR-RR
        let out_low = rotr64(folded, rotation) & 0xFFFF_FFFF;
        let out_high = rotr64(high, (folded & 63) as u32) & 0xFFFF_FFFF_0000_0000;
        out_high | out_low
    }
}
