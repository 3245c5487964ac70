//! # Generator Contract and Concrete Engines
//!
//! This module defines [`RandomEngine`], the contract every pseudo-random
//! engine satisfies, together with the five engines shipped by the crate.
//!
//! ## Design Rationale
//!
//! - **One primitive**: an engine implements only [`RandomEngine::advance`];
//!   every derived draw (ranges, reals, coin flips) is a provided method
//!   written once in terms of it.
//! - **Static dispatch**: algorithms are generic over `E: RandomEngine`, so
//!   tight sampling loops are monomorphised.
//! - **Explicit mutation**: draws take `&mut self`; there is no interior
//!   mutability and no internal locking.
//! - **Unbiased ranges**: ranged draws use rejection sampling over the
//!   engine's `[min, max]` span rather than a bare modulo.
//!
//! ## Module Structure
//!
//! - [`Lcg`]: linear congruential generator with a prime-like modulus
//! - [`Pcg32`], [`Pcg64`]: permuted congruential generators (XSH-RR)
//! - [`SplitMix64`]: seed expander with strong avalanche
//! - [`Xoshiro256PlusPlus`]: recommended general-purpose engine
//!
//! ## Range Policies
//!
//! - Integer ranges are half-open: `next_in(a, b)` lies in `[a, b)`, and
//!   `a >= b` yields `a` without drawing.
//! - Reals lie in the open interval `(0, 1)`; neither endpoint is produced.

mod lcg;
mod pcg;
mod splitmix;
mod xoshiro;

pub use lcg::Lcg;
pub use pcg::{Pcg32, Pcg64};
pub use splitmix::SplitMix64;
pub use xoshiro::Xoshiro256PlusPlus;

use crate::compat::RandAdapter;
use std::fmt;

/// Resolution of [`RandomEngine::next_real`] in bits.
const REAL_BITS: u32 = 52;

/// Spacing between consecutive values of [`RandomEngine::next_real`].
const REAL_UNIT: f64 = 1.0 / (1u64 << REAL_BITS) as f64;

/// Rejection rounds attempted by [`RandomEngine::next_below`] before the
/// last candidate is reduced modulo `n`.
///
/// Each round of a healthy engine is rejected with probability below 1/2.
const MAX_REJECTION_ROUNDS: u32 = 64;

/// Unsigned output word of an engine.
///
/// Implemented for `u32` and `u64`, the two output widths produced by the
/// engines in this crate.
pub trait EngineWord:
    Copy + Eq + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Width of the word in bits.
    const BITS: u32;
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Widens the word to 64 bits.
    fn to_u64(self) -> u64;

    /// Appends the word to `out` as `BITS / 8` little-endian bytes.
    fn extend_le_bytes(self, out: &mut Vec<u8>);
}

impl EngineWord for u32 {
    const BITS: u32 = u32::BITS;
    const MIN: Self = u32::MIN;
    const MAX: Self = u32::MAX;

    #[inline]
    fn to_u64(self) -> u64 {
        u64::from(self)
    }

    #[inline]
    fn extend_le_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl EngineWord for u64 {
    const BITS: u32 = u64::BITS;
    const MIN: Self = u64::MIN;
    const MAX: Self = u64::MAX;

    #[inline]
    fn to_u64(self) -> u64 {
        self
    }

    #[inline]
    fn extend_le_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

/// Pseudo-random engine contract.
///
/// An engine produces an unbounded, deterministic sequence of words from its
/// internal state. Implementors supply only [`advance`](Self::advance); the
/// remaining operations are provided in terms of it.
///
/// # Thread Safety
///
/// Engines are single-owner sequence generators. Concurrent use of one
/// instance must be serialised by the caller.
///
/// # Examples
///
/// ```rust
/// use randshow_core::{Pcg32, RandomEngine};
///
/// let mut engine = Pcg32::from_seed(7);
///
/// let word: u32 = engine.next();
/// assert!(word >= engine.min() && word <= engine.max());
///
/// assert!(engine.next_below(10) < 10);
/// assert_eq!(engine.next_in(5, 5), 5); // degenerate range, no draw
/// assert!(!engine.heads_weighted(0.0));
/// assert!(engine.heads_weighted(1.0));
/// ```
pub trait RandomEngine {
    /// Output word produced by [`advance`](Self::advance).
    type Word: EngineWord;

    /// Advances the state by one step and returns the next output word.
    ///
    /// This is the only operation an engine must implement.
    fn advance(&mut self) -> Self::Word;

    /// Smallest value [`next`](Self::next) can return.
    ///
    /// Defaults to the smallest value of [`Self::Word`].
    #[inline]
    fn min(&self) -> Self::Word {
        Self::Word::MIN
    }

    /// Largest value [`next`](Self::next) can return.
    ///
    /// Defaults to the largest value of [`Self::Word`]. Engines whose output
    /// is confined to a narrower range override this so that the derived
    /// draws stay unbiased.
    #[inline]
    fn max(&self) -> Self::Word {
        Self::Word::MAX
    }

    /// Returns the next word, uniformly distributed over `[min, max]`.
    #[inline]
    fn next(&mut self) -> Self::Word {
        self.advance()
    }

    /// Returns a uniform value in `[0, n)`.
    ///
    /// `n == 0` and `n == 1` both return 0 without drawing. When `n` exceeds
    /// the engine span, several draws are combined before rejection, so the
    /// result is unbiased for every `n`.
    ///
    /// The operation always terminates: an engine whose output never leaves
    /// the rejection zone (for example an LCG stuck on a fixed point) gets
    /// its last candidate reduced modulo `n` after a bounded number of
    /// rounds.
    fn next_below(&mut self, n: u64) -> u64 {
        if n <= 1 {
            return 0;
        }

        let span = span_of(self);
        if span == 1 {
            // Constant engine; no number of draws can cover `n`.
            return 0;
        }
        let n = u128::from(n);
        let mut value: u128 = 0;
        for _ in 0..MAX_REJECTION_ROUNDS {
            // Accumulate base-`span` digits until the range covers `n`.
            // `value < range < n <= 2^64` and `span <= 2^64`, so nothing
            // here overflows u128.
            value = 0;
            let mut range: u128 = 1;
            while range < n {
                value = value * span + draw_offset(self);
                range *= span;
            }

            let limit = range - range % n;
            if value < limit {
                return (value % n) as u64;
            }
        }
        (value % n) as u64
    }

    /// Returns a uniform value in the half-open range `[low, high)`.
    ///
    /// If `low >= high` the range is empty and `low` is returned without
    /// drawing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randshow_core::{RandomEngine, SplitMix64};
    ///
    /// let mut engine = SplitMix64::from_seed(1);
    /// let v = engine.next_in(-100, 100);
    /// assert!((-100..100).contains(&v));
    /// assert_eq!(engine.next_in(3, -3), 3);
    /// ```
    fn next_in(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        // `high > low`, so the width fits in u64 even for the full i64 range.
        let width = high.wrapping_sub(low) as u64;
        low.wrapping_add(self.next_below(width) as i64)
    }

    /// Returns a uniform real in the open interval `(0, 1)`.
    ///
    /// One draw is mapped onto a 52-bit grid and offset by half a step, so
    /// neither 0.0 nor 1.0 can be produced.
    fn next_real(&mut self) -> f64 {
        let span = span_of(self);
        let scaled = (draw_offset(self) << REAL_BITS) / span;
        (scaled as f64 + 0.5) * REAL_UNIT
    }

    /// Returns a uniform real in `[low, high)`, mapped linearly from
    /// [`next_real`](Self::next_real).
    #[inline]
    fn next_real_in(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_real() * (high - low)
    }

    /// Balanced coin flip.
    #[inline]
    fn heads(&mut self) -> bool {
        self.next_real() < 0.5
    }

    /// Weighted coin flip returning `true` with probability `weight`.
    ///
    /// A weight at or below 0 always yields `false`; at or above 1 always
    /// yields `true`.
    #[inline]
    fn heads_weighted(&mut self, weight: f64) -> bool {
        self.next_real() < weight
    }

    /// Returns a uniform 32-bit word regardless of the engine's width.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_below(1 << 32) as u32
    }

    /// Returns a uniform 64-bit word regardless of the engine's width.
    fn next_u64(&mut self) -> u64 {
        if span_of(self) == 1 << 64 {
            return draw_offset(self) as u64;
        }
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    /// Borrows the engine as a [`rand::RngCore`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::Rng;
    /// use randshow_core::{RandomEngine, Xoshiro256PlusPlus};
    ///
    /// let mut engine = Xoshiro256PlusPlus::from_seed(3);
    /// let roll: u8 = engine.as_rand().gen_range(1..=6);
    /// assert!((1..=6).contains(&roll));
    /// ```
    #[inline]
    fn as_rand(&mut self) -> RandAdapter<'_, Self>
    where
        Self: Sized,
    {
        RandAdapter::new(self)
    }
}

/// Number of distinct values in `[min, max]`.
#[inline]
fn span_of<E: RandomEngine + ?Sized>(engine: &E) -> u128 {
    u128::from(engine.max().to_u64()) - u128::from(engine.min().to_u64()) + 1
}

/// Draws one word and shifts it to start at zero.
#[inline]
fn draw_offset<E: RandomEngine + ?Sized>(engine: &mut E) -> u128 {
    let min = u128::from(engine.min().to_u64());
    u128::from(engine.advance().to_u64()) - min
}
