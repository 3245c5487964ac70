//! Reservoir sampling.
//!
//! Without replacement this is Algorithm L (Li, 1994): after filling the
//! reservoir with the first `k` positions, the number of positions to skip
//! before the next replacement is drawn in closed form from a geometric
//! distribution, so the expected number of draws is `O(k(1 + log(n/k)))`
//! rather than `O(n)`.
//!
//! Link: <https://en.wikipedia.org/wiki/Reservoir_sampling>

use super::shuffle;
use crate::engine::RandomEngine;

/// Selects `k` distinct positions from `0..n` uniformly at random.
///
/// - `n <= k`: every position is returned, in shuffled order.
/// - `k == 0`: the sample is empty.
/// - otherwise: exactly `k` distinct positions; each position is selected
///   with probability `k / n` and every `k`-subset is equally likely.
///
/// # Examples
///
/// ```rust
/// use randshow_core::algorithms::sample_indices;
/// use randshow_core::SplitMix64;
///
/// let mut engine = SplitMix64::from_seed(8);
/// let picks = sample_indices(&mut engine, 1_000_000, 3);
/// assert_eq!(picks.len(), 3);
/// assert!(picks.iter().all(|&i| i < 1_000_000));
/// ```
pub fn sample_indices<E>(engine: &mut E, n: usize, k: usize) -> Vec<usize>
where
    E: RandomEngine + ?Sized,
{
    if n <= k {
        let mut reservoir: Vec<usize> = (0..n).collect();
        shuffle(engine, &mut reservoir);
        return reservoir;
    }
    if k == 0 {
        return Vec::new();
    }

    let mut reservoir: Vec<usize> = (0..k).collect();
    let inv_k = 1.0 / k as f64;
    let mut w = (engine.next_real().ln() * inv_k).exp();

    // Position of the last element considered.
    let mut i = k - 1;
    loop {
        // `as usize` saturates, so an astronomically long skip simply ends
        // the scan.
        let skip = (engine.next_real().ln() / (-w).ln_1p()).floor() as usize;
        i = i.saturating_add(skip).saturating_add(1);
        if i >= n {
            break;
        }

        let slot = engine.next_below(k as u64) as usize;
        reservoir[slot] = i;
        w *= (engine.next_real().ln() * inv_k).exp();
    }

    reservoir
}

/// Selects `k` distinct elements of `items` uniformly at random.
///
/// See [`sample_indices`] for the selection rules.
///
/// # Examples
///
/// ```rust
/// use randshow_core::algorithms::sample;
/// use randshow_core::Xoshiro256PlusPlus;
///
/// let mut engine = Xoshiro256PlusPlus::from_seed(4);
/// let words = ["alpha", "beta", "gamma", "delta"];
/// let picked = sample(&mut engine, &words, 2);
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
/// ```
pub fn sample<'a, E, T>(engine: &mut E, items: &'a [T], k: usize) -> Vec<&'a T>
where
    E: RandomEngine + ?Sized,
{
    sample_indices(engine, items.len(), k)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

/// Draws `k` independent uniform positions from `0..n`; positions may repeat.
///
/// An empty population (`n == 0`) has nothing to draw from and yields an
/// empty sample.
pub fn sample_indices_with_replacement<E>(engine: &mut E, n: usize, k: usize) -> Vec<usize>
where
    E: RandomEngine + ?Sized,
{
    if n == 0 {
        return Vec::new();
    }
    (0..k)
        .map(|_| engine.next_below(n as u64) as usize)
        .collect()
}

/// Draws `k` independent uniform elements of `items`; elements may repeat.
///
/// # Examples
///
/// ```rust
/// use randshow_core::algorithms::sample_with_replacement;
/// use randshow_core::Pcg64;
///
/// let mut engine = Pcg64::from_seed_u64(6);
/// let coins = ["heads", "tails"];
/// let flips = sample_with_replacement(&mut engine, &coins, 10);
/// assert_eq!(flips.len(), 10);
/// ```
pub fn sample_with_replacement<'a, E, T>(engine: &mut E, items: &'a [T], k: usize) -> Vec<&'a T>
where
    E: RandomEngine + ?Sized,
{
    sample_indices_with_replacement(engine, items.len(), k)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}
