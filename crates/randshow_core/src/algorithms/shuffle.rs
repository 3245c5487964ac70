//! Fisher-Yates shuffle.
//!
//! Link: <https://en.wikipedia.org/wiki/Fisher%E2%80%93Yates_shuffle>

use crate::engine::RandomEngine;

/// Shuffles `items` in place.
///
/// For `i` in `0..len - 1`, swaps `items[i]` with `items[j]` where `j` is
/// drawn uniformly from `[i, len)`. Every permutation is equally likely
/// because [`RandomEngine::next_below`] is unbiased. Slices shorter than two
/// elements are left untouched and consume no draws.
///
/// # Examples
///
/// ```rust
/// use randshow_core::algorithms::shuffle;
/// use randshow_core::Pcg32;
///
/// let mut engine = Pcg32::from_seed(1);
/// let mut values = vec![1, 2, 3, 4, 5];
/// shuffle(&mut engine, &mut values);
///
/// let mut sorted = values.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<E, T>(engine: &mut E, items: &mut [T])
where
    E: RandomEngine + ?Sized,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let j = i + engine.next_below((len - i) as u64) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lcg, Xoshiro256PlusPlus};
    use proptest::prelude::*;

    #[test]
    fn test_empty_and_single_are_untouched() {
        let mut engine = Xoshiro256PlusPlus::from_seed(1);
        let before = engine.clone();

        let mut empty: [u8; 0] = [];
        shuffle(&mut engine, &mut empty);
        let mut single = [42];
        shuffle(&mut engine, &mut single);

        assert_eq!(single, [42]);
        // No draws consumed.
        assert_eq!(engine, before);
    }

    #[test]
    fn test_position_occupancy_is_uniform() {
        let mut engine = Lcg::from_seed(12345);
        let trials = 24_000;
        let len = 4;
        let mut counts = [[0u32; 4]; 4];

        for _ in 0..trials {
            let mut items = [0usize, 1, 2, 3];
            shuffle(&mut engine, &mut items);
            for (position, &item) in items.iter().enumerate() {
                counts[position][item] += 1;
            }
        }

        let expected = (trials / len) as f64;
        for row in &counts {
            for &count in row {
                let deviation = (f64::from(count) - expected).abs() / expected;
                assert!(
                    deviation < 0.1,
                    "Occupancy count {} deviates {:.3} from {}",
                    count,
                    deviation,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_all_permutations_of_three_occur() {
        let mut engine = Xoshiro256PlusPlus::from_seed(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut items = ['a', 'b', 'c'];
            shuffle(&mut engine, &mut items);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_shuffle_is_permutation(seed in any::<u64>(), mut items in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut engine = Xoshiro256PlusPlus::from_seed(seed);
            let mut expected = items.clone();
            shuffle(&mut engine, &mut items);

            expected.sort_unstable();
            items.sort_unstable();
            prop_assert_eq!(items, expected);
        }
    }
}
