//! # Array Algorithms
//!
//! Generic algorithms that drive any [`RandomEngine`](crate::RandomEngine)
//! over a slice. The engine is borrowed for the duration of the call only.
//!
//! ## Module Structure
//!
//! - [`shuffle`]: in-place Fisher-Yates shuffle
//! - [`sample`], [`sample_indices`]: reservoir sampling without replacement
//!   (Algorithm L, expected `O(k(1 + log(n/k)))` draws)
//! - [`sample_with_replacement`], [`sample_indices_with_replacement`]:
//!   `k` independent uniform picks
//!
//! ## Position Markers
//!
//! The `*_indices` variants return positions into the source so callers can
//! work with sources that are not slices; the slice variants map those
//! positions to references.

mod sample;
mod shuffle;

pub use sample::{
    sample, sample_indices, sample_indices_with_replacement, sample_with_replacement,
};
pub use shuffle::shuffle;
