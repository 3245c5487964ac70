//! # randshow_distr: Discrete Distributions
//!
//! ## Layer 2 (Distributions) Role
//!
//! randshow_distr builds on the engines of `randshow_core` to provide
//! discrete distributions sampled by inverse transform over a precomputed
//! cumulative table:
//! - [`Zipf`]: rank-frequency law over `1..=n`
//! - [`Benford`]: leading-digit law for an arbitrary base
//!
//! Each distribution can be driven directly by a
//! [`RandomEngine`](randshow_core::RandomEngine) through `sample_with`, or by
//! any `rand` generator through [`rand_distr::Distribution`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use rand_distr::Distribution;
//! use randshow_core::{RandomEngine, Xoshiro256PlusPlus};
//! use randshow_distr::{Benford, Zipf};
//!
//! let mut engine = Xoshiro256PlusPlus::from_seed(7);
//!
//! let zipf = Zipf::new(1_000, 1.1).unwrap();
//! let rank = zipf.sample_with(&mut engine);
//! assert!((1..=1_000).contains(&rank));
//!
//! let digit = Benford::default().sample(&mut engine.as_rand());
//! assert!((1..=9).contains(&digit));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod benford;
pub mod error;
mod table;
pub mod zipf;

pub use benford::Benford;
pub use error::DistributionError;
pub use table::MAX_SUPPORT;
pub use zipf::Zipf;
