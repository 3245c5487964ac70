//! # randshow_core: Pseudo-Random Engines and Sampling Algorithms
//!
//! ## Layer 1 (Foundation) Role
//!
//! randshow_core is the bottom layer of the workspace, providing:
//! - Fixed-width bit rotations (`bits`)
//! - The generator contract [`RandomEngine`] and its derived draws (`engine`)
//! - Concrete engines: [`Lcg`], [`Pcg32`], [`Pcg64`], [`SplitMix64`],
//!   [`Xoshiro256PlusPlus`] (`engine`)
//! - Entropy sources for non-deterministic seeding (`entropy`)
//! - A bridge into the `rand` ecosystem (`compat`)
//! - Fisher-Yates shuffle and reservoir sampling (`algorithms`)
//! - A bucket-uniformity quality check (`quality`)
//!
//! ## Ownership Model
//!
//! Every engine is plain value data mutated in place through `&mut self`.
//! Engines are never shared between threads; use one instance per thread
//! or synchronise externally. None of the engines is cryptographically
//! secure.
//!
//! ## Usage Examples
//!
//! ```rust
//! use randshow_core::algorithms::{sample, shuffle};
//! use randshow_core::{RandomEngine, Xoshiro256PlusPlus};
//!
//! let mut engine = Xoshiro256PlusPlus::from_seed(42);
//!
//! // Derived draws
//! let die = engine.next_in(1, 7);
//! assert!((1..7).contains(&die));
//! let u = engine.next_real();
//! assert!(u > 0.0 && u < 1.0);
//!
//! // Array algorithms borrow the engine for the duration of the call
//! let mut deck: Vec<u32> = (0..52).collect();
//! shuffle(&mut engine, &mut deck);
//! let hand = sample(&mut engine, &deck, 5);
//! assert_eq!(hand.len(), 5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation of engine state snapshots
//!
//! ## Spelling Convention
//!
//! Documentation uses British English spelling ("initialise", "randomise",
//! "behaviour").

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod algorithms;
pub mod bits;
pub mod compat;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod quality;

// Public re-exports
pub use compat::RandAdapter;
pub use engine::{
    EngineWord, Lcg, Pcg32, Pcg64, RandomEngine, SplitMix64, Xoshiro256PlusPlus,
};
pub use entropy::{ClockEntropy, EntropySource, FixedEntropy, OsEntropy};
pub use error::EngineError;
