//! Runtime engine selection.
//!
//! Commands pick an engine by name at runtime; [`SelectedEngine`] wraps the
//! concrete engines behind one [`RandomEngine`] implementation with a
//! 64-bit word so that the algorithms stay statically dispatched.

use clap::ValueEnum;
use randshow_core::{
    EngineWord, EntropySource, FixedEntropy, Lcg, OsEntropy, Pcg32, Pcg64, RandomEngine,
    SplitMix64, Xoshiro256PlusPlus,
};
use serde::Deserialize;
use std::fmt;

/// Engine names accepted on the command line and in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum EngineKind {
    /// Linear congruential generator
    Lcg,
    /// 32-bit permuted congruential generator
    Pcg32,
    /// 64-bit permuted congruential generator
    Pcg64,
    /// SplitMix64 seed expander
    Splitmix64,
    /// Xoshiro256++
    Xoshiro256pp,
}

impl EngineKind {
    /// Every engine, in display order.
    pub const ALL: [EngineKind; 5] = [
        Self::Lcg,
        Self::Pcg32,
        Self::Pcg64,
        Self::Splitmix64,
        Self::Xoshiro256pp,
    ];

    /// Name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Lcg => "lcg",
            Self::Pcg32 => "pcg32",
            Self::Pcg64 => "pcg64",
            Self::Splitmix64 => "splitmix64",
            Self::Xoshiro256pp => "xoshiro256pp",
        }
    }

    /// Parses a name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl Default for EngineKind {
    fn default() -> Self {
        Self::Xoshiro256pp
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the concrete engines, chosen at runtime.
#[derive(Debug, Clone)]
pub enum SelectedEngine {
    /// Linear congruential generator
    Lcg(Lcg),
    /// 32-bit permuted congruential generator
    Pcg32(Pcg32),
    /// 64-bit permuted congruential generator
    Pcg64(Pcg64),
    /// SplitMix64 seed expander
    SplitMix64(SplitMix64),
    /// Xoshiro256++
    Xoshiro256PlusPlus(Xoshiro256PlusPlus),
}

impl SelectedEngine {
    /// Creates an engine of `kind`, seeded with `seed` or, when absent,
    /// from the operating system entropy pool.
    pub fn new(kind: EngineKind, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_entropy(kind, &mut FixedEntropy::new(seed)),
            None => Self::from_entropy(kind, &mut OsEntropy),
        }
    }

    fn from_entropy<S: EntropySource>(kind: EngineKind, source: &mut S) -> Self {
        tracing::debug!(engine = %kind, source = source.source_id(), "creating engine");
        match kind {
            EngineKind::Lcg => Self::Lcg(Lcg::from_entropy(source)),
            EngineKind::Pcg32 => Self::Pcg32(Pcg32::from_entropy(source)),
            EngineKind::Pcg64 => Self::Pcg64(Pcg64::from_entropy(source)),
            EngineKind::Splitmix64 => Self::SplitMix64(SplitMix64::from_entropy(source)),
            EngineKind::Xoshiro256pp => {
                Self::Xoshiro256PlusPlus(Xoshiro256PlusPlus::from_entropy(source))
            }
        }
    }

    /// Width of the engine's native output word in bytes.
    pub fn word_bytes(&self) -> usize {
        match self {
            Self::Pcg32(_) => 4,
            _ => 8,
        }
    }

    /// Advances the engine and appends its native-width word to `out` in
    /// little-endian order.
    pub fn push_native_word(&mut self, out: &mut Vec<u8>) {
        match self {
            Self::Lcg(e) => e.advance().extend_le_bytes(out),
            Self::Pcg32(e) => e.advance().extend_le_bytes(out),
            Self::Pcg64(e) => e.advance().extend_le_bytes(out),
            Self::SplitMix64(e) => e.advance().extend_le_bytes(out),
            Self::Xoshiro256PlusPlus(e) => e.advance().extend_le_bytes(out),
        }
    }
}

impl RandomEngine for SelectedEngine {
    type Word = u64;

    #[inline]
    fn advance(&mut self) -> u64 {
        match self {
            Self::Lcg(e) => e.advance(),
            Self::Pcg32(e) => u64::from(e.advance()),
            Self::Pcg64(e) => e.advance(),
            Self::SplitMix64(e) => e.advance(),
            Self::Xoshiro256PlusPlus(e) => e.advance(),
        }
    }

    #[inline]
    fn min(&self) -> u64 {
        match self {
            Self::Lcg(e) => e.min(),
            Self::Pcg32(e) => u64::from(e.min()),
            Self::Pcg64(e) => e.min(),
            Self::SplitMix64(e) => e.min(),
            Self::Xoshiro256PlusPlus(e) => e.min(),
        }
    }

    #[inline]
    fn max(&self) -> u64 {
        match self {
            Self::Lcg(e) => e.max(),
            Self::Pcg32(e) => u64::from(e.max()),
            Self::Pcg64(e) => e.max(),
            Self::SplitMix64(e) => e.max(),
            Self::Xoshiro256PlusPlus(e) => e.max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in EngineKind::ALL {
            assert_eq!(EngineKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(EngineKind::from_name("PCG64"), Some(EngineKind::Pcg64));
        assert_eq!(EngineKind::from_name("mt19937"), None);
    }

    #[test]
    fn test_seeded_engine_matches_concrete_engine() {
        let mut selected = SelectedEngine::new(EngineKind::Xoshiro256pp, Some(0));
        let mut concrete = Xoshiro256PlusPlus::from_seed(0);
        for _ in 0..10 {
            assert_eq!(selected.next(), concrete.next());
        }
    }

    #[test]
    fn test_narrow_engines_keep_their_span() {
        let pcg = SelectedEngine::new(EngineKind::Pcg32, Some(1));
        assert_eq!(pcg.max(), u64::from(u32::MAX));
        assert_eq!(pcg.word_bytes(), 4);

        let lcg = SelectedEngine::new(EngineKind::Lcg, Some(1));
        assert_eq!(lcg.max(), Lcg::DEFAULT_MODULUS - 1);
        assert_eq!(lcg.word_bytes(), 8);
    }

    #[test]
    fn test_native_words_have_native_width() {
        for kind in EngineKind::ALL {
            let mut engine = SelectedEngine::new(kind, Some(3));
            let mut out = Vec::new();
            engine.push_native_word(&mut out);
            engine.push_native_word(&mut out);
            assert_eq!(out.len(), 2 * engine.word_bytes(), "{}", kind);
        }
    }

    #[test]
    fn test_lcg_zero_seed_does_not_stick() {
        let mut engine = SelectedEngine::new(EngineKind::Lcg, Some(0));
        assert_ne!(engine.next(), 0);
    }
}
