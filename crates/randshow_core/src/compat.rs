//! Interoperability with the `rand` ecosystem.
//!
//! [`RandAdapter`] lends any [`RandomEngine`] to code written against
//! [`rand::RngCore`], e.g. `rand_distr` distributions or `rand::Rng`
//! conveniences.

use crate::engine::RandomEngine;

/// Borrowed view of an engine as a [`rand::RngCore`].
///
/// Obtained through [`RandomEngine::as_rand`]. Words are produced with
/// [`RandomEngine::next_u32`] and [`RandomEngine::next_u64`], so 32-bit
/// engines and engines with a narrower span still yield full-width words.
#[derive(Debug)]
pub struct RandAdapter<'a, E: ?Sized> {
    engine: &'a mut E,
}

impl<'a, E: RandomEngine + ?Sized> RandAdapter<'a, E> {
    /// Wraps a mutable borrow of `engine`.
    #[inline]
    pub fn new(engine: &'a mut E) -> Self {
        Self { engine }
    }
}

impl<E: RandomEngine + ?Sized> rand::RngCore for RandAdapter<'_, E> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        RandomEngine::next_u32(&mut *self.engine)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        RandomEngine::next_u64(&mut *self.engine)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = RandomEngine::next_u64(&mut *self.engine).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
