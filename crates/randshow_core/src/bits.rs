//! Fixed-width bit rotations.
//!
//! The PCG output permutations and the Xoshiro256++ scrambler rotate words
//! by data-dependent counts. These helpers take the count modulo the word
//! width, so any `u32` count is accepted.

/// Rotates a 32-bit word left by `rot` bits (mod 32).
///
/// # Examples
///
/// ```rust
/// use randshow_core::bits::rotl32;
///
/// assert_eq!(rotl32(0x8000_0001, 1), 0x0000_0003);
/// assert_eq!(rotl32(0xDEAD_BEEF, 32), 0xDEAD_BEEF);
/// ```
#[inline]
pub const fn rotl32(x: u32, rot: u32) -> u32 {
    x.rotate_left(rot & 31)
}

/// Rotates a 32-bit word right by `rot` bits (mod 32).
///
/// # Examples
///
/// ```rust
/// use randshow_core::bits::rotr32;
///
/// assert_eq!(rotr32(0x0000_0003, 1), 0x8000_0001);
/// ```
#[inline]
pub const fn rotr32(x: u32, rot: u32) -> u32 {
    x.rotate_right(rot & 31)
}

/// Rotates a 64-bit word left by `rot` bits (mod 64).
#[inline]
pub const fn rotl64(x: u64, rot: u32) -> u64 {
    x.rotate_left(rot & 63)
}

/// Rotates a 64-bit word right by `rot` bits (mod 64).
#[inline]
pub const fn rotr64(x: u64, rot: u32) -> u64 {
    x.rotate_right(rot & 63)
}
