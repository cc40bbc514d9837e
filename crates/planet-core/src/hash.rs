//! Seed hashing primitives.
//!
//! These are bit-exact: noise parameter derivation depends on them, so any
//! change here changes every planet.

/// 32-bit avalanche mix (Wang-style integer hash).
#[inline]
pub fn mix32(mut x: u32) -> u32 {
    x ^= 61;
    x ^= x >> 16;
    x = x.wrapping_add(x << 3);
    x ^= x >> 4;
    x = x.wrapping_mul(0x27d4_eb2d);
    x ^= x >> 15;
    x
}

/// Hash `seed + salt` to a float in [0, 1) using the low 24 bits of the mix.
#[inline]
pub fn hash01(seed: u32, salt: u32) -> f32 {
    (mix32(seed.wrapping_add(salt)) & 0x00FF_FFFF) as f32 / 16_777_216.0
}

/// Map `hash01(seed, salt)` onto `[a, b]`.
#[inline]
pub fn random_range(seed: u32, salt: u32, a: f32, b: f32) -> f32 {
    a + (b - a) * hash01(seed, salt)
}
