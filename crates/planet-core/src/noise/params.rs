use serde::{Deserialize, Serialize};

use crate::hash::random_range;

// Distinct salt per field so no two fields share a hash input.
const SALT_MACRO_FREQ: u32 = 11;
const SALT_MACRO_OCTAVES: u32 = 12;
const SALT_MACRO_AMP: u32 = 13;
const SALT_MICRO_FREQ: u32 = 21;
const SALT_MICRO_OCTAVES: u32 = 22;
const SALT_MICRO_AMP: u32 = 23;
const SALT_RIDGE_FREQ: u32 = 31;
const SALT_RIDGE_OCTAVES: u32 = 32;
const SALT_RIDGE_AMP: u32 = 33;
const SALT_LACUNARITY: u32 = 41;
const SALT_GAIN: u32 = 42;

/// Noise layer settings for one planet, derived from its seed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Continent-scale frequency, 0.03-0.18.
    pub macro_freq: f32,
    /// 2-4, or 5 at the very top of the hash range (f32 rounding).
    pub macro_octaves: u32,
    /// 0.6-1.6.
    pub macro_amp: f32,

    /// Hills and valleys, 0.8-3.0.
    pub micro_freq: f32,
    /// 2-5, or 6 at the very top of the hash range (f32 rounding).
    pub micro_octaves: u32,
    /// 0.05-0.5.
    pub micro_amp: f32,

    /// Mountain ranges, 0.6-2.5.
    pub ridge_freq: f32,
    /// 1-3, or 4 at the very top of the hash range (f32 rounding).
    pub ridge_octaves: u32,
    /// 0.2-1.2.
    pub ridge_amp: f32,

    /// Per-octave frequency multiplier, 1.8-2.2.
    pub lacunarity: f32,
    /// Per-octave amplitude multiplier, 0.35-0.6.
    pub gain: f32,
}

impl NoiseParams {
    /// Derive the parameter set for `seed`.
    ///
    /// Octave counts are drawn from a float range and truncated. The upper
    /// bound of each octave range is reached only when the hash hits its
    /// maximum, where f32 rounding lands exactly on it.
    pub fn derive(seed: u32) -> Self {
        let r = |salt: u32, a: f32, b: f32| random_range(seed, salt, a, b);

        let params = Self {
            macro_freq: r(SALT_MACRO_FREQ, 0.03, 0.18),
            macro_octaves: r(SALT_MACRO_OCTAVES, 2.0, 5.0) as u32,
            macro_amp: r(SALT_MACRO_AMP, 0.6, 1.6),

            micro_freq: r(SALT_MICRO_FREQ, 0.8, 3.0),
            micro_octaves: r(SALT_MICRO_OCTAVES, 2.0, 6.0) as u32,
            micro_amp: r(SALT_MICRO_AMP, 0.05, 0.5),

            ridge_freq: r(SALT_RIDGE_FREQ, 0.6, 2.5),
            ridge_octaves: r(SALT_RIDGE_OCTAVES, 1.0, 4.0) as u32,
            ridge_amp: r(SALT_RIDGE_AMP, 0.2, 1.2),

            lacunarity: r(SALT_LACUNARITY, 1.8, 2.2),
            gain: r(SALT_GAIN, 0.35, 0.6),
        };
        log::trace!("derived noise params for seed {seed}: {params:?}");
        params
    }
}
