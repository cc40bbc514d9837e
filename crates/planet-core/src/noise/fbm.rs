//! Fractional Brownian motion over gradient noise.
//!
//! Octave `i` samples at frequency `lacunarity^i` with amplitude `gain^i`.
//! Each octave is remapped from [-1, 1] to [0, 1] and the sum is divided by
//! the total amplitude, so the result is always in [0, 1].
use super::perlin::perlin;
use super::permutation::PermutationTable;
use crate::sphere::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fbm {
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
}

impl Fbm {
    pub fn new(octaves: u32, lacunarity: f32, gain: f32) -> Self {
        Self { octaves, lacunarity, gain }
    }

    /// Evaluate at `p` (already scaled by the caller's base frequency).
    ///
    /// Returns 0 when the total amplitude is 0, e.g. with zero octaves.
    pub fn sample(&self, table: &PermutationTable, p: Vec3) -> f32 {
        let mut sum = 0.0f32;
        let mut total = 0.0f32;
        let mut amp = 1.0f32;
        let mut freq = 1.0f32;
        for _ in 0..self.octaves {
            let n = perlin(table, p.x * freq, p.y * freq, p.z * freq);
            // Clamped so gradient-noise overshoot cannot escape [0, 1].
            let n = (n * 0.5 + 0.5).clamp(0.0, 1.0);
            sum += n * amp;
            total += amp;
            amp *= self.gain;
            freq *= self.lacunarity;
        }
        if total == 0.0 {
            return 0.0;
        }
        sum / total
    }
}
