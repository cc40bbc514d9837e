//! Ridged multifractal noise.
//!
//! Each octave folds the noise around zero with `(1 - |n|)^2`, turning
//! zero-crossings into sharp crests. A running weight carries the previous
//! octave's ridge strength into the next so detail clusters on the ridges.
//!
//! The sum is not normalized: values sit in roughly [0, 1.2] and are never
//! negative.
use super::perlin::perlin;
use super::permutation::PermutationTable;
use crate::sphere::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgedFbm {
    pub octaves: u32,
    pub lacunarity: f32,
    /// Couples ridge strength across octaves; amplitude itself halves per
    /// octave regardless of this value.
    pub gain: f32,
}

impl RidgedFbm {
    pub fn new(octaves: u32, lacunarity: f32, gain: f32) -> Self {
        Self { octaves, lacunarity, gain }
    }

    pub fn sample(&self, table: &PermutationTable, p: Vec3) -> f32 {
        let mut sum = 0.0f32;
        let mut amp = 1.0f32;
        let mut freq = 1.0f32;
        let mut weight = 1.0f32;
        for _ in 0..self.octaves {
            let n = perlin(table, p.x * freq, p.y * freq, p.z * freq);
            let mut r = 1.0 - n.abs();
            r *= r;
            r *= weight;
            sum += r * amp;
            weight = (r * self.gain).clamp(0.0, 1.0);
            amp *= 0.5;
            freq *= self.lacunarity;
        }
        sum
    }
}
