//! Noise engine: seeded permutation table, gradient noise, and the fractal
//! layers built on it, plus the seed → parameter derivation.
pub mod fbm;
pub mod params;
pub mod permutation;
pub mod perlin;
pub mod ridged;

pub use fbm::Fbm;
pub use params::NoiseParams;
pub use permutation::PermutationTable;
pub use perlin::perlin;
pub use ridged::RidgedFbm;
