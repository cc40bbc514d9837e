//! Deterministic procedural planet terrain.
//!
//! A seed fixes a permutation table and a set of noise parameters; together
//! with a height scale and base radius they form a [`PlanetConfig`]. From
//! there the elevation at any direction, and the displaced surface point
//! above it, are pure functions.
//!
//! ```
//! use planet_core::{PlanetConfig, Vec3};
//!
//! let planet = PlanetConfig::new(42, 1.0, 1.0);
//! let pole = planet.height(Vec3::new(0.0, 1.0, 0.0));
//! let p = planet.surface_position(Vec3::new(0.0, 1.0, 0.0));
//! assert!((p.length() - (1.0 + pole)).abs() < 1e-5);
//! ```

pub mod error;
pub mod hash;
pub mod heightfield;
pub mod noise;
pub mod planet;
pub mod sphere;
pub mod state;

pub use error::PlanetError;
pub use heightfield::{generate_heightmap, HeightField};
pub use planet::{PlanetConfig, PlanetSettings};
pub use sphere::Vec3;
pub use state::PlanetState;
