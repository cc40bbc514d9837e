//! Stateful front end for host bindings that speak `init` / `height` /
//! `surface_position` without passing a config around.
//!
//! Queries before the first `init` fail with [`PlanetError::Unconfigured`];
//! there is no implicit default seed.

use crate::error::PlanetError;
use crate::planet::PlanetConfig;
use crate::sphere::Vec3;

#[derive(Debug, Clone, Default)]
pub enum PlanetState {
    #[default]
    Unconfigured,
    Configured(PlanetConfig),
}

impl PlanetState {
    /// Configure (or fully reconfigure) the planet.
    ///
    /// The new config is built completely before it replaces the old one, so
    /// nothing of a previous seed survives.
    pub fn init(&mut self, seed: u32, scale: f32, radius: f32) {
        let next = PlanetConfig::new(seed, scale, radius);
        if let Self::Configured(old) = self {
            log::debug!("re-seeding planet {} -> {seed}", old.seed());
        }
        *self = Self::Configured(next);
    }

    pub fn config(&self) -> Result<&PlanetConfig, PlanetError> {
        match self {
            Self::Configured(cfg) => Ok(cfg),
            Self::Unconfigured => Err(PlanetError::Unconfigured),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }

    pub fn height(&self, x: f32, y: f32, z: f32) -> Result<f32, PlanetError> {
        Ok(self.config()?.height(Vec3::new(x, y, z)))
    }

    pub fn surface_position(&self, x: f32, y: f32, z: f32) -> Result<[f32; 3], PlanetError> {
        Ok(self.config()?.surface_position(Vec3::new(x, y, z)).to_array())
    }
}
