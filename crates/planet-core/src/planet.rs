//! Planet configuration, elevation compositing and surface displacement.
//!
//! A [`PlanetConfig`] is built once per seed and only ever read afterwards.
//! Every query borrows it, so independent planets can be evaluated side by
//! side (and from several threads) without shared mutable state.

use ::noise::NoiseFn;
use serde::{Deserialize, Serialize};

use crate::error::PlanetError;
use crate::noise::{Fbm, NoiseParams, PermutationTable, RidgedFbm};
use crate::sphere::Vec3;

// ── Blend weights ─────────────────────────────────────────────────────────────
// These define the look of the terrain; changing any of them changes every
// planet.

const MACRO_WEIGHT: f32 = 0.65;
const MICRO_WEIGHT: f32 = 0.30;
const RIDGE_WEIGHT: f32 = 0.6;

/// Macro values over which ridges fade in (ocean → continent).
const CONTINENT_EDGE: (f32, f32) = (0.35, 0.65);

/// |y| band over which the polar plateau rises.
const POLAR_EDGE: (f32, f32) = (0.6, 0.95);
const POLAR_BOOST: f32 = 0.08;

/// Subtracted before scaling so that sea level sits at 0.
const SEA_LEVEL: f32 = 0.45;

/// Hermite step between `edge0` and `edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

// ── Settings ──────────────────────────────────────────────────────────────────

/// User-facing inputs for one planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetSettings {
    pub seed: u32,
    /// Height multiplier applied to the composited elevation.
    pub scale: f32,
    /// Radius of the undisplaced sphere.
    pub radius: f32,
}

impl Default for PlanetSettings {
    fn default() -> Self {
        Self { seed: 0, scale: 1.0, radius: 1.0 }
    }
}

impl PlanetSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PlanetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_config(self) -> PlanetConfig {
        PlanetConfig::new(self.seed, self.scale, self.radius)
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

/// Everything needed to evaluate one planet's terrain.
#[derive(Debug, Clone)]
pub struct PlanetConfig {
    seed: u32,
    scale: f32,
    radius: f32,
    table: PermutationTable,
    params: NoiseParams,
}

impl PlanetConfig {
    /// Build the permutation table and noise parameters for `seed`.
    pub fn new(seed: u32, scale: f32, radius: f32) -> Self {
        let table = PermutationTable::new(seed);
        let params = NoiseParams::derive(seed);
        log::debug!("configured planet: seed={seed} scale={scale} radius={radius}");
        Self { seed, scale, radius, table, params }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    pub fn permutation(&self) -> &PermutationTable {
        &self.table
    }

    pub fn settings(&self) -> PlanetSettings {
        PlanetSettings { seed: self.seed, scale: self.scale, radius: self.radius }
    }

    /// Signed elevation at `direction`, sea level at 0, already multiplied by
    /// `scale`.
    ///
    /// `direction` need not be unit length; a zero vector is evaluated at the
    /// planet centre rather than rejected.
    pub fn height(&self, direction: Vec3) -> f32 {
        let n = direction.normalize();
        let p = &self.params;

        let macro_fbm = Fbm::new(p.macro_octaves, p.lacunarity, p.gain);
        let micro_fbm = Fbm::new(p.micro_octaves, p.lacunarity, p.gain);
        let ridged = RidgedFbm::new(p.ridge_octaves, p.lacunarity, p.gain);

        let macro_h = macro_fbm.sample(&self.table, n * p.macro_freq) * p.macro_amp;
        let micro_h = micro_fbm.sample(&self.table, n * p.micro_freq) * p.micro_amp;
        let ridge_h = ridged.sample(&self.table, n * p.ridge_freq) * p.ridge_amp;

        // Mountains only rise where the macro layer has built land.
        let continent_mask = smoothstep(CONTINENT_EDGE.0, CONTINENT_EDGE.1, macro_h);
        let polar_boost = smoothstep(POLAR_EDGE.0, POLAR_EDGE.1, n.y.abs()) * POLAR_BOOST;

        let mut h = macro_h * MACRO_WEIGHT
            + micro_h * MICRO_WEIGHT
            + ridge_h * continent_mask * RIDGE_WEIGHT
            + polar_boost;
        h -= SEA_LEVEL;
        h * self.scale
    }

    /// Point on the displaced surface above `direction`.
    pub fn surface_position(&self, direction: Vec3) -> Vec3 {
        let n = direction.normalize();
        let h = self.height(n);
        n * (self.radius + h)
    }

    /// Displace a packed `[x0, y0, z0, x1, y1, z1, ..]` direction buffer.
    ///
    /// A trailing partial triple is ignored.
    pub fn surface_positions(&self, directions: &[f32]) -> Vec<f32> {
        let mut out = Vec::with_capacity(directions.len() - directions.len() % 3);
        for chunk in directions.chunks_exact(3) {
            let p = self.surface_position(Vec3::new(chunk[0], chunk[1], chunk[2]));
            out.extend_from_slice(&p.to_array());
        }
        out
    }
}

/// Exposes the elevation field to `noise` combinators.
impl NoiseFn<f64, 3> for PlanetConfig {
    fn get(&self, point: [f64; 3]) -> f64 {
        f64::from(self.height(Vec3::new(point[0] as f32, point[1] as f32, point[2] as f32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn smoothstep_clamps_and_interpolates() {
        assert_eq!(smoothstep(0.35, 0.65, 0.0), 0.0);
        assert_eq!(smoothstep(0.35, 0.65, 1.0), 1.0);
        assert_abs_diff_eq!(smoothstep(0.35, 0.65, 0.5), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn height_ignores_direction_length() {
        let cfg = PlanetConfig::new(3, 1.0, 1.0);
        let d = Vec3::new(0.3, -0.5, 0.81);
        assert_abs_diff_eq!(cfg.height(d), cfg.height(d * 25.0), epsilon = 1e-4);
    }

    #[test]
    fn huge_direction_matches_unit_direction() {
        let cfg = PlanetConfig::new(3, 1.0, 1.0);
        for d in [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.3, -0.5, 0.81).normalize()] {
            let far = d * 1e20;
            assert_abs_diff_eq!(cfg.height(far), cfg.height(d), epsilon = 1e-4);
            let (p, q) = (cfg.surface_position(far), cfg.surface_position(d));
            assert_abs_diff_eq!(p.x, q.x, epsilon = 1e-4);
            assert_abs_diff_eq!(p.y, q.y, epsilon = 1e-4);
            assert_abs_diff_eq!(p.z, q.z, epsilon = 1e-4);
            assert!(p.length() > 0.5, "surface point collapsed to {p:?}");
        }
    }

    #[test]
    fn zero_direction_is_defined() {
        let cfg = PlanetConfig::new(3, 1.0, 1.0);
        let h = cfg.height(Vec3::ZERO);
        assert!(h.is_finite());
        assert_eq!(cfg.surface_position(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn scale_multiplies_height() {
        let base = PlanetConfig::new(11, 1.0, 1.0);
        let tall = PlanetConfig::new(11, 3.0, 1.0);
        let d = Vec3::new(0.2, 0.9, -0.4);
        assert_abs_diff_eq!(tall.height(d), base.height(d) * 3.0, epsilon = 1e-5);
    }

    #[test]
    fn zero_scale_flattens_to_base_sphere() {
        let cfg = PlanetConfig::new(11, 0.0, 6.0);
        let p = cfg.surface_position(Vec3::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(p.length(), 6.0, epsilon = 1e-5);
    }

    #[test]
    fn surface_position_applies_scale_once() {
        let cfg = PlanetConfig::new(5, 2.0, 10.0);
        let d = Vec3::new(-0.6, 0.1, 0.79).normalize();
        let p = cfg.surface_position(d);
        assert_abs_diff_eq!(p.length(), 10.0 + cfg.height(d), epsilon = 1e-4);
    }

    #[test]
    fn surface_positions_matches_single_queries() {
        let cfg = PlanetConfig::new(8, 1.0, 2.0);
        let dirs = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.3, 0.3, 0.9, 7.0];
        let out = cfg.surface_positions(&dirs);
        assert_eq!(out.len(), 9, "trailing partial triple must be dropped");
        for (i, chunk) in dirs.chunks_exact(3).enumerate() {
            let single = cfg.surface_position(Vec3::new(chunk[0], chunk[1], chunk[2]));
            assert_eq!(&out[i * 3..i * 3 + 3], &single.to_array());
        }
    }

    #[test]
    fn polar_boost_term_spans_zero_to_full() {
        assert_eq!(smoothstep(POLAR_EDGE.0, POLAR_EDGE.1, 1.0) * POLAR_BOOST, 0.08);
        assert_eq!(smoothstep(POLAR_EDGE.0, POLAR_EDGE.1, 0.0), 0.0);
    }

    #[test]
    fn settings_json_defaults_missing_fields() {
        let s = PlanetSettings::from_json(r#"{"seed": 9}"#).expect("valid settings");
        assert_eq!(s, PlanetSettings { seed: 9, scale: 1.0, radius: 1.0 });
    }

    #[test]
    fn settings_json_rejects_garbage() {
        let err = PlanetSettings::from_json("{ seed: nope").unwrap_err();
        assert!(matches!(err, PlanetError::Settings(_)));
    }

    #[test]
    fn settings_roundtrip_through_config() {
        let s = PlanetSettings { seed: 77, scale: 0.5, radius: 4.0 };
        assert_eq!(s.into_config().settings(), s);
    }

    #[test]
    fn noise_fn_matches_height() {
        let cfg = PlanetConfig::new(12, 1.5, 1.0);
        let v = cfg.get([0.0, 1.0, 0.0]);
        assert_eq!(v, f64::from(cfg.height(Vec3::new(0.0, 1.0, 0.0))));
    }
}
