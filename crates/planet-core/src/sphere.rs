//! Direction vectors and sphere sampling.
//!
//! The y axis is the polar axis throughout: `y = +1` is the north pole.
//! Everything here is f32 to match the renderer-facing interface.

use std::f32::consts::PI;
use std::ops::Mul;

/// A 3-vector; usually a direction from the planet centre.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Unit vector from geographic latitude/longitude in degrees.
    pub fn from_latlon(lat_deg: f32, lon_deg: f32) -> Self {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();
        Self {
            x: lat.cos() * lon.cos(),
            y: lat.sin(),
            z: lat.cos() * lon.sin(),
        }
    }

    /// Inverse of [`Vec3::from_latlon`] for unit vectors.
    pub fn to_latlon(self) -> (f32, f32) {
        let lat = self.y.clamp(-1.0, 1.0).asin().to_degrees();
        let lon = self.z.atan2(self.x).to_degrees();
        (lat, lon)
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A (near) zero-length vector normalizes to [`Vec3::ZERO`] instead of NaN.
    /// The length is taken in f64 so components near `f32::MAX` still
    /// normalize instead of overflowing to infinity.
    pub fn normalize(self) -> Self {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        let len = (x * x + y * y + z * z).sqrt();
        if len <= 1e-9 {
            return Self::ZERO;
        }
        Self { x: (x / len) as f32, y: (y / len) as f32, z: (z / len) as f32 }
    }

    pub fn scale(self, s: f32) -> Self {
        Self { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        self.scale(s)
    }
}

/// Unit direction at the centre of equirectangular cell `(col, row)` in a
/// `width × height` grid.
///
/// Columns sweep longitude 0..2π, rows sweep colatitude 0..π, so row 0 hugs
/// the north pole and the last row the south pole.
pub fn sample_sphere(col: usize, row: usize, width: usize, height: usize) -> Vec3 {
    let u = (col as f32 + 0.5) / width.max(1) as f32;
    let v = (row as f32 + 0.5) / height.max(1) as f32;

    let lon = u * 2.0 * PI;
    let colat = v * PI;

    Vec3 {
        x: lon.cos() * colat.sin(),
        y: colat.cos(),
        z: lon.sin() * colat.sin(),
    }
}
