use serde::{Deserialize, Serialize};

use crate::planet::PlanetConfig;
use crate::sphere::sample_sphere;

/// Equirectangular elevation grid, row-major, row 0 at the north pole.
/// Values are signed planet heights (sea level 0), already scaled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightField {
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl HeightField {
    /// Create a new HeightField filled with the given value.
    pub fn new(width: usize, height: usize, fill: f32) -> Self {
        Self { data: vec![fill; width * height], width, height }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f32) {
        self.data[row * self.width + col] = val;
    }

    pub fn min_elevation(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_elevation(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Share of cells above sea level. Cells are not area-weighted, so polar
    /// rows count as much as equatorial ones.
    pub fn land_fraction(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let land = self.data.iter().filter(|&&h| h > 0.0).count();
        land as f32 / self.data.len() as f32
    }
}

/// Evaluate `config` over a `width × height` equirectangular grid.
///
/// Returns an empty field when either dimension is 0, or when
/// `width * height` does not fit in `usize`. With the `threading` feature
/// rows are computed in parallel; the output is identical.
pub fn generate_heightmap(config: &PlanetConfig, width: usize, height: usize) -> HeightField {
    let Some(n) = width.checked_mul(height) else {
        log::warn!("heightmap {width}x{height} overflows the cell count; returning an empty field");
        return HeightField { data: Vec::new(), width: 0, height: 0 };
    };
    if n == 0 {
        return HeightField::new(width, height, 0.0);
    }
    log::debug!("sampling {width}x{height} heightmap for seed {}", config.seed());

    let fill_row = |row: usize, out: &mut [f32]| {
        for (col, v) in out.iter_mut().enumerate() {
            *v = config.height(sample_sphere(col, row, width, height));
        }
    };

    let mut data = vec![0.0f32; n];

    #[cfg(feature = "threading")]
    {
        use rayon::prelude::*;
        data.par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| fill_row(row, out));
    }

    #[cfg(not(feature = "threading"))]
    for (row, out) in data.chunks_mut(width).enumerate() {
        fill_row(row, out);
    }

    HeightField { data, width, height }
}
