//! 3D gradient ("improved Perlin") noise over a [`PermutationTable`].
//!
//! Output is nominally in [-1, 1]. Like any classic gradient noise it can
//! overshoot slightly away from half-integer offsets.
use super::permutation::PermutationTable;

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub(crate) fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Dot product of `(x, y, z)` with one of the 12 cube-edge gradients picked by
/// the low 4 bits of `hash` (16 slots; four edges are repeated).
#[inline]
fn grad(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

/// Sample gradient noise at `(x, y, z)`.
///
/// Returns exactly 0 at integer lattice points regardless of the table.
pub fn perlin(table: &PermutationTable, x: f32, y: f32, z: f32) -> f32 {
    let (fx, fy, fz) = (x.floor(), y.floor(), z.floor());

    // Lattice cell, wrapped to the 256-period of the table.
    let xi = (fx as i32 & 255) as usize;
    let yi = (fy as i32 & 255) as usize;
    let zi = (fz as i32 & 255) as usize;

    // Offset inside the cell.
    let x = x - fx;
    let y = y - fy;
    let z = z - fz;

    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    let a = table.at(xi) + yi;
    let aa = table.at(a) + zi;
    let ab = table.at(a + 1) + zi;
    let b = table.at(xi + 1) + yi;
    let ba = table.at(b) + zi;
    let bb = table.at(b + 1) + zi;

    let near = lerp(
        lerp(grad(table.at(aa), x, y, z), grad(table.at(ba), x - 1.0, y, z), u),
        lerp(grad(table.at(ab), x, y - 1.0, z), grad(table.at(bb), x - 1.0, y - 1.0, z), u),
        v,
    );
    let far = lerp(
        lerp(
            grad(table.at(aa + 1), x, y, z - 1.0),
            grad(table.at(ba + 1), x - 1.0, y, z - 1.0),
            u,
        ),
        lerp(
            grad(table.at(ab + 1), x, y - 1.0, z - 1.0),
            grad(table.at(bb + 1), x - 1.0, y - 1.0, z - 1.0),
            u,
        ),
        v,
    );

    lerp(near, far, w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_table() -> PermutationTable {
        let mut src = [0u8; 256];
        for (i, v) in src.iter_mut().enumerate() {
            *v = i as u8;
        }
        PermutationTable::from_permutation(src)
    }

    #[test]
    fn fade_endpoints_and_midpoint() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_at_integer_lattice_points() {
        let tables = [
            PermutationTable::new(0),
            PermutationTable::new(42),
            PermutationTable::from_permutation([0u8; 256]),
            identity_table(),
        ];
        for table in &tables {
            for x in -3..4 {
                for y in -3..4 {
                    for z in [-300, -1, 0, 1, 255, 256, 1000] {
                        let v = perlin(table, x as f32, y as f32, z as f32);
                        assert_eq!(v, 0.0, "noise at ({x}, {y}, {z}) was {v}");
                    }
                }
            }
        }
    }

    #[test]
    fn deterministic_for_same_table() {
        let t1 = PermutationTable::new(42);
        let t2 = PermutationTable::new(42);
        for i in 0..200 {
            let p = (i as f32 * 0.173, i as f32 * -0.311, i as f32 * 0.057);
            assert_eq!(
                perlin(&t1, p.0, p.1, p.2).to_bits(),
                perlin(&t2, p.0, p.1, p.2).to_bits()
            );
        }
    }

    #[test]
    fn output_roughly_within_unit_range() {
        let table = PermutationTable::new(3);
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for i in 0..40 {
            for j in 0..40 {
                for k in 0..10 {
                    let v = perlin(&table, i as f32 * 0.137, j as f32 * 0.091, k as f32 * 0.43);
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }
        assert!(min >= -1.1 && max <= 1.1, "range [{min}, {max}] overshoots");
        assert!(max - min > 0.5, "noise looks flat: [{min}, {max}]");
    }

    #[test]
    fn continuous_across_table_wrap() {
        // Cell 255 -> cell 256 crosses the mirror boundary of the table.
        let table = PermutationTable::new(11);
        for &(y, z) in &[(0.3, 0.7), (10.25, 3.5), (-4.6, 0.1)] {
            let before = perlin(&table, 255.999, y, z);
            let after = perlin(&table, 256.001, y, z);
            assert!(
                (before - after).abs() < 0.02,
                "jump of {} at the x=256 boundary",
                (before - after).abs()
            );
        }
    }

    #[test]
    fn continuous_across_negative_cell_boundary() {
        let table = PermutationTable::new(5);
        let before = perlin(&table, 0.4, -1.0001, 2.2);
        let after = perlin(&table, 0.4, -0.9999, 2.2);
        assert!((before - after).abs() < 0.01);
    }
}
