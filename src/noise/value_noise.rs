use crate::math::{Vec3, fract};

/// Dot-product weights of the sine hash
const HASH_WEIGHTS: Vec3 = Vec3::new(12.9898, 78.233, 39.425);
/// Multiplier spreading `sin` across many integer periods before `fract`
const HASH_SCALE: f32 = 43758.5453;

/// Number of octaves summed by [`fbm`]
pub const OCTAVES: usize = 5;
/// Frequency multiplier between octaves
pub const LACUNARITY: f32 = 2.01;
/// Upper bound of [`fbm`]: 0.5 + 0.25 + 0.125 + 0.0625 + 0.03125
pub const FBM_MAX: f32 = 0.96875;

/// Pseudo-random scalar in [0, 1) for a lattice point.
///
/// Deterministic and not cryptographic; only visual smoothness matters.
pub fn random(x: Vec3) -> f32 {
    fract(x.dot(&HASH_WEIGHTS).sin() * HASH_SCALE)
}

/// Linear blend, exact at `t == 0`
#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Smoothed value noise: trilinear blend of the 8 corner hashes of the
/// lattice cell containing `x`, weighted by smoothstep per axis.
pub fn valuenoise(x: Vec3) -> f32 {
    let i = x.floor();
    // Unwrapped: an offset that rounds to 1.0 selects the upper corner
    let f = x.fract();

    // 3f^2 - 2f^3
    let u = f.mul_elem(&f).mul_elem(&(Vec3::splat(3.0) - f.scale(2.0)));

    let corner = |dx: f32, dy: f32, dz: f32| random(i + Vec3::new(dx, dy, dz));

    mix(
        mix(
            mix(corner(0.0, 0.0, 0.0), corner(1.0, 0.0, 0.0), u.x),
            mix(corner(0.0, 1.0, 0.0), corner(1.0, 1.0, 0.0), u.x),
            u.y,
        ),
        mix(
            mix(corner(0.0, 0.0, 1.0), corner(1.0, 0.0, 1.0), u.x),
            mix(corner(0.0, 1.0, 1.0), corner(1.0, 1.0, 1.0), u.x),
            u.y,
        ),
        u.z,
    )
}

/// Fractal Brownian motion: [`OCTAVES`] layers of [`valuenoise`], halving
/// amplitude and scaling frequency by [`LACUNARITY`] each layer.
pub fn fbm(x: Vec3) -> f32 {
    let mut x = x;
    let mut sum = 0.0;
    let mut amp = 0.5;
    for _ in 0..OCTAVES {
        sum += amp * valuenoise(x);
        amp *= 0.5;
        x = x.scale(LACUNARITY);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic spread of sample points, including negatives and
    /// non-integers
    fn sample_points() -> Vec<Vec3> {
        let mut points = Vec::new();
        for i in -6..6 {
            for j in -4..4 {
                for k in -3..3 {
                    points.push(Vec3::new(
                        i as f32 * 0.731 + 0.05,
                        j as f32 * 1.37 - 0.2,
                        k as f32 * 0.419 + 100.0,
                    ));
                }
            }
        }
        points
    }

    fn corner_hashes(x: Vec3) -> Vec<f32> {
        let i = x.floor();
        let mut values = Vec::with_capacity(8);
        for dz in [0.0, 1.0] {
            for dy in [0.0, 1.0] {
                for dx in [0.0, 1.0] {
                    values.push(random(i + Vec3::new(dx, dy, dz)));
                }
            }
        }
        values
    }

    #[test]
    fn test_random_at_origin_is_zero() {
        assert_eq!(random(Vec3::ZERO), 0.0);
    }

    #[test]
    fn test_random_is_deterministic() {
        for p in sample_points() {
            assert_eq!(random(p), random(p));
            assert_eq!(valuenoise(p), valuenoise(p));
            assert_eq!(fbm(p), fbm(p));
        }
    }

    #[test]
    fn test_random_range() {
        for p in sample_points() {
            let r = random(p);
            assert!((0.0..1.0).contains(&r), "random({:?}) = {}", p, r);
        }
    }

    #[test]
    fn test_random_varies_between_cells() {
        let a = random(Vec3::new(1.0, 0.0, 0.0));
        let b = random(Vec3::new(0.0, 1.0, 0.0));
        let c = random(Vec3::new(0.0, 0.0, 1.0));
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn test_valuenoise_origin_matches_hash() {
        assert_eq!(valuenoise(Vec3::ZERO), random(Vec3::ZERO));
    }

    #[test]
    fn test_valuenoise_matches_hash_at_lattice_points() {
        for i in -3..4 {
            for j in -3..4 {
                for k in -3..4 {
                    let p = Vec3::new(i as f32, j as f32, k as f32);
                    assert_eq!(valuenoise(p), random(p), "lattice point {:?}", p);
                }
            }
        }
    }

    #[test]
    fn test_valuenoise_within_corner_hull() {
        for p in sample_points() {
            let corners = corner_hashes(p);
            let lo = corners.iter().cloned().fold(f32::INFINITY, f32::min);
            let hi = corners.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
            let v = valuenoise(p);
            assert!(v >= lo - 1e-6 && v <= hi + 1e-6, "{} outside [{}, {}]", v, lo, hi);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_valuenoise_continuous_across_cell_boundary() {
        let below = valuenoise(Vec3::new(0.9999, 0.5, 0.5));
        let above = valuenoise(Vec3::new(1.0001, 0.5, 0.5));
        assert!((below - above).abs() < 1e-3);
    }

    #[test]
    fn test_valuenoise_continuous_just_below_negative_lattice_plane() {
        for axis in 0..3 {
            let mut at = [0.5f32; 3];
            at[axis] = 0.0;
            let mut below = at;
            below[axis] = -1e-9;
            let mut further = at;
            further[axis] = -1e-6;

            let v_at = valuenoise(Vec3::from_array(at));
            let v_below = valuenoise(Vec3::from_array(below));
            let v_further = valuenoise(Vec3::from_array(further));
            assert!((v_at - v_below).abs() < 1e-3, "axis {}: {} vs {}", axis, v_at, v_below);
            assert!((v_below - v_further).abs() < 1e-3, "axis {}: {} vs {}", axis, v_below, v_further);
        }
        let v = valuenoise(Vec3::new(-3.0 - 1e-7, 0.25, 0.75));
        let w = valuenoise(Vec3::new(-3.0, 0.25, 0.75));
        assert!((v - w).abs() < 1e-3);
    }

    #[test]
    fn test_fbm_bounds() {
        for p in sample_points() {
            let v = fbm(p);
            assert!(v >= 0.0, "fbm({:?}) = {}", p, v);
            assert!(v <= FBM_MAX + 1e-6, "fbm({:?}) = {}", p, v);
        }
    }

    #[test]
    fn test_fbm_at_origin_is_zero() {
        // Every octave samples the origin, whose hash is zero
        assert_eq!(fbm(Vec3::ZERO), 0.0);
    }

    #[test]
    fn test_fbm_max_is_amplitude_sum() {
        let sum: f32 = (0..OCTAVES).map(|o| 0.5f32.powi(o as i32 + 1)).sum();
        assert_eq!(sum, FBM_MAX);
    }
}
