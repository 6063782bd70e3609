//! Random number helpers and sample warping.

use lumen_math::Vec2;
use rand::{Rng, RngCore};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Jittered position inside cell `(i, j)` of an `n x n` grid over [0, 1)^2.
pub fn stratified(i: u32, j: u32, n: u32, rng: &mut dyn RngCore) -> Vec2 {
    let n = n.max(1) as f32;
    Vec2::new(
        (i as f32 + gen_f32(rng)) / n,
        (j as f32 + gen_f32(rng)) / n,
    )
}

/// Map [0, 1)^2 onto the unit disk with Shirley-Chiu concentric mapping.
///
/// Preserves stratification: adjacent grid cells stay adjacent on the disk.
pub fn concentric_disk(u: Vec2) -> Vec2 {
    let offset = u * 2.0 - Vec2::ONE;
    if offset.x == 0.0 && offset.y == 0.0 {
        return Vec2::ZERO;
    }

    let (r, theta) = if offset.x.abs() > offset.y.abs() {
        (offset.x, FRAC_PI_4 * (offset.y / offset.x))
    } else {
        (offset.y, FRAC_PI_2 - FRAC_PI_4 * (offset.x / offset.y))
    };
    Vec2::new(theta.cos(), theta.sin()) * r
}

/// Spherical angles `(theta, phi)` for a uniform point on the unit sphere.
///
/// `theta` is the azimuth in [0, 2pi), `phi` the polar angle from +Y.
pub fn uniform_sphere_angles(u1: f32, u2: f32) -> (f32, f32) {
    let theta = 2.0 * PI * u1;
    let phi = (1.0 - 2.0 * u2).clamp(-1.0, 1.0).acos();
    (theta, phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gen_f32_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = gen_f32(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_stratified_stays_in_cell() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 4;
        for i in 0..n {
            for j in 0..n {
                let p = stratified(i, j, n, &mut rng);
                assert!(p.x >= i as f32 / n as f32 && p.x < (i + 1) as f32 / n as f32);
                assert!(p.y >= j as f32 / n as f32 && p.y < (j + 1) as f32 / n as f32);
            }
        }
    }

    #[test]
    fn test_concentric_disk_inside_unit_disk() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let u = Vec2::new(gen_f32(&mut rng), gen_f32(&mut rng));
            assert!(concentric_disk(u).length() <= 1.0 + 1e-5);
        }
        assert_eq!(concentric_disk(Vec2::splat(0.5)), Vec2::ZERO);
    }

    #[test]
    fn test_concentric_disk_corners_map_to_rim() {
        let p = concentric_disk(Vec2::new(1.0, 0.5));
        assert!((p - Vec2::X).length() < 1e-5);
    }

    #[test]
    fn test_uniform_sphere_angles() {
        let (theta, phi) = uniform_sphere_angles(0.0, 0.0);
        assert_eq!(theta, 0.0);
        assert_eq!(phi, 0.0);

        let (_, phi) = uniform_sphere_angles(0.5, 1.0);
        assert!((phi - PI).abs() < 1e-5);
    }
}
