//! Axis-aligned box primitive.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use lumen_math::{Interval, Ray, Vec3};

/// Ray direction components smaller than this are treated as parallel to a slab.
const PARALLEL_EPSILON: f32 = 1e-4;

/// An axis-aligned box given by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub center: Vec3,
    half_size: Vec3,
    pub material: Material,
}

impl Cuboid {
    /// Create a box from its center and half extents.
    pub fn new(center: Vec3, half_size: Vec3, material: Material) -> Self {
        Self {
            center,
            half_size: half_size.abs(),
            material,
        }
    }

    /// Create a box from its center and full edge lengths.
    pub fn from_size(center: Vec3, size: Vec3, material: Material) -> Self {
        Self::new(center, size * 0.5, material)
    }

    /// A 1x1x1 cube centered at `center`.
    pub fn unit_cube(center: Vec3, material: Material) -> Self {
        Self::from_size(center, Vec3::ONE, material)
    }

    pub fn half_size(&self) -> Vec3 {
        self.half_size
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_size
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_size
    }
}

impl Hittable for Cuboid {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let (min_b, max_b) = (self.min(), self.max());
        let origin = ray.origin();
        let direction = ray.direction();

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut normal_near = Vec3::ZERO;
        let mut normal_far = Vec3::ZERO;

        // Slab method, one axis at a time
        for axis in 0..3 {
            if direction[axis].abs() <= PARALLEL_EPSILON {
                if origin[axis] < min_b[axis] || origin[axis] > max_b[axis] {
                    return false;
                }
                continue;
            }

            let t1 = (min_b[axis] - origin[axis]) / direction[axis];
            let t2 = (max_b[axis] - origin[axis]) / direction[axis];

            // Entering through the min face means the outward normal points to -axis
            let sign = if t1 < t2 { -1.0 } else { 1.0 };
            let mut n_near = Vec3::ZERO;
            n_near[axis] = sign;

            let (slab_near, slab_far) = (t1.min(t2), t1.max(t2));
            if slab_near > t_near {
                t_near = slab_near;
                normal_near = n_near;
            }
            if slab_far < t_far {
                t_far = slab_far;
                normal_far = -n_near;
            }
        }

        if t_near > t_far || t_far < ray_t.min {
            return false;
        }

        let (t, normal) = if t_near > ray_t.min {
            (t_near, normal_near)
        } else {
            (t_far, normal_far)
        };
        if !ray_t.surrounds(t) {
            return false;
        }

        rec.set(ray, t, normal, self.material);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn unit_box() -> Cuboid {
        Cuboid::unit_cube(Vec3::ZERO, Material::default())
    }

    #[test]
    fn test_box_hit_each_face() {
        let cases = [
            (Vec3::new(-3.0, 0.1, 0.2), Vec3::X, -Vec3::X),
            (Vec3::new(3.0, 0.1, 0.2), -Vec3::X, Vec3::X),
            (Vec3::new(0.1, -3.0, 0.2), Vec3::Y, -Vec3::Y),
            (Vec3::new(0.1, 3.0, 0.2), -Vec3::Y, Vec3::Y),
            (Vec3::new(0.1, 0.2, -3.0), Vec3::Z, -Vec3::Z),
            (Vec3::new(0.1, 0.2, 3.0), -Vec3::Z, Vec3::Z),
        ];

        for (origin, direction, expected_normal) in cases {
            let ray = Ray::new(origin, direction);
            let mut rec = HitRecord::default();
            assert!(unit_box().hit(&ray, Interval::from_min(EPSILON), &mut rec));
            assert!((rec.t - 2.5).abs() < 1e-5, "t = {}", rec.t);
            assert_eq!(rec.normal, expected_normal);
        }
    }

    #[test]
    fn test_box_hit_from_inside_uses_far_face() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let mut rec = HitRecord::default();
        assert!(unit_box().hit(&ray, Interval::from_min(EPSILON), &mut rec));
        assert!((rec.t - 0.5).abs() < 1e-5);
        assert_eq!(rec.normal, Vec3::X);
    }

    #[test]
    fn test_box_degenerate_axis_outside_slab() {
        // Ray travels along +Z but sits above the box on Y
        let ray = Ray::new(Vec3::new(0.0, 2.0, -3.0), Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(!unit_box().hit(&ray, Interval::from_min(EPSILON), &mut rec));
    }

    #[test]
    fn test_box_miss_diagonal() {
        let ray = Ray::new(Vec3::new(-3.0, 2.0, 0.0), Vec3::new(1.0, 0.1, 0.0));
        let mut rec = HitRecord::default();
        assert!(!unit_box().hit(&ray, Interval::from_min(EPSILON), &mut rec));
    }

    #[test]
    fn test_box_behind_ray() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(!unit_box().hit(&ray, Interval::from_min(EPSILON), &mut rec));
    }

    #[test]
    fn test_box_from_size() {
        let b = Cuboid::from_size(Vec3::ONE, Vec3::new(2.0, 4.0, 6.0), Material::default());
        assert_eq!(b.min(), Vec3::new(0.0, -1.0, -2.0));
        assert_eq!(b.max(), Vec3::new(2.0, 3.0, 4.0));
    }
}
