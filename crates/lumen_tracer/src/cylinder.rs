//! Finite cylinder aligned with the Y axis, with optional end caps.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use lumen_math::{Interval, Ray, Vec3};

/// Below this the ray is treated as parallel to the axis (no body hit) or
/// parallel to the caps (no cap hit).
const PARALLEL_EPSILON: f32 = 1e-4;

/// A Y-aligned cylinder standing on its base center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// Center of the bottom cap
    pub center: Vec3,
    radius: f32,
    height: f32,
    pub material: Material,
    pub capped: bool,
}

impl Cylinder {
    pub fn new(center: Vec3, radius: f32, height: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            height: height.max(0.0),
            material,
            capped: true,
        }
    }

    /// Open tube without end caps.
    pub fn uncapped(mut self) -> Self {
        self.capped = false;
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Nearest valid hit on the curved body as `(t, outward normal)`.
    fn hit_body(&self, ray: &Ray, ray_t: Interval) -> Option<(f32, Vec3)> {
        let ro = ray.origin() - self.center;
        let rd = ray.direction();

        // x^2 + z^2 = r^2 in the cylinder's local frame
        let a = rd.x * rd.x + rd.z * rd.z;
        if a.abs() <= PARALLEL_EPSILON {
            return None;
        }
        let b = 2.0 * (ro.x * rd.x + ro.z * rd.z);
        let c = ro.x * ro.x + ro.z * ro.z - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        [(-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a)]
            .into_iter()
            .filter(|&t| ray_t.surrounds(t))
            .find_map(|t| {
                let p = ray.at(t);
                let y = p.y - self.center.y;
                (0.0..=self.height).contains(&y).then(|| {
                    let normal = Vec3::new(p.x - self.center.x, 0.0, p.z - self.center.z)
                        .normalize_or_zero();
                    (t, normal)
                })
            })
    }

    /// Nearest valid hit on either end cap as `(t, outward normal)`.
    fn hit_caps(&self, ray: &Ray, ray_t: Interval) -> Option<(f32, Vec3)> {
        let rd = ray.direction();
        if !self.capped || rd.y.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let caps = [
            (self.center.y, -Vec3::Y),
            (self.center.y + self.height, Vec3::Y),
        ];

        caps.into_iter()
            .filter_map(|(cap_y, normal)| {
                let t = (cap_y - ray.origin().y) / rd.y;
                if !ray_t.surrounds(t) {
                    return None;
                }
                let p = ray.at(t);
                let dx = p.x - self.center.x;
                let dz = p.z - self.center.z;
                (dx * dx + dz * dz <= self.radius * self.radius).then_some((t, normal))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
    }
}

impl Hittable for Cylinder {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let nearest = match (self.hit_body(ray, ray_t), self.hit_caps(ray, ray_t)) {
            (Some(body), Some(cap)) => Some(if body.0 < cap.0 { body } else { cap }),
            (body, cap) => body.or(cap),
        };

        match nearest {
            Some((t, normal)) => {
                rec.set(ray, t, normal, self.material);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn cylinder() -> Cylinder {
        // Radius 1, spans y in [0, 2]
        Cylinder::new(Vec3::ZERO, 1.0, 2.0, Material::default())
    }

    #[test]
    fn test_cylinder_body_hit() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, -5.0), Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(cylinder().hit(&ray, Interval::from_min(EPSILON), &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!((rec.normal - (-Vec3::Z)).length() < 1e-5);
    }

    #[test]
    fn test_cylinder_top_cap_hit() {
        let ray = Ray::new(Vec3::new(0.2, 5.0, 0.3), -Vec3::Y);
        let mut rec = HitRecord::default();

        assert!(cylinder().hit(&ray, Interval::from_min(EPSILON), &mut rec));
        assert!((rec.t - 3.0).abs() < 1e-5);
        assert_eq!(rec.normal, Vec3::Y);
    }

    #[test]
    fn test_cylinder_bottom_cap_hit() {
        let ray = Ray::new(Vec3::new(0.0, -4.0, 0.0), Vec3::Y);
        let mut rec = HitRecord::default();

        assert!(cylinder().hit(&ray, Interval::from_min(EPSILON), &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert_eq!(rec.normal, -Vec3::Y);
    }

    #[test]
    fn test_uncapped_cylinder_is_open() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y);
        let mut rec = HitRecord::default();
        assert!(!cylinder().uncapped().hit(&ray, Interval::from_min(EPSILON), &mut rec));
    }

    #[test]
    fn test_cylinder_above_height_misses_body() {
        let ray = Ray::new(Vec3::new(0.0, 3.0, -5.0), Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(!cylinder().hit(&ray, Interval::from_min(EPSILON), &mut rec));
    }

    #[test]
    fn test_cylinder_picks_nearest_of_body_and_cap() {
        // Diagonal ray entering through the side and leaving through the top cap
        let ray = Ray::new(Vec3::new(-3.0, 0.5, 0.0), Vec3::new(1.0, 0.5, 0.0));
        let mut rec = HitRecord::default();
        assert!(cylinder().hit(&ray, Interval::from_min(EPSILON), &mut rec));
        assert!((rec.p.x - (-1.0)).abs() < 1e-4);
        assert!((rec.normal - (-Vec3::X)).length() < 1e-4);
    }
}
