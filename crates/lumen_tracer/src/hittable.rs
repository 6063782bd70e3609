//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use lumen_math::{Interval, Ray, Vec3};

/// Minimum ray parameter accepted as a hit, and the offset applied to
/// secondary ray origins to avoid shadow acne.
pub const EPSILON: f32 = 0.001;

/// Record of a ray-object intersection.
///
/// Created fresh for every query and never stored beyond a single trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Vec3,
    /// Outward surface normal at the intersection (unit length)
    pub normal: Vec3,
    /// Resolved material at the intersection point
    pub material: Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: Material::default(),
            t: f32::INFINITY,
        }
    }
}

impl HitRecord {
    /// Fill in the hit at parameter `t`.
    pub fn set(&mut self, ray: &Ray, t: f32, normal: Vec3, material: Material) {
        self.t = t;
        self.p = ray.at(t);
        self.normal = normal;
        self.material = material;
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside `ray_t`.
    ///
    /// Returns true on a hit and fills in `rec` with the nearest one; `rec`
    /// is left untouched otherwise.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool;
}
