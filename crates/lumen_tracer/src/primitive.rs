//! Tagged union over the scene's object primitives.

use crate::{Cuboid, Cylinder, HitRecord, Hittable, Material, Sphere};
use lumen_math::{Interval, Ray};

/// Any object that can live in the scene's object list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Cuboid(Cuboid),
    Cylinder(Cylinder),
}

impl Primitive {
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => &s.material,
            Primitive::Cuboid(b) => &b.material,
            Primitive::Cylinder(c) => &c.material,
        }
    }

    pub fn material_mut(&mut self) -> &mut Material {
        match self {
            Primitive::Sphere(s) => &mut s.material,
            Primitive::Cuboid(b) => &mut b.material,
            Primitive::Cylinder(c) => &mut c.material,
        }
    }

    /// Short name of the primitive kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Cuboid(_) => "box",
            Primitive::Cylinder(_) => "cylinder",
        }
    }
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        match self {
            Primitive::Sphere(s) => s.hit(ray, ray_t, rec),
            Primitive::Cuboid(b) => b.hit(ray, ray_t, rec),
            Primitive::Cylinder(c) => c.hit(ray, ray_t, rec),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Cuboid> for Primitive {
    fn from(cuboid: Cuboid) -> Self {
        Primitive::Cuboid(cuboid)
    }
}

impl From<Cylinder> for Primitive {
    fn from(cylinder: Cylinder) -> Self {
        Primitive::Cylinder(cylinder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::{Color, Vec3};

    #[test]
    fn test_material_mut_reaches_inner_primitive() {
        let mut p: Primitive = Cuboid::unit_cube(Vec3::ZERO, Material::default()).into();
        p.material_mut().set_reflectivity(0.5);

        match p {
            Primitive::Cuboid(b) => assert_eq!(b.material.reflectivity, 0.5),
            _ => panic!("expected a box"),
        }
    }

    #[test]
    fn test_dispatch_hit() {
        let p: Primitive = Sphere::new(Vec3::ZERO, 1.0, Material::new(Color::ONE)).into();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(p.hit(&ray, Interval::from_min(crate::EPSILON), &mut rec));
        assert_eq!(rec.material.color, Color::ONE);
        assert_eq!(p.kind(), "sphere");
    }
}
