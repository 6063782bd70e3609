//! Infinite ground plane with a procedural viewport grid.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, EPSILON,
};
use lumen_math::{vector, Color, Interval, Ray, Vec3};

/// Spacing of major grid lines, in minor grid cells.
const MAJOR_LINE_SPACING: f32 = 5.0;

/// How quickly the grid fades into the floor color with distance.
const GRID_FADE_RATE: f32 = 0.05;

const AXIS_X_TINT: Color = Color::new(0.5, 0.2, 0.2);
const AXIS_Z_TINT: Color = Color::new(0.2, 0.5, 0.5);

/// An infinite plane, optionally overlaid with a modeling-tool style grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub point: Vec3,
    normal: Vec3,
    pub material: Material,
    /// Whether the plane takes part in tracing at all
    pub visible: bool,
    pub show_grid: bool,
    grid_scale: f32,
    pub grid_thickness: f32,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            point: Vec3::new(0.0, -1.0, 0.0),
            normal: Vec3::Y,
            material: Material::new(Color::new(0.15, 0.15, 0.17)).with_specular(0.1, 16.0),
            visible: true,
            show_grid: true,
            grid_scale: 1.0,
            grid_thickness: 0.02,
        }
    }
}

impl GroundPlane {
    /// Create a plane through `point` with the given normal.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: vector::normalize(normal),
            material,
            ..Default::default()
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn grid_scale(&self) -> f32 {
        self.grid_scale
    }

    /// Set the minor grid spacing, clamped to [0.1, 10].
    pub fn set_grid_scale(&mut self, scale: f32) {
        self.grid_scale = scale.clamp(0.1, 10.0);
    }

    /// Floor color at a world point, with the grid overlay applied.
    pub fn grid_color(&self, p: Vec3) -> Color {
        let base = self.material.color;
        let (x, z) = (p.x, p.z);

        let scaled_x = x / self.grid_scale;
        let scaled_z = z / self.grid_scale;

        let fade = (-(x * x + z * z).sqrt() * GRID_FADE_RATE).exp().clamp(0.0, 1.0);

        let on_axis_x = x.abs() < self.grid_thickness * 2.0;
        let on_axis_z = z.abs() < self.grid_thickness * 2.0;
        let on_major_line = lattice_distance(scaled_x / MAJOR_LINE_SPACING)
            < self.grid_thickness * 0.6
            || lattice_distance(scaled_z / MAJOR_LINE_SPACING) < self.grid_thickness * 0.6;
        let on_minor_line = lattice_distance(scaled_x) < self.grid_thickness
            || lattice_distance(scaled_z) < self.grid_thickness;

        if on_axis_x {
            AXIS_Z_TINT * fade + base * (1.0 - fade)
        } else if on_axis_z {
            AXIS_X_TINT * fade + base * (1.0 - fade)
        } else if on_major_line {
            base + Color::splat(0.25 * fade)
        } else if on_minor_line {
            base + Color::splat(0.08 * fade)
        } else {
            base
        }
    }
}

/// Distance from `x` to the nearest integer.
#[inline]
fn lattice_distance(x: f32) -> f32 {
    (x - x.round()).abs()
}

impl Hittable for GroundPlane {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        if !self.visible {
            return false;
        }

        let denom = self.normal.dot(ray.direction());
        if denom.abs() < EPSILON {
            return false;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !ray_t.surrounds(t) {
            return false;
        }

        let mut material = self.material;
        if self.show_grid {
            material.color = self.grid_color(ray.at(t));
        }
        rec.set(ray, t, self.normal, material);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_hit_from_above() {
        let plane = GroundPlane::default();
        let ray = Ray::new(Vec3::new(0.3, 2.0, 0.3), -Vec3::Y);
        let mut rec = HitRecord::default();

        assert!(plane.hit(&ray, Interval::from_min(EPSILON), &mut rec));
        assert!((rec.t - 3.0).abs() < 1e-5);
        assert_eq!(rec.normal, Vec3::Y);
    }

    #[test]
    fn test_parallel_ray_never_hits() {
        let plane = GroundPlane::default();
        let origins = [
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(5.0, 3.0, -2.0),
            Vec3::new(-7.0, -4.0, 9.0),
        ];
        let directions = [Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, -1.0)];

        for origin in origins {
            for direction in directions {
                let ray = Ray::new(origin, direction);
                let mut rec = HitRecord::default();
                assert!(!plane.hit(&ray, Interval::UNIVERSE, &mut rec));
            }
        }
    }

    #[test]
    fn test_plane_behind_ray() {
        let plane = GroundPlane::default();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        let mut rec = HitRecord::default();
        assert!(!plane.hit(&ray, Interval::from_min(EPSILON), &mut rec));
    }

    #[test]
    fn test_hidden_plane_never_hits() {
        let plane = GroundPlane {
            visible: false,
            ..Default::default()
        };
        let ray = Ray::new(Vec3::ZERO, -Vec3::Y);
        let mut rec = HitRecord::default();
        assert!(!plane.hit(&ray, Interval::from_min(EPSILON), &mut rec));
    }

    #[test]
    fn test_grid_colors() {
        let plane = GroundPlane::default();
        let base = plane.material.color;

        // On the x = 0 axis line: teal tint
        let axis = plane.grid_color(Vec3::new(0.0, -1.0, 2.5));
        assert!(axis.y > base.y && axis.z > base.z);

        // Inside a cell: untouched floor
        assert_eq!(plane.grid_color(Vec3::new(2.5, -1.0, 2.5)), base);

        // Major line (every 5 units) is brighter than a minor line at similar distance
        let major = plane.grid_color(Vec3::new(5.0, -1.0, 2.5));
        let minor = plane.grid_color(Vec3::new(4.0, -1.0, 2.5));
        assert!(major.x > minor.x);
        assert!(minor.x > base.x);
    }

    #[test]
    fn test_grid_fades_with_distance() {
        let plane = GroundPlane::default();
        let near = plane.grid_color(Vec3::new(1.0, -1.0, 0.5));
        let far = plane.grid_color(Vec3::new(40.0, -1.0, 0.5));
        assert!(near.x > far.x);
    }

    #[test]
    fn test_grid_scale_clamped() {
        let mut plane = GroundPlane::default();
        plane.set_grid_scale(0.0);
        assert_eq!(plane.grid_scale(), 0.1);
        plane.set_grid_scale(50.0);
        assert_eq!(plane.grid_scale(), 10.0);
    }

    #[test]
    fn test_grid_disabled_keeps_material() {
        let plane = GroundPlane {
            show_grid: false,
            ..Default::default()
        };
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), -Vec3::Y);
        let mut rec = HitRecord::default();
        assert!(plane.hit(&ray, Interval::from_min(EPSILON), &mut rec));
        assert_eq!(rec.material, plane.material);
    }
}
