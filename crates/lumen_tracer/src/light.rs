//! Point and spherical area lights.

use crate::sampling;
use lumen_math::{vector, Color, Vec2, Vec3};

/// A light source. A radius of zero makes it a point light; anything larger
/// turns it into a spherical area light that casts soft shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    intensity: f32,
    radius: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(2.0, 2.0, -1.0),
            color: Color::ONE,
            intensity: 1.0,
            radius: 0.0,
        }
    }
}

impl Light {
    /// Create a point light.
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color: vector::clamp01(color),
            intensity: intensity.max(0.0),
            radius: 0.0,
        }
    }

    /// Give the light a physical extent.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.set_radius(radius);
        self
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.max(0.0);
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = vector::clamp01(color);
    }

    /// True for lights with a non-zero radius.
    pub fn is_area(&self) -> bool {
        self.radius > 0.0
    }

    /// Uniform point on the light's sphere surface from two uniform randoms.
    pub fn sample_sphere(&self, u1: f32, u2: f32) -> Vec3 {
        let (theta, phi) = sampling::uniform_sphere_angles(u1, u2);
        let dir = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
        self.position + dir * self.radius
    }

    /// Point on the light's disk as seen from `target`.
    ///
    /// The disk is centered on the light, perpendicular to the light->target
    /// direction, and `u` in [0, 1)^2 is warped with the concentric mapping.
    pub fn sample_disk_facing(&self, target: Vec3, u: Vec2) -> Vec3 {
        let w = vector::normalize(target - self.position);
        if w == Vec3::ZERO {
            return self.position;
        }

        let (tangent, bitangent) = vector::orthonormal_basis(w);
        let d = sampling::concentric_disk(u) * self.radius;
        self.position + tangent * d.x + bitangent * d.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_is_point_light() {
        let light = Light::default();
        assert!(!light.is_area());
        assert_eq!(light.intensity(), 1.0);
    }

    #[test]
    fn test_setters_clamp() {
        let mut light = Light::default();
        light.set_intensity(-3.0);
        light.set_radius(-1.0);
        assert_eq!(light.intensity(), 0.0);
        assert_eq!(light.radius(), 0.0);
    }

    #[test]
    fn test_sphere_samples_on_surface() {
        let light = Light::new(Vec3::new(1.0, 4.0, -2.0), Color::ONE, 1.0).with_radius(0.5);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let p = light.sample_sphere(
                sampling::gen_f32(&mut rng),
                sampling::gen_f32(&mut rng),
            );
            assert!(((p - light.position).length() - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_disk_samples_face_target() {
        let light = Light::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE, 1.0).with_radius(1.0);
        let target = Vec3::ZERO;
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let u = Vec2::new(sampling::gen_f32(&mut rng), sampling::gen_f32(&mut rng));
            let p = light.sample_disk_facing(target, u);
            let offset = p - light.position;
            // Disk lies in the plane perpendicular to the light->target axis
            assert!(offset.y.abs() < 1e-5);
            assert!(offset.length() <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_point_light_samples_collapse() {
        let light = Light::default();
        let p = light.sample_disk_facing(Vec3::ZERO, Vec2::new(0.9, 0.1));
        assert_eq!(p, light.position);
    }
}
