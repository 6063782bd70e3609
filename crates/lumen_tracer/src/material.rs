//! Surface material model.
//!
//! A single Blinn-Phong style attribute bundle with optional mirror
//! reflection and refraction. Presets are plain constructors that fill the
//! bundle; there are no per-preset types.

use lumen_math::{vector, Color};

/// Surface material properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Albedo color (RGB, 0-1)
    pub color: Color,
    /// Weight of the ambient term
    pub ambient: f32,
    /// Weight of the Lambertian term
    pub diffuse: f32,
    /// Specular highlight intensity (0 = matte)
    pub specular: f32,
    /// Specular exponent (higher = tighter highlight)
    pub shininess: f32,
    /// Mirror reflection amount (0-1)
    pub reflectivity: f32,
    /// Transparency amount (0-1)
    pub transparency: f32,
    /// Index of refraction (1.0 = vacuum, 1.5 = glass, 2.42 = diamond)
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::new(0.9, 0.2, 0.15),
            ambient: 0.1,
            diffuse: 0.7,
            specular: 0.5,
            shininess: 32.0,
            reflectivity: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Create an opaque material with the given albedo.
    pub fn new(color: Color) -> Self {
        Self {
            color: vector::clamp01(color),
            ..Default::default()
        }
    }

    /// Set the specular highlight parameters.
    pub fn with_specular(mut self, specular: f32, shininess: f32) -> Self {
        self.set_specular(specular);
        self.set_shininess(shininess);
        self
    }

    /// Set the mirror reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.set_reflectivity(reflectivity);
        self
    }

    /// Set transparency and index of refraction.
    pub fn with_transparency(mut self, transparency: f32, refractive_index: f32) -> Self {
        self.set_transparency(transparency);
        self.set_refractive_index(refractive_index);
        self
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = vector::clamp01(color);
    }

    pub fn set_specular(&mut self, specular: f32) {
        self.specular = specular.clamp(0.0, 1.0);
    }

    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess.clamp(1.0, 1024.0);
    }

    pub fn set_reflectivity(&mut self, reflectivity: f32) {
        self.reflectivity = reflectivity.clamp(0.0, 1.0);
    }

    pub fn set_transparency(&mut self, transparency: f32) {
        self.transparency = transparency.clamp(0.0, 1.0);
    }

    pub fn set_refractive_index(&mut self, refractive_index: f32) {
        self.refractive_index = refractive_index.max(1.0);
    }

    /// True if the surface lets light through.
    pub fn is_transparent(&self) -> bool {
        self.transparency > crate::EPSILON
    }

    /// True if the surface spawns mirror reflection rays.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > crate::EPSILON
    }

    // =========================================================================
    // Presets
    // =========================================================================

    pub fn matte(color: Color) -> Self {
        Self::new(color).with_specular(0.1, 8.0)
    }

    pub fn plastic(color: Color) -> Self {
        Self::new(color)
            .with_specular(0.4, 32.0)
            .with_reflectivity(0.1)
    }

    pub fn glossy(color: Color) -> Self {
        Self::new(color)
            .with_specular(0.6, 64.0)
            .with_reflectivity(0.3)
    }

    pub fn metal(color: Color) -> Self {
        Self::new(color)
            .with_specular(0.9, 128.0)
            .with_reflectivity(0.7)
    }

    pub fn mirror() -> Self {
        Self::new(Color::splat(0.95))
            .with_specular(1.0, 256.0)
            .with_reflectivity(0.95)
    }

    pub fn glass() -> Self {
        Self::transparent(Color::ONE, 0.9, 1.5)
    }

    pub fn water() -> Self {
        Self::transparent(Color::new(0.85, 0.95, 1.0), 0.85, 1.33)
    }

    pub fn diamond() -> Self {
        Self::transparent(Color::ONE, 0.95, 2.42)
    }

    fn transparent(color: Color, transparency: f32, refractive_index: f32) -> Self {
        Self {
            ambient: 0.05,
            diffuse: 0.1,
            ..Self::new(color)
        }
        .with_specular(1.0, 256.0)
        .with_transparency(transparency, refractive_index)
    }
}
