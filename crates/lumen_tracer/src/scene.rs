//! The scene: objects, ground plane, lights, camera and render settings.
//!
//! All state changes go through the setters below; rendering only ever
//! borrows the scene immutably. Out-of-range indices are ignored by setters
//! and answered with a neutral default by getters.

use crate::{
    renderer::{AntiAliasing, RenderConfig},
    sampling, Camera, GroundPlane, HitRecord, Hittable, Light, Material, Primitive, Sphere,
    EPSILON,
};
use lumen_math::{vector, Color, Interval, Ray, Vec3};
use rand::RngCore;
use thiserror::Error;

/// Light reaching a point that is fully occluded. Keeps shadows from going black.
pub const SHADOW_FLOOR: f32 = 0.3;

/// Errors returned by scene operations that refuse their input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    #[error("Cannot remove the last light in the scene")]
    LastLight,

    #[error("No light at index {0}")]
    LightIndex(usize),

    #[error("No object at index {0}")]
    ObjectIndex(usize),
}

/// A renderable scene.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<Primitive>,
    ground: GroundPlane,
    lights: Vec<Light>,
    camera: Camera,
    /// Sky color straight up
    background_color: Color,
    /// Sky color straight down
    horizon_color: Color,
    config: RenderConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// The default scene: a red sphere at the origin above the grid floor,
    /// lit by a single point light.
    pub fn new() -> Self {
        Self {
            objects: vec![Primitive::Sphere(Sphere::new(
                Vec3::ZERO,
                1.0,
                Material::default(),
            ))],
            ground: GroundPlane::default(),
            lights: vec![Light::default()],
            camera: Camera::new(),
            background_color: Color::new(0.08, 0.08, 0.1),
            horizon_color: Color::new(0.22, 0.22, 0.26),
            config: RenderConfig::default(),
        }
    }

    /// A scene with no objects, no ground and the default light.
    pub fn empty() -> Self {
        let mut scene = Self::new();
        scene.objects.clear();
        scene.ground.visible = false;
        scene
    }

    // =========================================================================
    // Tracing
    // =========================================================================

    /// Nearest hit along `ray`, or `None` if it escapes to the background.
    pub fn trace(&self, ray: &Ray) -> Option<HitRecord> {
        let mut rec = HitRecord::default();
        self.hit(ray, Interval::from_min(EPSILON), &mut rec).then_some(rec)
    }

    /// True if anything blocks `ray` inside `ray_t`. Stops at the first hit.
    pub fn is_occluded(&self, ray: &Ray, ray_t: Interval) -> bool {
        let mut rec = HitRecord::default();
        self.objects.iter().any(|object| object.hit(ray, ray_t, &mut rec))
            || self.ground.hit(ray, ray_t, &mut rec)
    }

    /// True if something sits between `point` and `light_position`.
    pub fn is_in_shadow(&self, point: Vec3, light_position: Vec3) -> bool {
        let to_light = light_position - point;
        let distance = to_light.length();
        let direction = vector::normalize(to_light);
        if direction == Vec3::ZERO {
            return false;
        }

        let shadow_ray = Ray::new(point + direction * EPSILON, direction);
        self.is_occluded(&shadow_ray, Interval::new(EPSILON, distance))
    }

    /// Fraction of `light` reaching `point`, in [0.3, 1.0].
    ///
    /// Point lights (or soft shadows turned off) give a hard 0.3 / 1.0 answer.
    /// Area lights are sampled on an n x n stratified grid over the disk facing
    /// the point, with `n = round(sqrt(shadow_samples))` and at least 2.
    pub fn shadow_factor(&self, point: Vec3, light: &Light, rng: &mut dyn RngCore) -> f32 {
        if !self.config.soft_shadows || !light.is_area() {
            return if self.is_in_shadow(point, light.position) {
                SHADOW_FLOOR
            } else {
                1.0
            };
        }

        let n = ((self.config.shadow_samples as f32).sqrt().round() as u32).max(2);
        let mut lit = 0u32;
        for j in 0..n {
            for i in 0..n {
                let u = sampling::stratified(i, j, n, rng);
                let sample = light.sample_disk_facing(point, u);
                if !self.is_in_shadow(point, sample) {
                    lit += 1;
                }
            }
        }

        let visibility = lit as f32 / (n * n) as f32;
        SHADOW_FLOOR + (1.0 - SHADOW_FLOOR) * visibility
    }

    /// Sky gradient from the horizon color (looking down) to the background
    /// color (looking up).
    pub fn background(&self, ray: &Ray) -> Color {
        let t = ((ray.direction().y + 1.0) * 0.5).clamp(0.0, 1.0);
        self.horizon_color.lerp(self.background_color, t)
    }

    // =========================================================================
    // Camera
    // =========================================================================

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera.position()
    }

    pub fn set_camera_position(&mut self, position: Vec3) {
        self.camera.set_position(position);
    }

    pub fn camera_target(&self) -> Vec3 {
        self.camera.target()
    }

    pub fn set_camera_target(&mut self, target: Vec3) {
        self.camera.set_target(target);
    }

    pub fn camera_fov(&self) -> f32 {
        self.camera.fov()
    }

    pub fn set_camera_fov(&mut self, fov: f32) {
        self.camera.set_fov(fov);
    }

    pub fn orbit_camera(&mut self, dx: f32, dy: f32) {
        self.camera.orbit(dx, dy);
    }

    pub fn zoom_camera(&mut self, delta: f32) {
        self.camera.zoom(delta);
    }

    // =========================================================================
    // Lights
    // =========================================================================

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn light(&self, index: usize) -> Option<&Light> {
        self.lights.get(index)
    }

    fn light_mut(&mut self, index: usize) -> Option<&mut Light> {
        let light = self.lights.get_mut(index);
        if light.is_none() {
            log::debug!("Ignoring update for missing light {}", index);
        }
        light
    }

    pub fn light_position(&self, index: usize) -> Vec3 {
        self.light(index).map_or(Vec3::ZERO, |l| l.position)
    }

    pub fn set_light_position(&mut self, index: usize, position: Vec3) {
        if let Some(light) = self.light_mut(index) {
            light.position = position;
        }
    }

    pub fn light_color(&self, index: usize) -> Color {
        self.light(index).map_or(Color::ZERO, |l| l.color)
    }

    pub fn set_light_color(&mut self, index: usize, color: Color) {
        if let Some(light) = self.light_mut(index) {
            light.set_color(color);
        }
    }

    pub fn light_intensity(&self, index: usize) -> f32 {
        self.light(index).map_or(0.0, |l| l.intensity())
    }

    pub fn set_light_intensity(&mut self, index: usize, intensity: f32) {
        if let Some(light) = self.light_mut(index) {
            light.set_intensity(intensity);
        }
    }

    pub fn light_radius(&self, index: usize) -> f32 {
        self.light(index).map_or(0.0, |l| l.radius())
    }

    pub fn set_light_radius(&mut self, index: usize, radius: f32) {
        if let Some(light) = self.light_mut(index) {
            light.set_radius(radius);
        }
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Remove a light. The scene always keeps at least one.
    pub fn remove_light(&mut self, index: usize) -> Result<Light, SceneError> {
        if index >= self.lights.len() {
            return Err(SceneError::LightIndex(index));
        }
        if self.lights.len() == 1 {
            log::warn!("Refusing to remove the last light");
            return Err(SceneError::LastLight);
        }
        Ok(self.lights.remove(index))
    }

    /// Replace all lights with a single default light.
    pub fn reset_lights(&mut self) {
        self.lights = vec![Light::default()];
    }

    // =========================================================================
    // Objects
    // =========================================================================

    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn object(&self, index: usize) -> Option<&Primitive> {
        self.objects.get(index)
    }

    /// Add an object and return its index.
    pub fn add_object(&mut self, object: impl Into<Primitive>) -> usize {
        self.objects.push(object.into());
        self.objects.len() - 1
    }

    pub fn remove_object(&mut self, index: usize) -> Result<Primitive, SceneError> {
        if index >= self.objects.len() {
            return Err(SceneError::ObjectIndex(index));
        }
        Ok(self.objects.remove(index))
    }

    pub fn clear_objects(&mut self) {
        self.objects.clear();
    }

    /// Replace the whole object list, e.g. when loading a preset layout.
    pub fn set_objects(&mut self, objects: Vec<Primitive>) {
        log::debug!("Loading {} objects", objects.len());
        self.objects = objects;
    }

    fn object_material_mut(&mut self, index: usize) -> Option<&mut Material> {
        let material = self.objects.get_mut(index).map(Primitive::material_mut);
        if material.is_none() {
            log::debug!("Ignoring material update for missing object {}", index);
        }
        material
    }

    /// Material of object `index`, or the default material if there is none.
    pub fn object_material(&self, index: usize) -> Material {
        self.object(index).map_or_else(Material::default, |o| *o.material())
    }

    pub fn set_object_material(&mut self, index: usize, material: Material) {
        if let Some(m) = self.object_material_mut(index) {
            *m = material;
        }
    }

    pub fn set_object_color(&mut self, index: usize, color: Color) {
        if let Some(m) = self.object_material_mut(index) {
            m.set_color(color);
        }
    }

    pub fn set_object_specular(&mut self, index: usize, specular: f32) {
        if let Some(m) = self.object_material_mut(index) {
            m.set_specular(specular);
        }
    }

    pub fn set_object_shininess(&mut self, index: usize, shininess: f32) {
        if let Some(m) = self.object_material_mut(index) {
            m.set_shininess(shininess);
        }
    }

    pub fn set_object_reflectivity(&mut self, index: usize, reflectivity: f32) {
        if let Some(m) = self.object_material_mut(index) {
            m.set_reflectivity(reflectivity);
        }
    }

    pub fn set_object_transparency(&mut self, index: usize, transparency: f32) {
        if let Some(m) = self.object_material_mut(index) {
            m.set_transparency(transparency);
        }
    }

    pub fn set_object_refractive_index(&mut self, index: usize, refractive_index: f32) {
        if let Some(m) = self.object_material_mut(index) {
            m.set_refractive_index(refractive_index);
        }
    }

    // =========================================================================
    // Ground and background
    // =========================================================================

    pub fn ground(&self) -> &GroundPlane {
        &self.ground
    }

    pub fn set_ground_visible(&mut self, visible: bool) {
        self.ground.visible = visible;
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        self.ground.show_grid = visible;
    }

    pub fn set_grid_scale(&mut self, scale: f32) {
        self.ground.set_grid_scale(scale);
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = vector::clamp01(color);
    }

    pub fn horizon_color(&self) -> Color {
        self.horizon_color
    }

    pub fn set_horizon_color(&mut self, color: Color) {
        self.horizon_color = vector::clamp01(color);
    }

    // =========================================================================
    // Render settings
    // =========================================================================

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace all render settings at once. Values are clamped.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config.clamped();
    }

    /// Set the recursion limit, clamped to [1, 10].
    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.config.max_depth = max_depth;
        self.config = self.config.clamped();
    }

    pub fn set_soft_shadows(&mut self, enabled: bool) {
        self.config.soft_shadows = enabled;
    }

    /// Set the soft shadow sample budget, clamped to [1, 64].
    pub fn set_shadow_samples(&mut self, samples: u32) {
        self.config.shadow_samples = samples;
        self.config = self.config.clamped();
    }

    /// Set the anti-aliasing level: 0 (off), 1 (4 spp) or 2 (16 spp).
    pub fn set_anti_aliasing(&mut self, level: u32) {
        self.config.anti_aliasing = AntiAliasing::from_level(level);
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if object.hit(ray, ray_t.with_max(closest_so_far), rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        if self.ground.hit(ray, ray_t.with_max(closest_so_far), rec) {
            hit_anything = true;
        }

        hit_anything
    }
}
