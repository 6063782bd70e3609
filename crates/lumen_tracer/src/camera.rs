//! Orbit camera for ray generation.
//!
//! The camera keeps its orthonormal basis in sync with position, target,
//! up vector, field of view and aspect ratio: every setter recomputes it.
//! Orbit angles are not stored; they are recovered from `position - target`
//! on each call so that a direct `set_position` is always respected.

use lumen_math::{vector, Interval, Ray, Vec3};

/// Valid vertical field of view, in degrees.
pub const FOV_RANGE: Interval = Interval {
    min: 10.0,
    max: 120.0,
};

/// Valid camera-to-target distance for `zoom`.
pub const ZOOM_RANGE: Interval = Interval {
    min: 1.0,
    max: 20.0,
};

/// Polar angle limits for `orbit`, in radians. Keeps the camera off the poles.
const PHI_RANGE: Interval = Interval {
    min: 0.1,
    max: 3.04,
};

/// Radians of rotation per unit of orbit input.
const ORBIT_SPEED: f32 = 0.01;

const MIN_ASPECT_RATIO: f32 = 1e-3;

/// Squared length below which the view direction counts as parallel to `vup`.
const PARALLEL_EPSILON: f32 = 1e-12;

/// A pinhole camera looking from `position` at `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    vup: Vec3,
    /// Vertical field of view in degrees
    fov: f32,
    aspect_ratio: f32,

    // Cached basis (set by update_basis())
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    half_width: f32,
    half_height: f32,
}

impl Camera {
    /// Create a camera at (0, 0, -3) looking at the origin with a 60 degree fov.
    pub fn new() -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, -3.0),
            target: Vec3::ZERO,
            vup: Vec3::Y,
            fov: 60.0,
            aspect_ratio: 1.0,
            forward: Vec3::Z,
            right: -Vec3::X,
            up: Vec3::Y,
            half_width: 0.0,
            half_height: 0.0,
        };
        camera.update_basis();
        camera
    }

    /// Set camera placement.
    pub fn with_position(mut self, position: Vec3, target: Vec3, vup: Vec3) -> Self {
        self.position = position;
        self.target = target;
        self.vup = vup;
        self.update_basis();
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.set_fov(fov);
        self
    }

    /// Set the width / height ratio of the image plane.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.set_aspect_ratio(aspect_ratio);
        self
    }

    fn update_basis(&mut self) {
        self.forward = vector::normalize(self.target - self.position);

        // Looking straight along vup leaves no horizon; borrow another axis
        let mut side = self.forward.cross(self.vup);
        if side.length_squared() < PARALLEL_EPSILON {
            let fallback = if self.forward.z.abs() < 0.9 { Vec3::Z } else { Vec3::X };
            side = self.forward.cross(fallback);
        }
        self.right = vector::normalize(side);
        self.up = vector::normalize(self.right.cross(self.forward));

        self.half_height = (self.fov.to_radians() / 2.0).tan();
        self.half_width = self.half_height * self.aspect_ratio;
    }

    /// Generate a ray through normalized device coordinates `u`, `v` in [-1, 1].
    ///
    /// `u = 1` is the right edge of the image, `v = 1` the top edge.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let direction = self.forward
            + self.right * (u * self.half_width)
            + self.up * (v * self.half_height);
        Ray::new(self.position, direction)
    }

    /// Rotate around the target. `dx` turns around the up axis, `dy` tilts.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= 0.0 {
            return;
        }

        let theta = offset.x.atan2(offset.z) + dx * ORBIT_SPEED;
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos() + dy * ORBIT_SPEED;
        let phi = PHI_RANGE.clamp(phi);

        self.position = self.target
            + Vec3::new(
                phi.sin() * theta.sin(),
                phi.cos(),
                phi.sin() * theta.cos(),
            ) * radius;
        self.update_basis();
    }

    /// Move towards (negative `delta`) or away from the target.
    pub fn zoom(&mut self, delta: f32) {
        let offset = self.position - self.target;
        let distance = offset.length();
        if distance <= 0.0 {
            return;
        }

        let distance = ZOOM_RANGE.clamp(distance + delta);
        self.position = self.target + offset / offset.length() * distance;
        self.update_basis();
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_basis();
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.update_basis();
    }

    pub fn set_up(&mut self, vup: Vec3) {
        self.vup = vup;
        self.update_basis();
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Set the vertical field of view, clamped to [10, 120] degrees.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = FOV_RANGE.clamp(fov);
        self.update_basis();
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio.max(MIN_ASPECT_RATIO);
        self.update_basis();
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
