//! Lumen - a Whitted-style CPU ray tracer
//!
//! Renders spheres, boxes, cylinders and a grid ground plane with
//! Blinn-Phong shading, hard or soft shadows, mirror reflection and
//! Fresnel-weighted refraction. The [`Scene`] owns all state and exposes a
//! flat mutation surface; [`render`] turns it into RGBA8 bytes.

mod camera;
mod cuboid;
mod cylinder;
mod hittable;
mod light;
mod material;
mod plane;
mod primitive;
mod renderer;
pub mod sampling;
mod scene;
pub mod shading;
mod sphere;

pub use camera::{Camera, FOV_RANGE, ZOOM_RANGE};
pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use hittable::{HitRecord, Hittable, EPSILON};
pub use light::Light;
pub use material::Material;
pub use plane::GroundPlane;
pub use primitive::Primitive;
pub use renderer::{
    color_to_rgba, render, render_image, render_pixel, AntiAliasing, ImageBuffer, RenderConfig,
    DEFAULT_SEED,
};
pub use scene::{Scene, SceneError, SHADOW_FLOOR};
pub use sphere::Sphere;

/// Re-export the math types used throughout the public API
pub use lumen_math::{Color, Interval, Ray, Vec2, Vec3};
