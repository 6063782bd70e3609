//! Recursive Whitted-style shading.
//!
//! Every hit is lit locally with Blinn-Phong, then optionally blended with a
//! mirror reflection or, for transparent surfaces, a Fresnel-weighted mix of
//! reflection and refraction. Recursion stops at the scene's max depth.

use crate::{HitRecord, Scene, EPSILON};
use lumen_math::{vector, Color, Ray, Vec3};
use rand::RngCore;

/// Upper bound for Schlick reflectance on transparent surfaces.
const MAX_FRESNEL: f32 = 0.95;

/// Compute the color seen along `ray`.
///
/// `depth` counts the bounces taken so far; primary rays start at 0.
pub fn trace_ray(scene: &Scene, ray: &Ray, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth >= scene.config().max_depth {
        return scene.background(ray);
    }

    let Some(rec) = scene.trace(ray) else {
        return scene.background(ray);
    };

    let local = local_lighting(scene, ray, &rec, rng);
    let material = &rec.material;
    let view_dir = -ray.direction();

    let color = if material.is_transparent() {
        shade_transparent(scene, ray, &rec, local, depth, rng)
    } else if material.is_reflective() {
        let reflect_ray = Ray::new(
            rec.p + rec.normal * EPSILON,
            vector::reflect(ray.direction(), rec.normal),
        );
        let reflected = trace_ray(scene, &reflect_ray, depth + 1, rng);
        let cos_theta = view_dir.dot(rec.normal).clamp(0.0, 1.0);
        let f = reflection_weight(material.reflectivity, cos_theta);
        local * (1.0 - f) + reflected * f
    } else {
        local
    };

    vector::clamp01(color)
}

/// Ambient plus per-light Blinn-Phong diffuse and specular, attenuated by shadows.
pub fn local_lighting(scene: &Scene, ray: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Color {
    let material = &rec.material;
    let view_dir = -ray.direction();

    let mut color = Color::ZERO;
    for light in scene.lights() {
        let light_dir = vector::normalize(light.position - rec.p);

        let n_dot_l = rec.normal.dot(light_dir).max(0.0);
        let diffuse = material.color * n_dot_l * material.diffuse;

        let half_dir = vector::normalize(light_dir + view_dir);
        let n_dot_h = rec.normal.dot(half_dir).max(0.0);
        let specular = light.color * n_dot_h.powf(material.shininess) * material.specular;

        let attenuation = light.intensity() * scene.shadow_factor(rec.p, light, rng);
        color += (diffuse + specular) * attenuation;
    }

    color + material.color * material.ambient
}

fn shade_transparent(
    scene: &Scene,
    ray: &Ray,
    rec: &HitRecord,
    local: Color,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let material = &rec.material;
    let direction = ray.direction();
    let (n1, n2, normal) = interface(direction, rec.normal, material.refractive_index);

    let cos_theta = (-direction).dot(normal).clamp(0.0, 1.0);
    let reflectance = fresnel(n1, n2, cos_theta);

    let reflect_ray = Ray::new(rec.p + normal * EPSILON, vector::reflect(direction, normal));
    let refract_dir = vector::refract(direction, normal, n1 / n2);

    let reflected = trace_ray(scene, &reflect_ray, depth + 1, rng);
    let refracted = if refract_dir == Vec3::ZERO {
        None
    } else {
        let refract_ray = Ray::new(rec.p - normal * EPSILON, refract_dir);
        Some(trace_ray(scene, &refract_ray, depth + 1, rng) * material.color)
    };

    transparent_blend(local, reflected, refracted, reflectance, material.transparency)
}

/// Indices `(n1, n2)` on either side of the surface and the normal facing
/// the incoming ray. Exiting rays swap the indices and flip the normal.
pub(crate) fn interface(direction: Vec3, outward_normal: Vec3, ior: f32) -> (f32, f32, Vec3) {
    // Entering when the ray travels against the outward normal
    if (-direction).dot(outward_normal) > 0.0 {
        (1.0, ior, outward_normal)
    } else {
        (ior, 1.0, -outward_normal)
    }
}

/// Schlick reflectance capped so some light always gets through.
pub(crate) fn fresnel(n1: f32, n2: f32, cos_theta: f32) -> f32 {
    schlick(n1, n2, cos_theta).min(MAX_FRESNEL)
}

/// Blend local shading with the transparent term.
///
/// Without a refracted color (total internal reflection) the reflection
/// stands in for the whole transparent term.
pub(crate) fn transparent_blend(
    local: Color,
    reflected: Color,
    refracted: Option<Color>,
    fresnel: f32,
    transparency: f32,
) -> Color {
    match refracted {
        None => local * (1.0 - transparency) + reflected * transparency,
        Some(refracted) => {
            let transmitted = reflected * fresnel + refracted * (1.0 - fresnel);
            local * (1.0 - transparency) + transmitted * transparency
        }
    }
}

/// Schlick's approximation of Fresnel reflectance going from `n1` into `n2`.
pub fn schlick(n1: f32, n2: f32, cos_theta: f32) -> f32 {
    let r0 = ((n1 - n2) / (n1 + n2)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
}

/// Mirror weight with a boost towards grazing angles, at most 1.
pub fn reflection_weight(reflectivity: f32, cos_theta: f32) -> f32 {
    (reflectivity + (1.0 - reflectivity) * (1.0 - cos_theta).powi(3)).min(1.0)
}
