//! Render a showcase scene and save it as a PNG.
//!
//! Usage: cargo run --example render_png -- [output.png] [width] [height]
//! Set RUST_LOG=debug to see render statistics.

use anyhow::{Context, Result};
use lumen_tracer::{render, Color, Cuboid, Cylinder, Light, Material, Scene, Sphere, Vec3};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "lumen.png".to_string());
    let width: u32 = match args.next() {
        Some(w) => w.parse().context("width must be a positive integer")?,
        None => 640,
    };
    let height: u32 = match args.next() {
        Some(h) => h.parse().context("height must be a positive integer")?,
        None => 480,
    };

    let scene = build_scene();
    log::info!(
        "Scene has {} objects and {} lights",
        scene.object_count(),
        scene.light_count()
    );

    let bytes = render(&scene, width, height);
    let image = image::RgbaImage::from_raw(width, height, bytes)
        .context("render returned a buffer of the wrong size")?;
    image
        .save(&output)
        .with_context(|| format!("failed to write {}", output))?;

    log::info!("Saved {}", output);
    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::empty();
    scene.set_ground_visible(true);
    scene.set_grid_scale(1.0);

    // Center row: glass between a matte and a metal sphere
    scene.add_object(Sphere::new(
        Vec3::new(-2.2, 0.0, 0.5),
        1.0,
        Material::matte(Color::new(0.8, 0.3, 0.2)),
    ));
    scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0, Material::glass()));
    scene.add_object(Sphere::new(
        Vec3::new(2.2, 0.0, 0.5),
        1.0,
        Material::metal(Color::new(0.9, 0.75, 0.4)),
    ));

    // Back row
    scene.add_object(Cuboid::from_size(
        Vec3::new(-1.2, -0.4, 3.0),
        Vec3::new(1.2, 1.2, 1.2),
        Material::plastic(Color::new(0.2, 0.5, 0.9)),
    ));
    scene.add_object(Cylinder::new(
        Vec3::new(1.4, -1.0, 3.2),
        0.6,
        1.8,
        Material::glossy(Color::new(0.3, 0.8, 0.4)),
    ));
    scene.add_object(Sphere::new(Vec3::new(0.0, 1.4, 4.5), 1.2, Material::mirror()));

    // Key light with a soft penumbra, plus a dim cool fill
    scene.set_light_position(0, Vec3::new(3.0, 5.0, -3.0));
    scene.set_light_radius(0, 0.6);
    scene.add_light(Light::new(
        Vec3::new(-4.0, 3.0, -2.0),
        Color::new(0.6, 0.7, 1.0),
        0.4,
    ));

    scene.set_camera_position(Vec3::new(0.0, 1.5, -6.0));
    scene.set_camera_target(Vec3::new(0.0, 0.0, 1.5));
    scene.set_camera_fov(55.0);

    scene.set_soft_shadows(true);
    scene.set_shadow_samples(16);
    scene.set_anti_aliasing(1);
    scene.set_max_depth(6);

    scene
}
