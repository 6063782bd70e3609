//! Image renderer.
//!
//! Walks the pixel grid in row-major order, shoots a stratified set of
//! primary rays per pixel through the scene camera and averages the shaded
//! colors. Output is either a float [`ImageBuffer`] or RGBA8 bytes.

use crate::{sampling, shading, Camera, Scene};
use lumen_math::{vector, Color, Interval};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::Instant;

const MAX_DEPTH_RANGE: Interval = Interval {
    min: 1.0,
    max: 10.0,
};

const SHADOW_SAMPLES_RANGE: Interval = Interval {
    min: 1.0,
    max: 64.0,
};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 0x5eed_1a7e;

/// Anti-aliasing level: the per-pixel sample grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AntiAliasing {
    /// One jittered sample per pixel
    #[default]
    Off,
    /// 2 x 2 jittered grid
    X4,
    /// 4 x 4 jittered grid
    X16,
}

impl AntiAliasing {
    /// Map a numeric level to a mode. Levels above 2 saturate to `X16`.
    pub fn from_level(level: u32) -> Self {
        match level {
            0 => AntiAliasing::Off,
            1 => AntiAliasing::X4,
            _ => AntiAliasing::X16,
        }
    }

    pub fn level(&self) -> u32 {
        match self {
            AntiAliasing::Off => 0,
            AntiAliasing::X4 => 1,
            AntiAliasing::X16 => 2,
        }
    }

    /// Samples along each pixel axis.
    pub fn grid_size(&self) -> u32 {
        match self {
            AntiAliasing::Off => 1,
            AntiAliasing::X4 => 2,
            AntiAliasing::X16 => 4,
        }
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.grid_size() * self.grid_size()
    }
}

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Maximum recursion depth for reflection and refraction, in [1, 10]
    pub max_depth: u32,
    /// Sample area lights for penumbrae instead of a single shadow ray
    pub soft_shadows: bool,
    /// Shadow rays per area light when soft shadows are on, in [1, 64]
    pub shadow_samples: u32,
    pub anti_aliasing: AntiAliasing,
    /// Seed for pixel jitter and light sampling
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            soft_shadows: false,
            shadow_samples: 16,
            anti_aliasing: AntiAliasing::Off,
            seed: DEFAULT_SEED,
        }
    }
}

impl RenderConfig {
    /// Copy with every numeric setting pulled into its valid range.
    pub fn clamped(self) -> Self {
        Self {
            max_depth: MAX_DEPTH_RANGE.clamp(self.max_depth as f32) as u32,
            shadow_samples: SHADOW_SAMPLES_RANGE.clamp(self.shadow_samples as f32) as u32,
            ..self
        }
    }
}

/// Convert a color to 8-bit RGBA. Channels are clamped, no gamma is applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = vector::clamp01(color) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8, 255]
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to row-major RGBA bytes.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().copied().flat_map(color_to_rgba).collect()
    }
}

/// Render a single pixel, averaging the anti-aliasing sample grid.
///
/// `camera` must already carry the image's aspect ratio.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let aa = scene.config().anti_aliasing;
    let n = aa.grid_size();

    let mut pixel_color = Color::ZERO;
    for j in 0..n {
        for i in 0..n {
            let offset = sampling::stratified(i, j, n, rng);
            let u = 2.0 * (x as f32 + offset.x) / width as f32 - 1.0;
            let v = 1.0 - 2.0 * (y as f32 + offset.y) / height as f32;
            let ray = camera.get_ray(u, v);
            pixel_color += shading::trace_ray(scene, &ray, 0, rng);
        }
    }

    pixel_color / aa.samples_per_pixel() as f32
}

/// Render the scene to a float image.
///
/// Zero width or height gives an empty image. The render is deterministic
/// for a given scene, size and seed.
pub fn render_image(scene: &Scene, width: u32, height: u32) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);
    if width == 0 || height == 0 {
        log::warn!("Skipping render of empty {}x{} image", width, height);
        return image;
    }

    let config = scene.config();
    log::debug!(
        "Rendering {}x{}: {} objects, {} lights, max depth {}, {} spp, soft shadows {}",
        width,
        height,
        scene.object_count(),
        scene.light_count(),
        config.max_depth,
        config.anti_aliasing.samples_per_pixel(),
        config.soft_shadows,
    );

    let start = Instant::now();
    let camera = scene.camera().with_aspect_ratio(width as f32 / height as f32);
    let mut rng = StdRng::seed_from_u64(config.seed);

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(scene, &camera, x, y, width, height, &mut rng);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered {}x{} in {:.2?}", width, height, start.elapsed());
    image
}

/// Render the scene to `width * height * 4` RGBA bytes, row-major from the top-left.
pub fn render(scene: &Scene, width: u32, height: u32) -> Vec<u8> {
    render_image(scene, width, height).to_rgba()
}
