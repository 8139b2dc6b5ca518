//! Core recursive ray tracer.
//!
//! Implements Whitted-style ray tracing with:
//! - Local Phong shading with hard shadows
//! - Recursive mirror reflection and refraction, bounded by depth
//! - Hue-preserving tone mapping of the finished frame

use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::shading::{illuminate, local_color, offset_origin};
use crate::{Camera, Hittable};
use prism_core::{Color, RenderSettings, Scene};
use prism_math::{normalize_to, reflect, refract, Interval, Ray};
use rayon::prelude::*;

/// Refracted directions shorter than this are treated as total internal
/// reflection.
const REFRACTION_EPSILON: f32 = 1e-2;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Deepest recursion level that still gets shaded
    pub max_depth: u32,
    /// Color returned when a ray hits nothing or recursion runs out
    pub background: Color,
    /// Hits at or beyond this distance are ignored
    pub far_plane: f32,
    /// Offset applied to secondary ray origins
    pub surface_bias: f32,
    /// Constant term added to diffuse intensity
    pub ambient: f32,
    /// Cast shadow rays toward each light
    pub shadows: bool,
    /// Trace mirror reflections
    pub reflections: bool,
    /// Trace refracted rays
    pub refractions: bool,
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            background: Color::new(0.2, 0.7, 0.8),
            far_plane: 1000.0,
            surface_bias: 1e-3,
            ambient: 0.05,
            shadows: true,
            reflections: true,
            refractions: true,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Apply the tracing-related fields of `settings`.
    pub fn with_settings(mut self, settings: &RenderSettings) -> Self {
        if let Some(max_depth) = settings.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(background) = settings.background {
            self.background = background;
        }
        self
    }
}

/// Compute the color seen along `ray`.
///
/// `ray.direction` must be unit length. `depth` counts up from 0 for primary
/// rays; anything deeper than `config.max_depth` sees the background. Each
/// shaded hit spawns a reflected and a refracted ray, so the call tree can
/// grow to `2^(max_depth + 1) - 1` casts.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }

    let Some(rec) = scene.hit(ray, Interval::new(0.0, config.far_plane)) else {
        return config.background;
    };
    let material = rec.material;

    let illumination = illuminate(scene, rec.p, rec.normal, material, ray.direction, config);

    let reflect_color = if config.reflections {
        let reflect_dir = normalize_to(reflect(ray.direction, rec.normal), 1.0);
        let reflect_orig = offset_origin(rec.p, rec.normal, reflect_dir, config.surface_bias);
        cast_ray(&Ray::new(reflect_orig, reflect_dir), scene, depth + 1, config)
    } else {
        Color::ZERO
    };

    let refract_color = if config.refractions {
        let refract_dir = refract(ray.direction, rec.normal, material.refractive_index);
        if refract_dir.length() > REFRACTION_EPSILON {
            let refract_dir = normalize_to(refract_dir, 1.0);
            let refract_orig = offset_origin(rec.p, rec.normal, refract_dir, config.surface_bias);
            cast_ray(&Ray::new(refract_orig, refract_dir), scene, depth + 1, config)
        } else {
            // Total internal reflection: reuse what the mirror ray saw
            reflect_color
        }
    } else {
        Color::ZERO
    };

    local_color(illumination, material)
        + reflect_color * material.albedo.z
        + refract_color * material.albedo.w
}

/// Compress out-of-range colors while keeping their hue, then clamp.
///
/// If the brightest channel exceeds 1, all three are scaled down by it.
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    let color = if max > 1.0 { color * (1.0 / max) } else { color };
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Row-major framebuffer of linear colors.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Row-major index of pixel (x, y).
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
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

    /// Copy a rendered bucket into place.
    pub fn blit(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let offset = local_y as usize * bucket.width as usize + local_x as usize;
                let color = result.pixels[offset];
                self.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }

    /// Tone map every pixel in place.
    pub fn tone_map(&mut self) {
        self.pixels.par_iter_mut().for_each(|c| *c = tone_map(*c));
    }

    /// Convert to packed 8-bit RGB (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.push((255.0 * Interval::UNIT.clamp(color.x)) as u8);
            bytes.push((255.0 * Interval::UNIT.clamp(color.y)) as u8);
            bytes.push((255.0 * Interval::UNIT.clamp(color.z)) as u8);
        }
        bytes
    }

    /// Convert to an `image` buffer ready for encoding.
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.get(x, y);
            image::Rgb([
                (255.0 * Interval::UNIT.clamp(c.x)) as u8,
                (255.0 * Interval::UNIT.clamp(c.y)) as u8,
                (255.0 * Interval::UNIT.clamp(c.z)) as u8,
            ])
        })
    }
}

/// Render the scene at `width` x `height` with the default camera and
/// settings.
pub fn render(scene: &Scene, width: u32, height: u32) -> Framebuffer {
    render_with(scene, &Camera::new(width, height), &RenderConfig::default())
}

/// Render the scene in parallel buckets.
pub fn render_with(scene: &Scene, camera: &Camera, config: &RenderConfig) -> Framebuffer {
    render_buckets(scene, camera, config, |_| {})
}

/// Render the scene in parallel buckets, reporting each bucket as it
/// finishes.
///
/// `on_bucket` runs on worker threads in completion order.
pub fn render_buckets<F>(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    on_bucket: F,
) -> Framebuffer
where
    F: Fn(&BucketResult) + Sync,
{
    let buckets = generate_buckets(camera.image_width, camera.image_height, config.bucket_size);
    log::info!(
        "Rendering {}x{}: {} spheres, {} lights, {} buckets",
        camera.image_width,
        camera.image_height,
        scene.sphere_count(),
        scene.light_count(),
        buckets.len()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .into_par_iter()
        .map(|bucket| {
            let result = BucketResult::new(bucket, render_bucket(&bucket, camera, scene, config));
            log::trace!("Bucket {} done", bucket.index);
            on_bucket(&result);
            result
        })
        .collect();

    let mut framebuffer = Framebuffer::new(camera.image_width, camera.image_height);
    for result in &results {
        framebuffer.blit(result);
    }
    framebuffer.tone_map();

    log::info!("Rendered in {:?}", start.elapsed());
    framebuffer
}

/// Render the scene on the calling thread, pixel by pixel.
pub fn render_serial(scene: &Scene, camera: &Camera, config: &RenderConfig) -> Framebuffer {
    let mut framebuffer = Framebuffer::new(camera.image_width, camera.image_height);

    for j in 0..camera.image_height {
        for i in 0..camera.image_width {
            let color = cast_ray(&camera.primary_ray(i, j), scene, 0, config);
            framebuffer.set(i, j, color);
        }
    }
    framebuffer.tone_map();

    framebuffer
}
