//! Local Phong shading with hard shadows.

use crate::hittable::Hittable;
use crate::renderer::RenderConfig;
use prism_core::{Color, Material, Scene};
use prism_math::{normalize_to, reflect, Interval, Ray, Vec3};

/// Accumulated light intensity at a surface point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Illumination {
    /// Lambert term summed over visible lights, plus ambient
    pub diffuse: f32,
    /// Phong highlight term summed over visible lights
    pub specular: f32,
}

/// Nudge `point` off the surface along `normal`, toward the side `dir`
/// leaves through, so secondary rays don't re-hit the surface they start on.
#[inline]
pub fn offset_origin(point: Vec3, normal: Vec3, dir: Vec3, bias: f32) -> Vec3 {
    if dir.dot(normal) < 0.0 {
        point - normal * bias
    } else {
        point + normal * bias
    }
}

/// Gather diffuse and specular intensity from every light that can see
/// `point`.
///
/// `view_dir` is the direction of the incoming ray. A light is either fully
/// visible or fully blocked; there is no penumbra.
pub fn illuminate(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    material: &Material,
    view_dir: Vec3,
    config: &RenderConfig,
) -> Illumination {
    let mut diffuse = 0.0;
    let mut specular = 0.0;

    for light in &scene.lights {
        let to_light = light.position - point;
        let light_dist = to_light.length();
        let light_dir = normalize_to(to_light, 1.0);

        if config.shadows && in_shadow(scene, point, normal, light_dir, light_dist, config) {
            continue;
        }

        diffuse += light.intensity * light_dir.dot(normal).max(0.0);

        let highlight = (-reflect(-light_dir, normal).dot(view_dir)).max(0.0);
        specular += highlight.powf(material.specular_exponent) * light.intensity;
    }

    Illumination {
        diffuse: diffuse + config.ambient,
        specular,
    }
}

/// Whether something sits between `point` and a light `light_dist` away.
fn in_shadow(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    light_dir: Vec3,
    light_dist: f32,
    config: &RenderConfig,
) -> bool {
    let shadow_origin = offset_origin(point, normal, light_dir, config.surface_bias);
    let shadow_ray = Ray::new(shadow_origin, light_dir);

    match scene.hit(&shadow_ray, Interval::new(0.0, config.far_plane)) {
        Some(rec) => (rec.p - shadow_origin).length() < light_dist,
        None => false,
    }
}

/// Combine an [`Illumination`] with a material into the local surface color.
#[inline]
pub fn local_color(illumination: Illumination, material: &Material) -> Color {
    material.diffuse_color * illumination.diffuse * material.albedo.x
        + Color::ONE * illumination.specular * material.albedo.y
}
