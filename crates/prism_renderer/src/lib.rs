//! Prism Renderer - recursive CPU ray tracing.
//!
//! A Whitted-style ray tracer over spheres and point lights:
//! - Phong diffuse + specular shading with hard shadows
//! - Mirror reflection and Snell refraction, bounded recursion
//! - Pinhole camera, hue-preserving tone mapping
//! - Bucket-parallel rendering with rayon

mod bucket;
mod camera;
mod hittable;
mod renderer;
mod shading;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable};
pub use renderer::{
    cast_ray, render, render_buckets, render_serial, render_with, tone_map, Framebuffer,
    RenderConfig,
};
pub use shading::{illuminate, local_color, offset_origin, Illumination};
pub use sphere::intersect;

/// Re-export scene and math types so callers need only this crate
pub use prism_core::{Color, Light, Material, Scene, Sphere};
pub use prism_math::{Interval, Ray, Vec3, Vec4};
