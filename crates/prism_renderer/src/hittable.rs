//! Hittable trait and HitRecord for ray-object intersection.

use prism_core::{Material, Scene};
use prism_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Copy, Debug)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Outward unit surface normal (not flipped toward the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest hit with `ray_t.min <= t < ray_t.max`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

impl Hittable for Scene {
    /// Nearest hit over every sphere. On an exact tie the sphere that comes
    /// first in the scene wins.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
