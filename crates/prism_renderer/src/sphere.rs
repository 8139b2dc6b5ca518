//! Ray-sphere intersection.

use crate::hittable::{HitRecord, Hittable};
use prism_core::Sphere;
use prism_math::{normalize_to, Interval, Ray};

/// Distance along `ray` to the nearest non-negative intersection with
/// `sphere`, or `None` if the sphere is missed or lies entirely behind the
/// ray origin.
///
/// `ray.direction` must be unit length. A ray starting inside the sphere
/// reports the exit point. A tangent ray reports its single touching point.
pub fn intersect(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let l = sphere.center - ray.origin;
    let tca = l.dot(ray.direction);
    let d2 = l.dot(l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;

    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;

    let t = if t0 < 0.0 { t1 } else { t0 };
    if t < 0.0 {
        return None;
    }

    Some(t)
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let t = intersect(ray, self)?;
        if t < ray_t.min || t >= ray_t.max {
            return None;
        }

        let p = ray.at(t);
        Some(HitRecord {
            p,
            normal: normalize_to(p - self.center, 1.0),
            material: &self.material,
            t,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Material;
    use prism_math::Vec3;

    fn sphere_at(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::default())
    }

    #[test]
    fn test_sphere_hit_front() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let t = intersect(&ray, &sphere).expect("ray should hit sphere");
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_distance_minus_radius() {
        for (d, r) in [(10.0_f32, 2.0_f32), (3.5, 0.5), (100.0, 7.25)] {
            let sphere = sphere_at(Vec3::new(d, 0.0, 0.0), r);
            let t = intersect(&Ray::new(Vec3::ZERO, Vec3::X), &sphere).expect("should hit");
            assert!((t - (d - r)).abs() < 1e-3, "d={d} r={r} t={t}");
        }
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -5.0), 1.0);

        // Closest approach is 2 units from the center
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Z);
        assert!(intersect(&ray, &sphere).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(intersect(&ray, &sphere).is_none());
    }

    #[test]
    fn test_origin_inside_uses_exit() {
        let sphere = sphere_at(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        let t = intersect(&ray, &sphere).expect("inside ray must hit the shell");
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_tangent_ray_hits_once() {
        let sphere = sphere_at(Vec3::new(0.0, 1.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let t = intersect(&ray, &sphere).expect("tangent ray is a hit");
        assert!((t - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_hit_record_normal_points_outward() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = sphere
            .hit(&ray, Interval::new(0.0, 1000.0))
            .expect("ray should hit sphere");
        assert!((rec.p - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_hit_respects_interval() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(sphere.hit(&ray, Interval::new(0.0, 4.0)).is_none());
        assert!(sphere.hit(&ray, Interval::new(0.0, 4.5)).is_some());
    }
}
