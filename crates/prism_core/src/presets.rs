//! Built-in demo scenes.

use prism_math::Vec3;

use crate::material::{Color, Material};
use crate::scene::{Light, Scene, Sphere};

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 3] = ["classic", "single_sphere", "empty"];

/// Look up a built-in scene by name.
pub fn by_name(name: &str) -> Option<Scene> {
    match name {
        "classic" => Some(classic()),
        "single_sphere" => Some(single_sphere()),
        "empty" => Some(Scene::new()),
        _ => None,
    }
}

/// Four spheres (ivory, glass, red rubber, mirror) under three lights.
pub fn classic() -> Scene {
    Scene::new()
        .with_sphere(Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::ivory()))
        .with_sphere(Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, Material::glass()))
        .with_sphere(Sphere::new(
            Vec3::new(1.5, -0.5, -18.0),
            3.0,
            Material::red_rubber(),
        ))
        .with_sphere(Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::mirror()))
        .with_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5))
        .with_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8))
        .with_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7))
}

/// One matte sphere, no lights: only the ambient term shows.
pub fn single_sphere() -> Scene {
    Scene::new().with_sphere(Sphere::new(
        Vec3::new(3.0, 0.0, -16.0),
        4.0,
        Material::diffuse(Color::new(0.4, 0.4, 0.3)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_validate() {
        for name in NAMES {
            let scene = by_name(name).expect("listed preset must exist");
            assert!(scene.validate().is_ok(), "preset {name} failed validation");
        }
    }

    #[test]
    fn test_classic_layout() {
        let scene = classic();
        assert_eq!(scene.sphere_count(), 4);
        assert_eq!(scene.light_count(), 3);
        assert_eq!(scene.spheres[1].material, Material::glass());
    }

    #[test]
    fn test_unknown_preset() {
        assert!(by_name("cornell").is_none());
    }
}
