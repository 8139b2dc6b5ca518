//! Scene types: spheres, point lights and the scene that holds them.
//!
//! A scene is built once and is read-only for the duration of a render.
//! Everything the renderer assumes about it (positive radii, sane
//! refractive indices, finite coordinates) is checked up front by
//! [`Scene::validate`], so the renderer itself never has to fail.

use prism_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material::Material;

/// Errors found while validating a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("sphere {index}: refractive index must be positive and finite, got {value}")]
    InvalidRefractiveIndex { index: usize, value: f32 },

    #[error("sphere {index}: specular exponent must be non-negative, got {value}")]
    InvalidSpecularExponent { index: usize, value: f32 },

    #[error("light {index}: intensity must be positive and finite, got {intensity}")]
    InvalidIntensity { index: usize, intensity: f32 },

    #[error("{what} has a non-finite component")]
    NonFinite { what: String },
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// World-space position
    pub position: Vec3,

    /// Intensity (unit-free scale picked by the scene author)
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// A sphere with a material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// An ordered set of spheres and lights.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Spheres, in insertion order
    pub spheres: Vec<Sphere>,

    /// Point lights, in insertion order
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style sphere insertion.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Builder-style light insertion.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check if the scene has no geometry.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Check every sphere, material and light for values the renderer
    /// cannot handle. Reports the first problem found.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() {
                return Err(SceneError::NonFinite {
                    what: format!("sphere {index} center"),
                });
            }
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            validate_material(index, &sphere.material)?;
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !light.position.is_finite() {
                return Err(SceneError::NonFinite {
                    what: format!("light {index} position"),
                });
            }
            if !(light.intensity > 0.0 && light.intensity.is_finite()) {
                return Err(SceneError::InvalidIntensity {
                    index,
                    intensity: light.intensity,
                });
            }
        }

        Ok(())
    }
}

fn validate_material(index: usize, material: &Material) -> Result<(), SceneError> {
    let value = material.refractive_index;
    if !(value > 0.0 && value.is_finite()) {
        return Err(SceneError::InvalidRefractiveIndex { index, value });
    }

    let value = material.specular_exponent;
    if !(value >= 0.0 && value.is_finite()) {
        return Err(SceneError::InvalidSpecularExponent { index, value });
    }

    if !material.albedo.is_finite() || !material.diffuse_color.is_finite() {
        return Err(SceneError::NonFinite {
            what: format!("sphere {index} material"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default())
    }

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        scene.add_sphere(unit_sphere());
        scene.add_light(Light::new(Vec3::new(0.0, 10.0, 0.0), 1.5));

        assert_eq!(scene.sphere_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_builder_preserves_order() {
        let a = unit_sphere();
        let b = Sphere::new(Vec3::ZERO, 2.0, Material::glass());
        let scene = Scene::new().with_sphere(a).with_sphere(b);

        assert_eq!(scene.spheres, vec![a, b]);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let mut sphere = unit_sphere();
        sphere.radius = 0.0;
        let scene = Scene::new().with_sphere(unit_sphere()).with_sphere(sphere);

        assert_eq!(
            scene.validate(),
            Err(SceneError::InvalidRadius {
                index: 1,
                radius: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_bad_refractive_index() {
        let mut sphere = unit_sphere();
        sphere.material.refractive_index = 0.0;
        let scene = Scene::new().with_sphere(sphere);

        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidRefractiveIndex { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_negative_specular_exponent() {
        let mut sphere = unit_sphere();
        sphere.material.specular_exponent = -1.0;
        let scene = Scene::new().with_sphere(sphere);

        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidSpecularExponent { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_dark_light() {
        let scene = Scene::new().with_light(Light::new(Vec3::ZERO, 0.0));

        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidIntensity { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_position() {
        let scene = Scene::new().with_light(Light::new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0));
        let err = scene.validate().unwrap_err();

        assert_eq!(err.to_string(), "light 0 position has a non-finite component");
    }
}
