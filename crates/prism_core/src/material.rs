//! Surface materials for Phong-style shading.

use prism_math::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Color type alias (RGB, unconstrained until tone mapping)
pub type Color = Vec3;

/// Per-material mixing weights, in order
/// `(diffuse, specular, reflective, refractive)`.
///
/// The weights are independent linear coefficients and need not sum to 1.
pub type Albedo = Vec4;

/// A surface material.
///
/// Materials are small immutable values; every sphere carries its own copy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Index of refraction (1.0 = vacuum, no bending)
    pub refractive_index: f32,

    /// Contribution weights (diffuse, specular, reflective, refractive)
    pub albedo: Albedo,

    /// Base color for the diffuse term
    pub diffuse_color: Color,

    /// Phong exponent, higher values give tighter highlights
    pub specular_exponent: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::new(0.5, 0.5, 0.5))
    }
}

impl Material {
    /// Create a material from all of its parameters.
    pub const fn new(
        refractive_index: f32,
        albedo: Albedo,
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// A plain matte material: diffuse only, no highlight, no bending.
    pub const fn diffuse(color: Color) -> Self {
        Self::new(1.0, Vec4::new(1.0, 0.0, 0.0, 0.0), color, 0.0)
    }

    /// Off-white with a soft highlight and a hint of reflection.
    pub const fn ivory() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.6, 0.3, 0.1, 0.0),
            Vec3::new(0.4, 0.4, 0.3),
            50.0,
        )
    }

    /// Mostly transparent glass.
    pub const fn glass() -> Self {
        Self::new(
            1.5,
            Vec4::new(0.0, 0.5, 0.1, 0.8),
            Vec3::new(0.6, 0.7, 0.8),
            125.0,
        )
    }

    /// Dull red, nearly all diffuse.
    pub const fn red_rubber() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.9, 0.1, 0.0, 0.0),
            Vec3::new(0.3, 0.1, 0.1),
            10.0,
        )
    }

    /// Near-perfect mirror with a very sharp highlight.
    pub const fn mirror() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.0, 10.0, 0.8, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            1425.0,
        )
    }

    /// Look up a named preset material.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "ivory" => Some(Self::ivory()),
            "glass" => Some(Self::glass()),
            "red_rubber" => Some(Self::red_rubber()),
            "mirror" => Some(Self::mirror()),
            _ => None,
        }
    }

    /// Names accepted by [`Material::preset`].
    pub const PRESET_NAMES: [&'static str; 4] = ["ivory", "glass", "red_rubber", "mirror"];
}
