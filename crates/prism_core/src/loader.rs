//! JSON scene file loading.
//!
//! A scene file looks like:
//!
//! ```json
//! {
//!   "materials": { "chalk": { "diffuse_color": [0.9, 0.9, 0.9] } },
//!   "spheres": [
//!     { "center": [-3, 0, -16], "radius": 2, "material": "ivory" },
//!     { "center": [0, 0, -10], "radius": 1, "material": "chalk" },
//!     { "center": [2, 0, -12], "radius": 1,
//!       "material": { "refractive_index": 1.3, "albedo": [0, 0.5, 0.1, 0.8] } }
//!   ],
//!   "lights": [ { "position": [-20, 20, 20], "intensity": 1.5 } ],
//!   "render": { "width": 640, "height": 480 }
//! }
//! ```
//!
//! A material is either an inline object or a name, looked up first in the
//! file's `materials` table and then among the built-in presets.

use std::collections::HashMap;
use std::path::Path;

use prism_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::material::Material;
use crate::scene::{Light, Scene, SceneError, Sphere};
use crate::settings::RenderSettings;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scene: {0}")]
    Invalid(#[from] SceneError),

    #[error("invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("sphere {index}: unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },
}

/// A loaded, validated scene plus any render settings it carries.
#[derive(Clone, Debug, Default)]
pub struct SceneFile {
    pub scene: Scene,
    pub render: RenderSettings,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSceneFile {
    #[serde(default)]
    materials: HashMap<String, Material>,
    #[serde(default)]
    spheres: Vec<RawSphere>,
    #[serde(default)]
    lights: Vec<Light>,
    #[serde(default)]
    render: RenderSettings,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSphere {
    center: Vec3,
    radius: f32,
    #[serde(default)]
    material: MaterialRef,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaterialRef {
    Named(String),
    Inline(Material),
}

impl Default for MaterialRef {
    fn default() -> Self {
        MaterialRef::Inline(Material::default())
    }
}

/// Load and validate a scene file from disk.
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneFile, LoadError> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Parse and validate a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> Result<SceneFile, LoadError> {
    let raw: RawSceneFile = serde_json::from_str(text)?;

    let mut scene = Scene::new();
    for (index, raw_sphere) in raw.spheres.into_iter().enumerate() {
        let material = match raw_sphere.material {
            MaterialRef::Inline(material) => material,
            MaterialRef::Named(name) => match raw.materials.get(&name) {
                Some(material) => *material,
                None => Material::preset(&name)
                    .ok_or(LoadError::UnknownMaterial { index, name })?,
            },
        };
        scene.add_sphere(Sphere::new(raw_sphere.center, raw_sphere.radius, material));
    }
    for light in raw.lights {
        scene.add_light(light);
    }

    scene.validate()?;
    raw.render.check().map_err(LoadError::InvalidSettings)?;

    log::debug!(
        "Parsed scene: {} spheres, {} lights, {} named materials",
        scene.sphere_count(),
        scene.light_count(),
        raw.materials.len()
    );

    Ok(SceneFile {
        scene,
        render: raw.render,
    })
}
