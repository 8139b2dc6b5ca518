//! Render settings carried by scene files.

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

/// Optional render overrides read from a scene file.
///
/// Every field is optional; unset fields leave the renderer's defaults alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: Option<u32>,

    /// Image height in pixels
    pub height: Option<u32>,

    /// Vertical field of view, in degrees
    pub fov_degrees: Option<f32>,

    /// Maximum recursion depth for reflection and refraction
    pub max_depth: Option<u32>,

    /// Color returned by rays that escape the scene
    pub background: Option<Vec3>,
}

impl RenderSettings {
    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: RenderSettings) -> RenderSettings {
        RenderSettings {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            fov_degrees: other.fov_degrees.or(self.fov_degrees),
            max_depth: other.max_depth.or(self.max_depth),
            background: other.background.or(self.background),
        }
    }

    /// Describe the first unusable value, if any.
    pub fn check(&self) -> Result<(), String> {
        if self.width == Some(0) || self.height == Some(0) {
            return Err("image dimensions must be positive".to_string());
        }
        if let Some(fov) = self.fov_degrees {
            if !(fov > 0.0 && fov < 180.0) {
                return Err(format!("fov_degrees must be in (0, 180), got {fov}"));
            }
        }
        if let Some(background) = self.background {
            if !background.is_finite() {
                return Err("background has a non-finite component".to_string());
            }
        }
        Ok(())
    }
}
