//! Prism Core - Scene description for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`, `Material`
//! - **Validation**: construction-time checks that keep the renderer infallible
//! - **Scene files**: JSON loading with optional render settings
//! - **Presets**: built-in demo scenes and materials
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let file = load_scene("scene.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     file.scene.sphere_count(),
//!     file.scene.light_count());
//! ```

pub mod loader;
pub mod material;
pub mod presets;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, SceneFile};
pub use material::{Albedo, Color, Material};
pub use scene::{Light, Scene, SceneError, Sphere};
pub use settings::RenderSettings;
