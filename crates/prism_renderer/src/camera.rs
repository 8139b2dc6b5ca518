//! Pinhole camera for primary ray generation.

use prism_core::RenderSettings;
use prism_math::{normalize_to, Ray, Vec3};

/// A pinhole camera at the origin looking down -Z with +Y up.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    /// Vertical field of view in radians
    fov: f32,

    // Cached from fov and resolution
    half_height: f32,
    aspect: f32,
}

impl Camera {
    /// Create a camera with a 90 degree field of view.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "image dimensions must be positive, got {width}x{height}"
        );

        let mut camera = Self {
            image_width: width,
            image_height: height,
            fov: std::f32::consts::FRAC_PI_2,
            half_height: 0.0,
            aspect: 0.0,
        };
        camera.update();
        camera
    }

    /// Set the vertical field of view, in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self.update();
        self
    }

    /// Build a camera from scene-file settings, falling back to
    /// `width` x `height` and 90 degrees.
    pub fn from_settings(settings: &RenderSettings, width: u32, height: u32) -> Self {
        let camera = Self::new(
            settings.width.unwrap_or(width),
            settings.height.unwrap_or(height),
        );
        match settings.fov_degrees {
            Some(degrees) => camera.with_fov(degrees.to_radians()),
            None => camera,
        }
    }

    /// Vertical field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    fn update(&mut self) {
        self.half_height = (self.fov / 2.0).tan();
        self.aspect = self.image_width as f32 / self.image_height as f32;
    }

    /// Generate the ray through the center of pixel (i, j).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let x = (2.0 * (i as f32 + 0.5) / self.image_width as f32 - 1.0)
            * self.half_height
            * self.aspect;
        let y = -(2.0 * (j as f32 + 0.5) / self.image_height as f32 - 1.0) * self.half_height;

        Ray::new(Vec3::ZERO, normalize_to(Vec3::new(x, y, -1.0), 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_center_pixel_looks_forward() {
        // Odd resolution puts a pixel center exactly on the optical axis
        let camera = Camera::new(101, 101);
        let ray = camera.primary_ray(50, 50);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert!((ray.direction - Vec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn test_primary_rays_are_unit_length() {
        let camera = Camera::new(64, 48);
        for (i, j) in [(0, 0), (63, 0), (0, 47), (63, 47), (31, 20)] {
            let ray = camera.primary_ray(i, j);
            assert!((ray.direction.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_top_left_points_up_and_left() {
        let camera = Camera::new(64, 48);
        let ray = camera.primary_ray(0, 0);

        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y > 0.0);
        assert!(ray.direction.z < 0.0);
    }

    #[test]
    fn test_matches_projection_formula() {
        let (width, height) = (1024_u32, 768_u32);
        let camera = Camera::new(width, height);
        let (i, j) = (100_u32, 700_u32);

        let fov = std::f32::consts::FRAC_PI_2;
        let x = (2.0 * (i as f32 + 0.5) / width as f32 - 1.0) * (fov / 2.0).tan() * width as f32
            / height as f32;
        let y = -(2.0 * (j as f32 + 0.5) / height as f32 - 1.0) * (fov / 2.0).tan();
        let expected = Vec3::new(x, y, -1.0).normalize();

        assert!((camera.primary_ray(i, j).direction - expected).length() < EPS);
    }

    #[test]
    fn test_90_degree_fov_edge() {
        // With a 90 degree vertical fov the top edge of the image sits at 45 degrees
        let camera = Camera::new(1, 1_000_000);
        let ray = camera.primary_ray(0, 0);
        let angle = ray.direction.y.atan2(-ray.direction.z);

        assert!((angle - std::f32::consts::FRAC_PI_4).abs() < 1e-3);
    }

    #[test]
    fn test_from_settings() {
        let settings = RenderSettings {
            width: Some(320),
            fov_degrees: Some(60.0),
            ..Default::default()
        };
        let camera = Camera::from_settings(&settings, 1024, 768);

        assert_eq!(camera.image_width, 320);
        assert_eq!(camera.image_height, 768);
        assert!((camera.fov() - 60.0_f32.to_radians()).abs() < EPS);
    }

    #[test]
    #[should_panic(expected = "image dimensions must be positive")]
    fn test_zero_dimensions_panic() {
        Camera::new(0, 10);
    }
}
