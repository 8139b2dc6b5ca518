use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use prism_core::{load_scene, presets, RenderSettings, SceneFile};
use prism_renderer::{generate_buckets, render_buckets, Camera, RenderConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(version)]
#[command(about = "Render spheres and point lights with a recursive ray tracer")]
struct Cli {
    /// JSON scene file (overrides --preset)
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Built-in scene to render when no scene file is given
    #[arg(short, long, default_value = "classic")]
    preset: String,

    /// Output image; the format follows the extension (png, jpg, bmp, ...)
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    fov: Option<f32>,

    /// Maximum reflection/refraction recursion depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Disable shadow rays
    #[arg(long)]
    no_shadows: bool,

    /// Disable mirror reflection
    #[arg(long)]
    no_reflections: bool,

    /// Disable refraction
    #[arg(long)]
    no_refractions: bool,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = prism_renderer::DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Set logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl Cli {
    fn settings(&self) -> RenderSettings {
        RenderSettings {
            width: self.width,
            height: self.height,
            fov_degrees: self.fov,
            max_depth: self.max_depth,
            background: None,
        }
    }

    fn scene_file(&self) -> Result<SceneFile> {
        match &self.scene {
            Some(path) => load_scene(path)
                .with_context(|| format!("failed to load scene {}", path.display())),
            None => match presets::by_name(&self.preset) {
                Some(scene) => Ok(SceneFile {
                    scene,
                    render: RenderSettings::default(),
                }),
                None => bail!(
                    "unknown preset '{}' (expected one of: {})",
                    self.preset,
                    presets::NAMES.join(", ")
                ),
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.into())
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    let SceneFile { scene, render } = cli.scene_file()?;
    let settings = render.merge(cli.settings());
    if let Err(reason) = settings.check() {
        bail!("invalid render settings: {reason}");
    }

    let camera = Camera::from_settings(&settings, 1024, 768);
    let mut config = RenderConfig::default().with_settings(&settings);
    config.shadows = !cli.no_shadows;
    config.reflections = !cli.no_reflections;
    config.refractions = !cli.no_refractions;
    config.bucket_size = cli.bucket_size;

    log::info!(
        "Scene: {} spheres, {} lights, fov {:.1} deg, max depth {}",
        scene.sphere_count(),
        scene.light_count(),
        camera.fov().to_degrees(),
        config.max_depth
    );
    if scene.is_empty() {
        log::warn!("Scene has no spheres; the image will be background only");
    }

    let total = generate_buckets(camera.image_width, camera.image_height, config.bucket_size).len();
    let finished = AtomicUsize::new(0);
    let framebuffer = render_buckets(&scene, &camera, &config, |_| {
        let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
        log::debug!("{}/{} buckets ({:.0}%)", done, total, 100.0 * done as f32 / total as f32);
    });

    framebuffer
        .to_image()
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    log::info!("Saved {}", cli.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["prism"]).expect("no arguments is valid");
        assert_eq!(cli.preset, "classic");
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.settings(), RenderSettings::default());
    }

    #[test]
    fn test_flags_become_settings() {
        let cli = Cli::try_parse_from([
            "prism", "--width", "320", "--height", "240", "--fov", "60", "--max-depth", "3",
        ])
        .expect("flags should parse");
        let settings = cli.settings();

        assert_eq!(settings.width, Some(320));
        assert_eq!(settings.height, Some(240));
        assert_eq!(settings.fov_degrees, Some(60.0));
        assert_eq!(settings.max_depth, Some(3));
    }

    #[test]
    fn test_preset_scene() {
        let cli = Cli::try_parse_from(["prism", "--preset", "single_sphere"]).expect("parse");
        let file = cli.scene_file().expect("preset exists");
        assert_eq!(file.scene.sphere_count(), 1);
    }

    #[test]
    fn test_unknown_preset_is_error() {
        let cli = Cli::try_parse_from(["prism", "--preset", "cornell"]).expect("parse");
        let err = cli.scene_file().unwrap_err();
        assert!(err.to_string().contains("unknown preset 'cornell'"));
    }
}
