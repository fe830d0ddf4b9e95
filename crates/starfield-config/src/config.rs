//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ConfigError;

const CONFIG_FILE: &str = "starfield.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output canvas settings.
    pub canvas: CanvasConfig,
    /// Starfield generation and animation parameters.
    pub starfield: StarfieldConfig,
    /// Initial viewport and its per-frame motion (world-space mode).
    pub view: ViewConfig,
    /// Demo run settings.
    pub demo: DemoConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Canvas configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Parameters shared by the world-space and fixed-field renderers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// When false every render call is a no-op.
    pub enabled: bool,
    /// Nominal star count. Fixed mode keeps exactly this many stars; world mode
    /// derives its per-tile count from it.
    pub star_density: u32,
    /// Smallest star radius.
    pub min_size: f64,
    /// Largest star radius.
    pub max_size: f64,
    /// Twinkle phase advance per frame.
    pub twinkle_speed: f64,
    /// Maximum drift per frame in fixed mode (each axis spans half of this either way).
    pub drift_speed: f64,
    /// Star fill color.
    pub color: Rgb,
    /// Seed for all procedural generation.
    pub seed: u32,
    /// Number of tiles kept in the world-space tile cache (0 disables it).
    pub tile_cache_capacity: usize,
}

/// Viewport configuration for world-space mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Initial horizontal pan offset in screen pixels.
    pub pan_x: f64,
    /// Initial vertical pan offset in screen pixels.
    pub pan_y: f64,
    /// Initial zoom factor (screen pixels per world unit).
    pub zoom: f64,
    /// Horizontal pan change per frame.
    pub pan_speed_x: f64,
    /// Vertical pan change per frame.
    pub pan_speed_y: f64,
    /// Multiplicative zoom change per frame (1.0 keeps the zoom constant).
    pub zoom_rate: f64,
}

/// Which renderer the demo drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Tiled stars anchored to world coordinates.
    World,
    /// Drifting stars in screen space.
    Fixed,
}

/// Demo run configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of frames to simulate before writing the output image.
    pub frames: u32,
    /// Renderer to drive.
    pub mode: RenderMode,
    /// Path of the PNG written after the last frame.
    pub output: PathBuf,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            star_density: 200,
            min_size: 0.5,
            max_size: 2.0,
            twinkle_speed: 0.02,
            drift_speed: 0.1,
            color: Rgb::WHITE,
            seed: 12345,
            tile_cache_capacity: 0,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
            pan_speed_x: -2.0,
            pan_speed_y: -1.0,
            zoom_rate: 1.0,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            mode: RenderMode::World,
            output: PathBuf::from("starfield.png"),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for this application, e.g. `~/.config/starfield`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("starfield"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `starfield.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
