//! Command-line argument parsing for the starfield demo.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, RenderMode};

/// Starfield command-line arguments.
///
/// CLI values override settings loaded from `starfield.ron`.
#[derive(Parser, Debug)]
#[command(name = "starfield", about = "Deterministic procedural starfield renderer")]
pub struct CliArgs {
    /// Canvas width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Generation seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Nominal star count.
    #[arg(long)]
    pub density: Option<u32>,

    /// Star color as a hex string, e.g. "#ffeecc".
    #[arg(long)]
    pub color: Option<String>,

    /// Renderer to drive.
    #[arg(long, value_enum)]
    pub mode: Option<RenderMode>,

    /// Number of frames to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Initial zoom factor (world-space mode).
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Output PNG path.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.canvas.width = w;
        }
        if let Some(h) = args.height {
            self.canvas.height = h;
        }
        if let Some(seed) = args.seed {
            self.starfield.seed = seed;
        }
        if let Some(density) = args.density {
            self.starfield.star_density = density;
        }
        if let Some(ref color) = args.color {
            self.starfield.set_color(color);
        }
        if let Some(mode) = args.mode {
            self.demo.mode = mode;
        }
        if let Some(frames) = args.frames {
            self.demo.frames = frames;
        }
        if let Some(zoom) = args.zoom {
            self.view.zoom = zoom;
        }
        if let Some(ref output) = args.output {
            self.demo.output = output.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    fn empty_args() -> CliArgs {
        CliArgs {
            width: None,
            height: None,
            seed: None,
            density: None,
            color: None,
            mode: None,
            frames: None,
            zoom: None,
            output: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            seed: Some(99),
            color: Some("#ff0000".to_string()),
            mode: Some(RenderMode::Fixed),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.canvas.width, 1920);
        assert_eq!(config.starfield.seed, 99);
        assert_eq!(config.starfield.color, Rgb::new(255, 0, 0));
        assert_eq!(config.demo.mode, RenderMode::Fixed);
        // Non-overridden fields retain defaults
        assert_eq!(config.canvas.height, 720);
        assert_eq!(config.starfield.star_density, 200);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_bad_color_keeps_config_color() {
        let mut config = Config::default();
        let args = CliArgs {
            color: Some("red".to_string()),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.starfield.color, Rgb::WHITE);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "starfield",
            "--mode",
            "fixed",
            "--frames",
            "10",
            "--zoom",
            "0.5",
        ])
        .unwrap();
        assert_eq!(args.mode, Some(RenderMode::Fixed));
        assert_eq!(args.frames, Some(10));
        assert_eq!(args.zoom, Some(0.5));
    }
}
