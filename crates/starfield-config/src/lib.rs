//! Configuration system for the starfield renderer.
//!
//! Provides the starfield parameters shared by both render modes, partial
//! runtime overrides, and the demo-level settings that persist to disk as RON.
//! Supports CLI overrides via clap and hot-reload detection.

mod cli;
mod color;
mod config;
mod error;
mod options;

pub use cli::CliArgs;
pub use color::{InvalidColor, Rgb};
pub use config::{
    CanvasConfig, Config, DebugConfig, DemoConfig, RenderMode, StarfieldConfig, ViewConfig,
    default_config_dir,
};
pub use error::ConfigError;
pub use options::{ConfigChange, StarfieldOptions};
