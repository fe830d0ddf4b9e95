//! Headless starfield demo.
//!
//! Configuration is loaded from `starfield.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p starfield-demo` to render the default world-space flight.
//! Run with `cargo run -p starfield-demo -- --mode fixed --frames 300` for the drifting field.

mod canvas;
mod demo;
mod error;

use clap::Parser;
use starfield_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

use crate::canvas::PixelCanvas;
use crate::error::DemoError;

fn main() {
    if let Err(e) = run() {
        error!("{e}");
        eprintln!("starfield: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => default_config_dir()?,
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    starfield_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        "Rendering {} frames in {:?} mode at {}x{} (seed {}, density {})",
        config.demo.frames,
        config.demo.mode,
        config.canvas.width,
        config.canvas.height,
        config.starfield.seed,
        config.starfield.star_density
    );

    let mut canvas = PixelCanvas::new(config.canvas.width, config.canvas.height);
    demo::run(&config, &mut canvas);

    canvas.save_png(&config.demo.output)?;
    info!("Wrote {}", config.demo.output.display());
    Ok(())
}
