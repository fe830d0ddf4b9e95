//! Frame loops driving a [`Starfield`] onto a [`PixelCanvas`].

use glam::DVec2;
use starfield_config::{Config, RenderMode, ViewConfig};
use starfield_core::{FrameReport, Rgb, Starfield, Viewport, ViewportSurface};
use tracing::{debug, info};

use crate::canvas::PixelCanvas;

/// Canvas color behind the stars.
pub const BACKGROUND: Rgb = Rgb::new(4, 6, 16);

/// Totals over a demo run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u32,
    pub skipped_frames: u32,
    pub stars_drawn: u64,
}

/// Run the mode selected in `config` for `config.demo.frames` frames.
/// The canvas holds the last frame afterwards.
pub fn run(config: &Config, canvas: &mut PixelCanvas) -> RunStats {
    let mut field = Starfield::new(config.starfield.clone());
    match config.demo.mode {
        RenderMode::World => run_world(&mut field, canvas, &config.view, config.demo.frames),
        RenderMode::Fixed => run_fixed(&mut field, canvas, config.demo.frames),
    }
}

/// World-space mode under a viewport that pans and zooms every frame.
pub fn run_world(
    field: &mut Starfield,
    canvas: &mut PixelCanvas,
    view: &ViewConfig,
    frames: u32,
) -> RunStats {
    let mut stats = RunStats::default();
    let mut viewport = Viewport {
        pan: DVec2::new(view.pan_x, view.pan_y),
        zoom: view.zoom,
        canvas: DVec2::new(canvas.width() as f64, canvas.height() as f64),
    };
    let pan_step = DVec2::new(view.pan_speed_x, view.pan_speed_y);

    for frame in 0..frames {
        canvas.clear(BACKGROUND);
        let report = field.render_viewport(&mut ViewportSurface::new(canvas, viewport), &viewport);

        stats.frames += 1;
        match report {
            FrameReport::Drawn { tiles, stars } => {
                stats.stars_drawn += stars as u64;
                debug!(frame, tiles, stars, zoom = viewport.zoom, "world frame");
            }
            FrameReport::Skipped(reason) => {
                stats.skipped_frames += 1;
                debug!(frame, ?reason, zoom = viewport.zoom, "world frame skipped");
            }
        }

        viewport.pan += pan_step;
        viewport.zoom *= view.zoom_rate;
    }

    info!(
        "World run finished: {} frames, {} skipped, {} stars drawn",
        stats.frames, stats.skipped_frames, stats.stars_drawn
    );
    stats
}

/// Screen-space mode: drifting, wrapping stars sized to the canvas.
pub fn run_fixed(field: &mut Starfield, canvas: &mut PixelCanvas, frames: u32) -> RunStats {
    let mut stats = RunStats::default();
    field.initialize(canvas.width() as f64, canvas.height() as f64);

    for frame in 0..frames {
        canvas.clear(BACKGROUND);
        let stars = field.render(canvas);
        stats.frames += 1;
        stats.stars_drawn += stars as u64;
        if stars == 0 {
            stats.skipped_frames += 1;
        }
        debug!(frame, stars, "fixed frame");
    }

    info!(
        "Fixed run finished: {} frames, {} stars drawn",
        stats.frames, stats.stars_drawn
    );
    stats
}
