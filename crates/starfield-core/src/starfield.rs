//! Host-facing starfield instance.
//!
//! Owns the configuration and both renderers. Lifecycle:
//! create, configure any number of times, render once per frame, drop.
//! Independent instances share nothing.

use starfield_config::{ConfigChange, StarfieldConfig, StarfieldOptions};

use crate::fixed::FixedFieldRenderer;
use crate::surface::DrawSurface;
use crate::viewport::Viewport;
use crate::world::{FrameReport, WorldSpaceRenderer};

#[derive(Debug)]
pub struct Starfield {
    config: StarfieldConfig,
    world: WorldSpaceRenderer,
    fixed: FixedFieldRenderer,
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new(StarfieldConfig::default())
    }
}

impl Starfield {
    pub fn new(config: StarfieldConfig) -> Self {
        let world = WorldSpaceRenderer::with_cache(config.tile_cache_capacity);
        Self {
            config,
            world,
            fixed: FixedFieldRenderer::new(),
        }
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn world(&self) -> &WorldSpaceRenderer {
        &self.world
    }

    pub fn fixed(&self) -> &FixedFieldRenderer {
        &self.fixed
    }

    /// Build the screen-space star array for a `width` x `height` canvas.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.fixed.initialize(&self.config, width, height);
    }

    /// Rescale the screen-space star array to a new canvas size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.fixed.resize(&self.config, width, height);
    }

    /// Advance and draw the screen-space field. Returns the number of stars drawn.
    pub fn render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        self.fixed.render(surface, &self.config)
    }

    /// Draw the world-space field for the given pan, zoom and canvas size.
    pub fn render_world_space<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        pan_x: f64,
        pan_y: f64,
        zoom: f64,
        canvas_w: f64,
        canvas_h: f64,
    ) -> FrameReport {
        let viewport = Viewport::new(pan_x, pan_y, zoom, canvas_w, canvas_h);
        self.render_viewport(surface, &viewport)
    }

    /// [`render_world_space`](Self::render_world_space) with a prebuilt viewport.
    pub fn render_viewport<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        viewport: &Viewport,
    ) -> FrameReport {
        self.world.render(surface, &self.config, viewport)
    }

    /// Apply partial overrides. A new star count or seed rebuilds the
    /// screen-space array at its current size.
    pub fn configure(&mut self, options: &StarfieldOptions) -> ConfigChange {
        let change = self.config.apply(options);
        if change.regenerate {
            log::debug!(
                "Regenerating fixed starfield (density {}, seed {})",
                self.config.star_density,
                self.config.seed
            );
            self.fixed.reinitialize(&self.config);
        }
        if change.tiles_invalidated {
            self.world.invalidate_tiles();
        }
        change
    }

    /// Best-effort color update from a hex string; malformed input is ignored.
    pub fn set_color(&mut self, hex: &str) {
        self.config.set_color(hex);
    }
}
