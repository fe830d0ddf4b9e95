//! World-space renderer: stars anchored to world coordinates under pan and zoom.
//!
//! Keeps no per-star state. Every frame re-derives the visible tiles from the
//! viewport and regenerates their stars from the seed, so arbitrary jumps in
//! pan or zoom always show the same stars at the same world positions. The
//! only state is the global twinkle phase, shared by every star so the whole
//! field pulses coherently while panning.

use starfield_config::{Rgb, StarfieldConfig};

use crate::cache::TileCache;
use crate::star::{Star, star_opacity};
use crate::surface::{DrawSurface, fill_circle};
use crate::tile::{TILE_SIZE, stars_for_tile, stars_per_tile};
use crate::viewport::{DEFAULT_MARGIN_TILES, TileCoverage, Viewport, visible_tiles};

/// Why a frame drew nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Rendering is turned off in the configuration.
    Disabled,
    /// Too many tiles would be visible at this zoom.
    BudgetExceeded { tiles: u64 },
    /// The viewport cannot be mapped to world tiles.
    InvalidViewport,
}

/// Outcome of one render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameReport {
    Drawn { tiles: u64, stars: usize },
    Skipped(SkipReason),
}

impl FrameReport {
    /// Stars drawn this frame (zero when skipped).
    pub fn stars_drawn(&self) -> usize {
        match self {
            FrameReport::Drawn { stars, .. } => *stars,
            FrameReport::Skipped(_) => 0,
        }
    }
}

/// Renders the tiled world-space starfield.
#[derive(Debug)]
pub struct WorldSpaceRenderer {
    phase: f64,
    margin_tiles: u32,
    cache: Option<TileCache>,
}

impl Default for WorldSpaceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldSpaceRenderer {
    pub fn new() -> Self {
        Self {
            phase: 0.0,
            margin_tiles: DEFAULT_MARGIN_TILES,
            cache: None,
        }
    }

    /// A renderer that keeps up to `capacity` generated tiles between frames.
    /// A capacity of zero disables caching.
    pub fn with_cache(capacity: usize) -> Self {
        Self {
            cache: (capacity > 0).then(|| TileCache::new(capacity)),
            ..Self::new()
        }
    }

    /// Global twinkle phase after the last active frame.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn cache(&self) -> Option<&TileCache> {
        self.cache.as_ref()
    }

    /// Drop cached tiles. Generation parameters are also checked on every
    /// lookup, so this only releases memory early.
    pub fn invalidate_tiles(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }

    /// Draw one frame in world coordinates.
    ///
    /// `surface` receives world-space circles; wrap a screen surface in
    /// [`ViewportSurface`](crate::surface::ViewportSurface) if it does not
    /// already carry the host's pan/zoom transform.
    pub fn render<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        config: &StarfieldConfig,
        viewport: &Viewport,
    ) -> FrameReport {
        if !config.enabled {
            return FrameReport::Skipped(SkipReason::Disabled);
        }

        self.phase += config.twinkle_speed;

        let range = match visible_tiles(viewport, TILE_SIZE, self.margin_tiles) {
            TileCoverage::Visible(range) => range,
            TileCoverage::BudgetExceeded { tiles } => {
                log::debug!("Skipping frame: {tiles} tiles visible at zoom {}", viewport.zoom);
                return FrameReport::Skipped(SkipReason::BudgetExceeded { tiles });
            }
            TileCoverage::InvalidViewport => {
                log::debug!("Skipping frame: invalid viewport {viewport:?}");
                return FrameReport::Skipped(SkipReason::InvalidViewport);
            }
        };

        let count = stars_per_tile(config.star_density);
        let phase = self.phase;
        let mut stars = 0;

        for key in range.iter() {
            stars += match self.cache.as_mut() {
                Some(cache) => {
                    let tile = cache.get_or_generate(
                        config.seed,
                        key,
                        count,
                        config.min_size,
                        config.max_size,
                    );
                    draw_tile(surface, tile, phase, config.color)
                }
                None => {
                    let tile =
                        stars_for_tile(config.seed, key, count, config.min_size, config.max_size);
                    draw_tile(surface, &tile, phase, config.color)
                }
            };
        }

        let tiles = range.tile_count();
        log::trace!("World frame: {tiles} tiles, {stars} stars, phase {phase:.3}");
        FrameReport::Drawn { tiles, stars }
    }
}

fn draw_tile<S: DrawSurface + ?Sized>(
    surface: &mut S,
    stars: &[Star],
    global_phase: f64,
    color: Rgb,
) -> usize {
    for star in stars {
        let opacity = star_opacity(
            star.base_opacity,
            global_phase * star.twinkle_rate + star.phase,
        );
        fill_circle(surface, star.x, star.y, star.size, color, opacity);
    }
    stars.len()
}
