//! Deterministic procedural starfield: seeded tile generation, viewport-to-tile
//! mapping, and the world-space and fixed screen-space renderers.

pub mod cache;
pub mod fixed;
pub mod rng;
pub mod star;
pub mod starfield;
pub mod surface;
pub mod tile;
pub mod viewport;
pub mod world;

pub use cache::TileCache;
pub use fixed::FixedFieldRenderer;
pub use rng::Mulberry32;
pub use star::{DriftingStar, Star, star_opacity, twinkle};
pub use starfield::Starfield;
pub use surface::{DrawCall, DrawRecorder, DrawSurface, ViewportSurface, fill_circle};
pub use tile::{TILE_SIZE, TileKey, stars_for_tile, stars_per_tile, tile_seed};
pub use viewport::{
    DEFAULT_MARGIN_TILES, MAX_VISIBLE_TILES, TileCoverage, TileRange, Viewport, visible_tiles,
};
pub use world::{FrameReport, SkipReason, WorldSpaceRenderer};

pub use starfield_config::{ConfigChange, Rgb, StarfieldConfig, StarfieldOptions};
