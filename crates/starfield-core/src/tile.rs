//! Per-tile star generation.
//!
//! World space is cut into square tiles of [`TILE_SIZE`] units. A tile's stars
//! are a pure function of the global seed, the tile key and the density/size
//! parameters, so nothing about a tile is ever stored: it is rebuilt from its
//! key whenever it is needed.

use std::f64::consts::TAU;

use crate::rng::Mulberry32;
use crate::star::{
    BASE_OPACITY_SPAN, MIN_BASE_OPACITY, MIN_TWINKLE_RATE, Star, TWINKLE_RATE_SPAN,
    size_in_range,
};

/// Edge length of a tile in world units.
pub const TILE_SIZE: f64 = 400.0;

/// Spatial hash multipliers for the tile x, tile y and global seed.
const HASH_X: u32 = 73_856_093;
const HASH_Y: u32 = 19_349_663;
const HASH_SEED: u32 = 83_492_791;

/// Fewest stars a tile can hold.
const MIN_STARS_PER_TILE: u32 = 2;
/// Nominal star count per tile is `density / DENSITY_DIVISOR`.
const DENSITY_DIVISOR: u32 = 12;

/// Integer coordinates of a tile. Tile `(tx, ty)` covers
/// `[tx·size, (tx+1)·size) × [ty·size, (ty+1)·size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey {
    pub tx: i64,
    pub ty: i64,
}

impl TileKey {
    pub fn new(tx: i64, ty: i64) -> Self {
        Self { tx, ty }
    }

    /// Tile containing the world point.
    pub fn containing(x: f64, y: f64, tile_size: f64) -> Self {
        Self {
            tx: (x / tile_size).floor() as i64,
            ty: (y / tile_size).floor() as i64,
        }
    }

    /// World coordinates of the tile's top-left corner.
    pub fn origin(self, tile_size: f64) -> (f64, f64) {
        (self.tx as f64 * tile_size, self.ty as f64 * tile_size)
    }
}

/// Stars generated per tile for a nominal density: `max(2, round(density / 12))`.
pub fn stars_per_tile(star_density: u32) -> usize {
    let rounded = star_density.saturating_add(DENSITY_DIVISOR / 2) / DENSITY_DIVISOR;
    rounded.max(MIN_STARS_PER_TILE) as usize
}

/// Seed for a tile's generator.
///
/// Tile coordinates are reduced modulo 2^32 before mixing, so the hash is
/// defined for every `i64` key.
pub fn tile_seed(global_seed: u32, key: TileKey) -> u32 {
    (key.tx as u32)
        .wrapping_mul(HASH_X)
        .wrapping_add((key.ty as u32).wrapping_mul(HASH_Y))
        .wrapping_add(global_seed.wrapping_mul(HASH_SEED))
}

/// Generate the stars of one tile, in generation order.
///
/// Star positions are absolute world coordinates (tile origin plus offset).
/// Each star consumes six draws: x offset, y offset, size, base opacity,
/// twinkle rate, phase offset.
pub fn stars_for_tile(
    global_seed: u32,
    key: TileKey,
    count: usize,
    min_size: f64,
    max_size: f64,
) -> Vec<Star> {
    let mut rng = Mulberry32::new(tile_seed(global_seed, key));
    let (origin_x, origin_y) = key.origin(TILE_SIZE);

    (0..count)
        .map(|_| {
            let x = origin_x + rng.next_f64() * TILE_SIZE;
            let y = origin_y + rng.next_f64() * TILE_SIZE;
            let size = size_in_range(rng.next_f64(), min_size, max_size);
            let base_opacity = rng.next_range(MIN_BASE_OPACITY, BASE_OPACITY_SPAN);
            let twinkle_rate = rng.next_range(MIN_TWINKLE_RATE, TWINKLE_RATE_SPAN);
            let phase = rng.next_f64() * TAU;
            Star {
                x,
                y,
                size,
                base_opacity,
                twinkle_rate,
                phase,
            }
        })
        .collect()
}
