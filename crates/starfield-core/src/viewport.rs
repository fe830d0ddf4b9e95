//! Screen-to-world mapping and visible tile enumeration.
//!
//! The host's pan/zoom controller places world point `w` on screen at
//! `w * zoom + pan`. The mapper inverts that for the canvas corners, pads the
//! result by a margin of whole tiles, and refuses to enumerate more than
//! [`MAX_VISIBLE_TILES`] tiles.

use glam::DVec2;

use crate::tile::TileKey;

/// Most tiles a single frame may enumerate.
pub const MAX_VISIBLE_TILES: u64 = 400;

/// Tiles of padding on every side of the visible area.
pub const DEFAULT_MARGIN_TILES: u32 = 1;

/// A pan/zoom view onto world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Screen position of the world origin, in pixels.
    pub pan: DVec2,
    /// Screen pixels per world unit. Must be positive.
    pub zoom: f64,
    /// Canvas size in pixels.
    pub canvas: DVec2,
}

impl Viewport {
    pub fn new(pan_x: f64, pan_y: f64, zoom: f64, canvas_w: f64, canvas_h: f64) -> Self {
        Self {
            pan: DVec2::new(pan_x, pan_y),
            zoom,
            canvas: DVec2::new(canvas_w, canvas_h),
        }
    }

    /// `world = (screen - pan) / zoom`
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        (screen - self.pan) / self.zoom
    }

    /// `screen = world * zoom + pan`
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        world * self.zoom + self.pan
    }

    /// World-space rectangle covered by the canvas, as `(min, max)` corners.
    pub fn world_bounds(&self) -> (DVec2, DVec2) {
        let a = self.screen_to_world(DVec2::ZERO);
        let b = self.screen_to_world(self.canvas);
        (a.min(b), a.max(b))
    }

    fn is_valid(&self) -> bool {
        self.zoom.is_finite()
            && self.zoom > 0.0
            && self.pan.is_finite()
            && self.canvas.is_finite()
    }
}

/// Inclusive range of tile keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRange {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl TileRange {
    /// Number of tiles in the range. Saturates instead of overflowing.
    pub fn tile_count(&self) -> u64 {
        let width = span(self.min_x, self.max_x);
        let height = span(self.min_y, self.max_y);
        width.saturating_mul(height)
    }

    pub fn contains(&self, key: TileKey) -> bool {
        (self.min_x..=self.max_x).contains(&key.tx) && (self.min_y..=self.max_y).contains(&key.ty)
    }

    /// Keys in row-major order: rows by ascending `ty`, each row by ascending `tx`.
    pub fn iter(&self) -> impl Iterator<Item = TileKey> + use<> {
        let (min_x, max_x) = (self.min_x, self.max_x);
        (self.min_y..=self.max_y)
            .flat_map(move |ty| (min_x..=max_x).map(move |tx| TileKey::new(tx, ty)))
    }
}

fn span(min: i64, max: i64) -> u64 {
    if max < min {
        0
    } else {
        (max as i128 - min as i128 + 1).min(u64::MAX as i128) as u64
    }
}

/// Result of mapping a viewport to tiles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TileCoverage {
    /// Tiles to draw this frame.
    Visible(TileRange),
    /// The padded view spans more than [`MAX_VISIBLE_TILES`] tiles; skip the frame.
    BudgetExceeded { tiles: u64 },
    /// Zoom is not a positive finite number, the view does not map to finite
    /// world coordinates, or the tile size is not positive.
    InvalidViewport,
}

/// Tiles at least partially inside `viewport`, padded by `margin_tiles` on each side.
pub fn visible_tiles(viewport: &Viewport, tile_size: f64, margin_tiles: u32) -> TileCoverage {
    if !viewport.is_valid() || !(tile_size.is_finite() && tile_size > 0.0) {
        return TileCoverage::InvalidViewport;
    }

    let margin = margin_tiles as f64 * tile_size;
    let (min, max) = viewport.world_bounds();
    if !(min.is_finite() && max.is_finite()) {
        return TileCoverage::InvalidViewport;
    }
    let min = (min - margin) / tile_size;
    let max = (max + margin) / tile_size;

    // `as` saturates for out-of-range floats, which keeps the count check honest.
    let range = TileRange {
        min_x: min.x.floor() as i64,
        max_x: max.x.floor() as i64,
        min_y: min.y.floor() as i64,
        max_y: max.y.floor() as i64,
    };

    let tiles = range.tile_count();
    if tiles > MAX_VISIBLE_TILES {
        return TileCoverage::BudgetExceeded { tiles };
    }
    TileCoverage::Visible(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TILE_SIZE;

    #[test]
    fn test_pan_point_maps_to_world_origin() {
        let vp = Viewport::new(123.0, -45.0, 2.5, 800.0, 600.0);
        let world = vp.screen_to_world(DVec2::new(123.0, -45.0));
        assert_eq!(world, DVec2::ZERO);
    }

    #[test]
    fn test_one_tile_right_of_pan_maps_to_tile_edge() {
        let zoom = 0.75;
        let vp = Viewport::new(50.0, 80.0, zoom, 800.0, 600.0);
        let world = vp.screen_to_world(DVec2::new(50.0 + zoom * TILE_SIZE, 80.0));
        assert!((world.x - 400.0).abs() < 1e-9);
        assert_eq!(world.y, 0.0);
    }

    #[test]
    fn test_world_to_screen_inverts_screen_to_world() {
        let vp = Viewport::new(-310.0, 42.0, 1.7, 1024.0, 768.0);
        let screen = DVec2::new(517.0, 203.0);
        let back = vp.world_to_screen(vp.screen_to_world(screen));
        assert!((back - screen).length() < 1e-9);
    }

    #[test]
    fn test_identity_view_range() {
        // 800x800 canvas at zoom 1: world [0, 800] plus one tile of margin.
        let vp = Viewport::new(0.0, 0.0, 1.0, 800.0, 800.0);
        let TileCoverage::Visible(range) = visible_tiles(&vp, TILE_SIZE, 1) else {
            panic!("expected visible tiles");
        };
        assert_eq!(
            range,
            TileRange {
                min_x: -1,
                max_x: 3,
                min_y: -1,
                max_y: 3
            }
        );
        assert_eq!(range.tile_count(), 25);
    }

    #[test]
    fn test_zero_margin_range() {
        let vp = Viewport::new(0.0, 0.0, 1.0, 399.0, 399.0);
        assert_eq!(
            visible_tiles(&vp, TILE_SIZE, 0),
            TileCoverage::Visible(TileRange {
                min_x: 0,
                max_x: 0,
                min_y: 0,
                max_y: 0
            })
        );
    }

    #[test]
    fn test_pan_shifts_range() {
        // Panning right by two tiles shows world two tiles further left.
        let vp = Viewport::new(800.0, 0.0, 1.0, 800.0, 800.0);
        let TileCoverage::Visible(range) = visible_tiles(&vp, TILE_SIZE, 1) else {
            panic!("expected visible tiles");
        };
        assert_eq!((range.min_x, range.max_x), (-3, 1));
    }

    #[test]
    fn test_budget_exceeded_when_zoomed_far_out() {
        let vp = Viewport::new(0.0, 0.0, 0.05, 800.0, 800.0);
        match visible_tiles(&vp, TILE_SIZE, 1) {
            TileCoverage::BudgetExceeded { tiles } => assert!(tiles > MAX_VISIBLE_TILES),
            other => panic!("expected budget exceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_budget_boundary() {
        // 18 tiles of view plus margin = 20 per axis = exactly 400 tiles.
        let vp = Viewport::new(0.0, 0.0, 1.0, 18.0 * 400.0 - 1.0, 18.0 * 400.0 - 1.0);
        let TileCoverage::Visible(range) = visible_tiles(&vp, TILE_SIZE, 1) else {
            panic!("400 tiles must still be within budget");
        };
        assert_eq!(range.tile_count(), 400);

        let vp = Viewport::new(0.0, 0.0, 1.0, 18.0 * 400.0 + 1.0, 18.0 * 400.0 - 1.0);
        assert!(matches!(
            visible_tiles(&vp, TILE_SIZE, 1),
            TileCoverage::BudgetExceeded { tiles: 420 }
        ));
    }

    #[test]
    fn test_invalid_zoom_and_tile_size() {
        for zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let vp = Viewport::new(0.0, 0.0, zoom, 800.0, 600.0);
            assert_eq!(visible_tiles(&vp, TILE_SIZE, 1), TileCoverage::InvalidViewport);
        }
        let vp = Viewport::new(0.0, 0.0, 1.0, 800.0, 600.0);
        assert_eq!(visible_tiles(&vp, 0.0, 1), TileCoverage::InvalidViewport);
    }

    #[test]
    fn test_view_beyond_f64_range_is_invalid() {
        let vp = Viewport::new(1e300, -1e300, 1e-300, 800.0, 600.0);
        assert_eq!(visible_tiles(&vp, TILE_SIZE, 1), TileCoverage::InvalidViewport);
    }

    #[test]
    fn test_far_pan_saturates_without_overflow() {
        // Finite but beyond i64 tile indices: the count saturates instead of wrapping.
        let vp = Viewport::new(0.0, 0.0, 1e-20, 800.0, 600.0);
        assert!(matches!(
            visible_tiles(&vp, TILE_SIZE, 1),
            TileCoverage::BudgetExceeded { .. }
        ));
    }

    #[test]
    fn test_iter_is_row_major() {
        let range = TileRange {
            min_x: -1,
            max_x: 0,
            min_y: 5,
            max_y: 6,
        };
        let keys: Vec<_> = range.iter().collect();
        assert_eq!(
            keys,
            [
                TileKey::new(-1, 5),
                TileKey::new(0, 5),
                TileKey::new(-1, 6),
                TileKey::new(0, 6)
            ]
        );
        assert!(keys.iter().all(|k| range.contains(*k)));
    }

    #[test]
    fn test_empty_range_count() {
        let range = TileRange {
            min_x: 2,
            max_x: 1,
            min_y: 0,
            max_y: 0,
        };
        assert_eq!(range.tile_count(), 0);
        assert_eq!(range.iter().count(), 0);
    }
}
